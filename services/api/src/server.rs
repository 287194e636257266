use crate::cli::ServeArgs;
use crate::infra::{data_dir, AppState};
use crate::routes::with_talent_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use chrono::Local;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use talenta::config::AppConfig;
use talenta::error::AppError;
use talenta::talent::{JsonFileRepository, TalentService};
use talenta::telemetry;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    config.storage.data_dir = data_dir(&config, &args.storage);

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(JsonFileRepository::new(config.storage.data_dir.clone()));
    let talent_service = Arc::new(TalentService::new(repository));

    let changed = talent_service.reevaluate_all(Local::now().date_naive())?;
    info!(
        data_dir = %config.storage.data_dir.display(),
        changed,
        "succession statuses refreshed"
    );

    let app = with_talent_routes(talent_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "talent service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
