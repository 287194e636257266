use chrono::{Local, NaiveDate};
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use talenta::config::AppConfig;
use talenta::error::AppError;
use talenta::talent::{JsonFileRepository, TalentService};

use crate::cli::StorageArgs;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type FileTalentService = TalentService<JsonFileRepository>;

/// Applies the `--data-dir` override to the loaded configuration.
pub(crate) fn data_dir(config: &AppConfig, storage: &StorageArgs) -> PathBuf {
    storage
        .data_dir
        .clone()
        .unwrap_or_else(|| config.storage.data_dir.clone())
}

pub(crate) fn open_service(storage: &StorageArgs) -> Result<FileTalentService, AppError> {
    let config = AppConfig::load()?;
    let repository = JsonFileRepository::new(data_dir(&config, storage));
    Ok(TalentService::new(Arc::new(repository)))
}

pub(crate) fn today_or_local(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates_only() {
        assert_eq!(
            parse_date(" 2026-10-19 "),
            Ok(NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid"))
        );
        assert!(parse_date("19-10-2026").is_err());
    }

    #[test]
    fn explicit_today_wins_over_clock() {
        let fixed = NaiveDate::from_ymd_opt(2030, 1, 1).expect("valid");
        assert_eq!(today_or_local(Some(fixed)), fixed);
    }
}
