use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::domain::{CriticalJob, Employee, EmployeeId, JobId};
use super::import::ImportBundle;
use super::report::{CandidateView, EmployeeView, PlacementView};
use super::repository::TalentRepository;
use super::retirement::{parse_birth_date, RetirementOutlook};
use super::roster::RosterQuery;
use super::service::{TalentService, TalentServiceError};
use super::succession::evaluate_with_outlook;
use crate::error::AppError;

/// Shared handler state: the service plus the clock that supplies "today".
pub struct TalentApi<R> {
    service: Arc<TalentService<R>>,
    today: fn() -> NaiveDate,
}

impl<R> Clone for TalentApi<R> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            today: self.today,
        }
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Router exposing the talent endpoints, dated by the local clock.
pub fn talent_router<R>(service: Arc<TalentService<R>>) -> Router
where
    R: TalentRepository + 'static,
{
    talent_router_with_clock(service, local_today)
}

pub fn talent_router_with_clock<R>(service: Arc<TalentService<R>>, today: fn() -> NaiveDate) -> Router
where
    R: TalentRepository + 'static,
{
    Router::new()
        .route("/api/v1/talent/classify", post(classify_handler::<R>))
        .route(
            "/api/v1/talent/employees",
            get(list_employees_handler::<R>).post(save_employee_handler::<R>),
        )
        .route(
            "/api/v1/talent/employees/:employee_id",
            get(employee_handler::<R>).delete(delete_employee_handler::<R>),
        )
        .route(
            "/api/v1/talent/jobs",
            get(list_jobs_handler::<R>).post(save_job_handler::<R>),
        )
        .route(
            "/api/v1/talent/jobs/:job_id",
            axum::routing::delete(delete_job_handler::<R>),
        )
        .route(
            "/api/v1/talent/jobs/:job_id/candidates",
            get(candidates_handler::<R>),
        )
        .route("/api/v1/talent/summary", get(summary_handler::<R>))
        .route("/api/v1/talent/talent-pool", get(talent_pool_handler::<R>))
        .route("/api/v1/talent/import", post(import_handler::<R>))
        .route("/api/v1/talent/export", get(export_handler::<R>))
        .route(
            "/api/v1/talent/export/template",
            get(export_template_handler),
        )
        .with_state(TalentApi { service, today })
}

/// Ad-hoc placement request; retirement is only considered when a NIP is supplied.
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub performance: u8,
    pub potential: u8,
    #[serde(default)]
    pub employee_number: Option<String>,
    #[serde(default)]
    pub role_tier: String,
}

async fn classify_handler<R>(
    State(api): State<TalentApi<R>>,
    Json(request): Json<ClassifyRequest>,
) -> Result<Response, AppError>
where
    R: TalentRepository + 'static,
{
    api.service
        .guard()
        .check_scores(request.performance, request.potential)
        .map_err(TalentServiceError::from)?;

    let today = (api.today)();
    let birth_date = request.employee_number.as_deref().and_then(parse_birth_date);
    let outlook = RetirementOutlook::assess(birth_date, &request.role_tier, today);
    let status = evaluate_with_outlook(request.performance, request.potential, &outlook);

    let payload = json!({
        "placement": PlacementView::for_scores(request.performance, request.potential),
        "succession_status": status,
        "succession_label": status.label(),
        "retirement": outlook,
    });
    Ok((StatusCode::OK, Json(payload)).into_response())
}

async fn list_employees_handler<R>(
    State(api): State<TalentApi<R>>,
    Query(query): Query<RosterQuery>,
) -> Result<Response, AppError>
where
    R: TalentRepository + 'static,
{
    let today = (api.today)();
    let views: Vec<EmployeeView> = api
        .service
        .employees(&query)?
        .iter()
        .map(|employee| EmployeeView::build(employee, today))
        .collect();
    Ok((StatusCode::OK, Json(views)).into_response())
}

async fn save_employee_handler<R>(
    State(api): State<TalentApi<R>>,
    Json(employee): Json<Employee>,
) -> Result<Response, AppError>
where
    R: TalentRepository + 'static,
{
    let today = (api.today)();
    let saved = api.service.save_employee(employee, today)?;
    let payload = json!({
        "employee": saved,
        "view": EmployeeView::build(&saved, today),
    });
    Ok((StatusCode::OK, Json(payload)).into_response())
}

async fn employee_handler<R>(
    State(api): State<TalentApi<R>>,
    Path(employee_id): Path<String>,
) -> Result<Response, AppError>
where
    R: TalentRepository + 'static,
{
    let employee = api.service.employee(&EmployeeId(employee_id))?;
    let payload = json!({
        "view": EmployeeView::build(&employee, (api.today)()),
        "employee": employee,
    });
    Ok((StatusCode::OK, Json(payload)).into_response())
}

async fn delete_employee_handler<R>(
    State(api): State<TalentApi<R>>,
    Path(employee_id): Path<String>,
) -> Result<Response, AppError>
where
    R: TalentRepository + 'static,
{
    api.service.delete_employee(&EmployeeId(employee_id))?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

async fn list_jobs_handler<R>(State(api): State<TalentApi<R>>) -> Result<Response, AppError>
where
    R: TalentRepository + 'static,
{
    let jobs = api.service.jobs()?;
    Ok((StatusCode::OK, Json(jobs)).into_response())
}

async fn save_job_handler<R>(
    State(api): State<TalentApi<R>>,
    Json(job): Json<JobDraft>,
) -> Result<Response, AppError>
where
    R: TalentRepository + 'static,
{
    let saved = api.service.save_job(job.into_job())?;
    Ok((StatusCode::CREATED, Json(saved)).into_response())
}

/// Critical-job payload; the id is optional so new jobs can be posted without one.
#[derive(Debug, Deserialize)]
pub struct JobDraft {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub work_unit: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_role_tier: String,
    #[serde(default = "single_vacancy")]
    pub vacancies: u32,
}

fn single_vacancy() -> u32 {
    1
}

impl JobDraft {
    fn into_job(self) -> CriticalJob {
        CriticalJob {
            id: JobId(self.id.unwrap_or_default()),
            title: self.title,
            work_unit: self.work_unit,
            description: self.description,
            required_role_tier: self.required_role_tier,
            vacancies: self.vacancies,
        }
    }
}

async fn delete_job_handler<R>(
    State(api): State<TalentApi<R>>,
    Path(job_id): Path<String>,
) -> Result<Response, AppError>
where
    R: TalentRepository + 'static,
{
    api.service.delete_job(&JobId(job_id))?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

async fn candidates_handler<R>(
    State(api): State<TalentApi<R>>,
    Path(job_id): Path<String>,
) -> Result<Response, AppError>
where
    R: TalentRepository + 'static,
{
    let (job, candidates) = api.service.candidates_for_job(&JobId(job_id))?;
    let today = (api.today)();
    let views: Vec<CandidateView> = candidates
        .iter()
        .map(|employee| CandidateView::build(employee, today))
        .collect();
    let payload = json!({
        "job": job,
        "candidates": views,
    });
    Ok((StatusCode::OK, Json(payload)).into_response())
}

async fn summary_handler<R>(State(api): State<TalentApi<R>>) -> Result<Response, AppError>
where
    R: TalentRepository + 'static,
{
    let summary = api.service.dashboard((api.today)())?;
    Ok((StatusCode::OK, Json(summary)).into_response())
}

async fn talent_pool_handler<R>(State(api): State<TalentApi<R>>) -> Result<Response, AppError>
where
    R: TalentRepository + 'static,
{
    let brief = api.service.talent_pool_brief()?;
    Ok((StatusCode::OK, Json(brief)).into_response())
}

async fn import_handler<R>(
    State(api): State<TalentApi<R>>,
    Json(bundle): Json<ImportBundle>,
) -> Result<Response, AppError>
where
    R: TalentRepository + 'static,
{
    let outcome = api.service.import_roster(&bundle, (api.today)())?;
    Ok((StatusCode::OK, Json(outcome)).into_response())
}

const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

async fn export_handler<R>(State(api): State<TalentApi<R>>) -> Result<Response, AppError>
where
    R: TalentRepository + 'static,
{
    let mut body = Vec::new();
    api.service.export_recap(&mut body, (api.today)())?;
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"rekap_talenta.csv\"",
            ),
        ],
        body,
    )
        .into_response())
}

async fn export_template_handler() -> Result<Response, AppError> {
    let mut body = Vec::new();
    super::export::write_template(&mut body)
        .map_err(|err| AppError::Talent(err.into()))?;
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"template_impor_pegawai.csv\"",
            ),
        ],
        body,
    )
        .into_response())
}
