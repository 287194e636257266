use std::sync::Arc;

use axum::body::to_bytes;
use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::talent::domain::{CriticalJob, Employee, JobId};
use crate::talent::repository::{
    InMemoryTalentRepository, RepositoryError, TalentRepository,
};
use crate::talent::service::TalentService;

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn today() -> NaiveDate {
    date(2026, 10, 19)
}

/// Employee whose NIP carries no parseable birth date, so only the 9-box decides.
pub(super) fn employee(id: &str, name: &str, performance: u8, potential: u8) -> Employee {
    let mut employee = Employee::new(format!("X{id}"), name, "Staf", performance, potential);
    employee.position = "Analis Kebijakan".to_string();
    employee.work_unit = "Bappeda".to_string();
    employee
}

pub(super) fn targeting(mut employee: Employee, title: &str) -> Employee {
    employee.target_critical_position = title.to_string();
    employee
}

pub(super) fn job(id: &str, title: &str) -> CriticalJob {
    CriticalJob {
        id: JobId(id.to_string()),
        title: title.to_string(),
        work_unit: "Bappeda".to_string(),
        description: String::new(),
        required_role_tier: "Administrator (Eselon III)".to_string(),
        vacancies: 1,
    }
}

pub(super) fn seeded_service(
    employees: Vec<Employee>,
    jobs: Vec<CriticalJob>,
) -> (Arc<TalentService<InMemoryTalentRepository>>, InMemoryTalentRepository) {
    let repository = InMemoryTalentRepository::seeded(employees, jobs);
    let service = Arc::new(TalentService::new(Arc::new(repository.clone())));
    (service, repository)
}

pub(super) struct UnavailableRepository;

impl TalentRepository for UnavailableRepository {
    fn load_employees(&self) -> Result<Vec<Employee>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn save_employees(&self, _employees: &[Employee]) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn load_jobs(&self) -> Result<Vec<CriticalJob>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn save_jobs(&self, _jobs: &[CriticalJob]) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}

pub(super) async fn text_body(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body readable");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}
