use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::candidates::find_candidates;
use super::domain::{CriticalJob, Employee, EmployeeId, JobId};
use super::export::{write_recap, ExportError};
use super::import::{ImportBundle, ImportError, ImportOutcome, RosterImporter};
use super::report::{dashboard_summary, talent_pool_brief, DashboardSummary, TalentPoolBrief};
use super::repository::{RepositoryError, TalentRepository};
use super::roster::RosterQuery;
use super::validation::{RecordGuard, RecordViolation};

/// Facade over the repository that keeps derived fields and validation rules in step with every
/// write.
pub struct TalentService<R> {
    guard: RecordGuard,
    repository: Arc<R>,
    writes: Mutex<()>,
}

static JOB_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_job_id(taken: &[CriticalJob]) -> JobId {
    loop {
        let id = JOB_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        let candidate = JobId(format!("cj-{id:06}"));
        if taken.iter().all(|job| job.id != candidate) {
            return candidate;
        }
    }
}

impl<R> TalentService<R>
where
    R: TalentRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self::with_guard(RecordGuard::default(), repository)
    }

    pub fn with_guard(guard: RecordGuard, repository: Arc<R>) -> Self {
        Self {
            guard,
            repository,
            writes: Mutex::new(()),
        }
    }

    pub fn guard(&self) -> &RecordGuard {
        &self.guard
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    fn lock_writes(&self) -> Result<MutexGuard<'_, ()>, TalentServiceError> {
        self.writes.lock().map_err(|_| {
            TalentServiceError::Repository(RepositoryError::Unavailable(
                "write lock poisoned".to_string(),
            ))
        })
    }

    /// Roster listing filtered and ordered by `query`.
    pub fn employees(&self, query: &RosterQuery) -> Result<Vec<Employee>, TalentServiceError> {
        let roster = self.repository.load_employees()?;
        Ok(query.apply(&roster).into_iter().cloned().collect())
    }

    pub fn employee(&self, id: &EmployeeId) -> Result<Employee, TalentServiceError> {
        self.repository
            .load_employees()?
            .into_iter()
            .find(|employee| &employee.id == id)
            .ok_or(TalentServiceError::Repository(RepositoryError::NotFound))
    }

    /// Validates, refreshes the derived fields and upserts `employee`.
    ///
    /// A blank id marks a new record: it gets the NIP as id, or a suffixed NIP when another
    /// record already holds that id. Only an explicit id replaces a stored record.
    pub fn save_employee(
        &self,
        mut employee: Employee,
        today: NaiveDate,
    ) -> Result<Employee, TalentServiceError> {
        self.guard.check_employee(&employee)?;

        employee.employee_number = employee.employee_number.trim().to_string();
        let creating = employee.id.0.trim().is_empty();

        let _writes = self.lock_writes()?;
        let mut roster = self.repository.load_employees()?;

        if creating {
            employee.id = EmployeeId::unused_for(&employee.employee_number, &roster);
        }

        if roster.iter().any(|other| {
            other.id != employee.id && other.employee_number == employee.employee_number
        }) {
            warn!(nip = %employee.employee_number, "rejecting duplicate NIP");
            return Err(TalentServiceError::DuplicateEmployeeNumber(
                employee.employee_number,
            ));
        }

        employee.refresh_derived(today);

        match roster.iter_mut().find(|existing| existing.id == employee.id) {
            Some(existing) => *existing = employee.clone(),
            None => roster.push(employee.clone()),
        }
        self.repository.save_employees(&roster)?;

        info!(
            id = %employee.id.0,
            status = employee.succession_status.label(),
            "employee saved"
        );
        Ok(employee)
    }

    pub fn delete_employee(&self, id: &EmployeeId) -> Result<Employee, TalentServiceError> {
        let _writes = self.lock_writes()?;
        let mut roster = self.repository.load_employees()?;
        let index = roster
            .iter()
            .position(|employee| &employee.id == id)
            .ok_or(RepositoryError::NotFound)?;

        let removed = roster.remove(index);
        self.repository.save_employees(&roster)?;
        info!(id = %id.0, "employee deleted");
        Ok(removed)
    }

    pub fn jobs(&self) -> Result<Vec<CriticalJob>, TalentServiceError> {
        Ok(self.repository.load_jobs()?)
    }

    /// Validates and upserts `job`, assigning a `cj-NNNNNN` id when none is set.
    pub fn save_job(&self, mut job: CriticalJob) -> Result<CriticalJob, TalentServiceError> {
        self.guard.check_job(&job)?;
        job.title = job.title.trim().to_string();

        let _writes = self.lock_writes()?;
        let mut jobs = self.repository.load_jobs()?;

        if job.id.0.trim().is_empty() {
            job.id = next_job_id(&jobs);
        }

        match jobs.iter_mut().find(|existing| existing.id == job.id) {
            Some(existing) => *existing = job.clone(),
            None => jobs.push(job.clone()),
        }
        self.repository.save_jobs(&jobs)?;

        info!(id = %job.id.0, title = %job.title, "critical job saved");
        Ok(job)
    }

    pub fn delete_job(&self, id: &JobId) -> Result<CriticalJob, TalentServiceError> {
        let _writes = self.lock_writes()?;
        let mut jobs = self.repository.load_jobs()?;
        let index = jobs
            .iter()
            .position(|job| &job.id == id)
            .ok_or(RepositoryError::NotFound)?;

        let removed = jobs.remove(index);
        self.repository.save_jobs(&jobs)?;
        info!(id = %id.0, "critical job deleted");
        Ok(removed)
    }

    /// The job together with its ranked successor candidates.
    pub fn candidates_for_job(
        &self,
        id: &JobId,
    ) -> Result<(CriticalJob, Vec<Employee>), TalentServiceError> {
        let job = self
            .repository
            .load_jobs()?
            .into_iter()
            .find(|job| &job.id == id)
            .ok_or(RepositoryError::NotFound)?;
        let roster = self.repository.load_employees()?;

        let candidates = find_candidates(&job, &roster).into_iter().cloned().collect();
        Ok((job, candidates))
    }

    pub fn dashboard(&self, today: NaiveDate) -> Result<DashboardSummary, TalentServiceError> {
        let roster = self.repository.load_employees()?;
        let jobs = self.repository.load_jobs()?;
        Ok(dashboard_summary(&roster, &jobs, today))
    }

    pub fn talent_pool_brief(&self) -> Result<TalentPoolBrief, TalentServiceError> {
        let roster = self.repository.load_employees()?;
        Ok(talent_pool_brief(&roster))
    }

    /// Recomputes every stored status as of `today`, returning how many changed.
    pub fn reevaluate_all(&self, today: NaiveDate) -> Result<usize, TalentServiceError> {
        let _writes = self.lock_writes()?;
        let mut roster = self.repository.load_employees()?;

        let mut changed = 0;
        for employee in &mut roster {
            let before = employee.succession_status;
            employee.refresh_derived(today);
            if employee.succession_status != before {
                debug!(
                    id = %employee.id.0,
                    from = before.label(),
                    to = employee.succession_status.label(),
                    "succession status changed"
                );
                changed += 1;
            }
        }

        if changed > 0 {
            self.repository.save_employees(&roster)?;
        }
        Ok(changed)
    }

    /// Merges an imported workbook into the stored roster and persists the result.
    pub fn import_roster(
        &self,
        bundle: &ImportBundle,
        today: NaiveDate,
    ) -> Result<ImportOutcome, TalentServiceError> {
        let _writes = self.lock_writes()?;
        let roster = self.repository.load_employees()?;
        let outcome = RosterImporter::merge(roster, bundle, today)?;
        self.repository.save_employees(&outcome.employees)?;
        Ok(outcome)
    }

    pub fn export_recap<W: Write>(
        &self,
        writer: W,
        today: NaiveDate,
    ) -> Result<usize, TalentServiceError> {
        let roster = self.repository.load_employees()?;
        write_recap(writer, &roster, today)?;
        Ok(roster.len())
    }
}

/// Error raised by the talent service.
#[derive(Debug, thiserror::Error)]
pub enum TalentServiceError {
    #[error(transparent)]
    Violation(#[from] RecordViolation),
    #[error("NIP {0} is already registered to another employee")]
    DuplicateEmployeeNumber(String),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    Export(#[from] ExportError),
}
