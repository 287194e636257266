use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::domain::{CriticalJob, Employee};

const EMPLOYEES_FILE: &str = "employees.json";
const CRITICAL_JOBS_FILE: &str = "critical_jobs.json";

/// Storage abstraction for the two roster collections. Collections are loaded and saved
/// whole, matching how the dashboard persists them.
pub trait TalentRepository: Send + Sync {
    fn load_employees(&self) -> Result<Vec<Employee>, RepositoryError>;
    fn save_employees(&self, employees: &[Employee]) -> Result<(), RepositoryError>;
    fn load_jobs(&self) -> Result<Vec<CriticalJob>, RepositoryError>;
    fn save_jobs(&self, jobs: &[CriticalJob]) -> Result<(), RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("storage io failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("stored data at {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// JSON documents in a data directory, one file per collection.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    root: PathBuf,
}

impl JsonFileRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, RepositoryError> {
        let path = self.root.join(file);
        let raw = match fs::read(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => return Err(RepositoryError::Io { path, source }),
        };

        serde_json::from_slice(&raw).map_err(|source| RepositoryError::Corrupt { path, source })
    }

    fn write<T: Serialize>(&self, file: &str, items: &[T]) -> Result<(), RepositoryError> {
        fs::create_dir_all(&self.root).map_err(|source| RepositoryError::Io {
            path: self.root.clone(),
            source,
        })?;

        let path = self.root.join(file);
        let body = serde_json::to_vec_pretty(items).map_err(|source| RepositoryError::Corrupt {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, body).map_err(|source| RepositoryError::Io { path, source })
    }
}

impl TalentRepository for JsonFileRepository {
    fn load_employees(&self) -> Result<Vec<Employee>, RepositoryError> {
        self.read(EMPLOYEES_FILE)
    }

    fn save_employees(&self, employees: &[Employee]) -> Result<(), RepositoryError> {
        self.write(EMPLOYEES_FILE, employees)
    }

    fn load_jobs(&self) -> Result<Vec<CriticalJob>, RepositoryError> {
        self.read(CRITICAL_JOBS_FILE)
    }

    fn save_jobs(&self, jobs: &[CriticalJob]) -> Result<(), RepositoryError> {
        self.write(CRITICAL_JOBS_FILE, jobs)
    }
}

/// Process-local store used by tests and throwaway server runs.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTalentRepository {
    employees: Arc<Mutex<Vec<Employee>>>,
    jobs: Arc<Mutex<Vec<CriticalJob>>>,
}

impl InMemoryTalentRepository {
    pub fn seeded(employees: Vec<Employee>, jobs: Vec<CriticalJob>) -> Self {
        Self {
            employees: Arc::new(Mutex::new(employees)),
            jobs: Arc::new(Mutex::new(jobs)),
        }
    }
}

fn poisoned<T>(_: std::sync::PoisonError<T>) -> RepositoryError {
    RepositoryError::Unavailable("repository mutex poisoned".to_string())
}

impl TalentRepository for InMemoryTalentRepository {
    fn load_employees(&self) -> Result<Vec<Employee>, RepositoryError> {
        Ok(self.employees.lock().map_err(poisoned)?.clone())
    }

    fn save_employees(&self, employees: &[Employee]) -> Result<(), RepositoryError> {
        *self.employees.lock().map_err(poisoned)? = employees.to_vec();
        Ok(())
    }

    fn load_jobs(&self) -> Result<Vec<CriticalJob>, RepositoryError> {
        Ok(self.jobs.lock().map_err(poisoned)?.clone())
    }

    fn save_jobs(&self, jobs: &[CriticalJob]) -> Result<(), RepositoryError> {
        *self.jobs.lock().map_err(poisoned)? = jobs.to_vec();
        Ok(())
    }
}
