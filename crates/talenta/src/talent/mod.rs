//! Talent classification and succession planning for civil-service rosters.
//!
//! The core engine (`classification`, `retirement`, `succession`, `candidates`, `eselon`) is
//! pure and takes "today" as an argument. The service, importer and router layer persistence,
//! validation and HTTP on top of it.

pub mod candidates;
pub mod classification;
pub mod domain;
pub mod eselon;
pub mod export;
pub mod import;
pub mod report;
pub mod repository;
pub mod retirement;
pub mod roster;
pub mod router;
pub mod service;
pub mod succession;
pub mod validation;

#[cfg(test)]
mod tests;

pub use candidates::{find_candidates, top_talents};
pub use classification::{classify, scale, BoxPlacement, Tier};
pub use domain::{
    CareerRecord, CriticalJob, DevelopmentRecord, EducationRecord, Employee, EmployeeId, JobId,
    PerformanceRecord, SuccessionStatus, TrainingMode,
};
pub use eselon::{rank as eselon_rank, ESELON_ORDER};
pub use export::{write_recap, write_template, ExportError};
pub use import::{ImportBundle, ImportError, ImportOutcome, ImportPaths, RosterImporter};
pub use report::{DashboardSummary, EmployeeView, TalentPoolBrief};
pub use repository::{
    InMemoryTalentRepository, JsonFileRepository, RepositoryError, TalentRepository,
};
pub use retirement::{
    is_approaching_retirement, is_past_retirement_age, parse_birth_date, retirement_age,
    retirement_date, RetirementBand, RetirementOutlook,
};
pub use roster::{is_education_below_standard, RosterQuery, RosterSort};
pub use router::{talent_router, talent_router_with_clock};
pub use service::{TalentService, TalentServiceError};
pub use succession::evaluate;
pub use validation::{RecordGuard, RecordViolation};
