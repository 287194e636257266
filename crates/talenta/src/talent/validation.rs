use std::ops::RangeInclusive;

use super::domain::{CriticalJob, Employee};

/// Validation errors raised by the record guard before anything is persisted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordViolation {
    #[error("NIP must not be blank")]
    MissingEmployeeNumber,
    #[error("employee name must not be blank")]
    MissingName,
    #[error("{field} score {value} outside {min}..={max}")]
    ScoreOutOfRange {
        field: &'static str,
        value: u8,
        min: u8,
        max: u8,
    },
    #[error("critical job title must not be blank")]
    MissingJobTitle,
    #[error("critical job must have at least one vacancy")]
    NoVacancies,
}

const DEFAULT_SCORE_RANGE: RangeInclusive<u8> = 1..=100;

/// Guard enforcing the form-level rules the classification engine relies on.
#[derive(Debug, Clone)]
pub struct RecordGuard {
    score_range: RangeInclusive<u8>,
}

impl Default for RecordGuard {
    fn default() -> Self {
        Self {
            score_range: DEFAULT_SCORE_RANGE,
        }
    }
}

impl RecordGuard {
    pub fn check_employee(&self, employee: &Employee) -> Result<(), RecordViolation> {
        if employee.employee_number.trim().is_empty() {
            return Err(RecordViolation::MissingEmployeeNumber);
        }
        if employee.name.trim().is_empty() {
            return Err(RecordViolation::MissingName);
        }

        self.check_scores(employee.performance, employee.potential)?;
        if let Some(competency) = employee.competency {
            self.check_score("competency", competency)?;
        }

        Ok(())
    }

    /// Range check for a bare score pair, as submitted for ad-hoc classification.
    pub fn check_scores(&self, performance: u8, potential: u8) -> Result<(), RecordViolation> {
        self.check_score("performance", performance)?;
        self.check_score("potential", potential)
    }

    pub fn check_job(&self, job: &CriticalJob) -> Result<(), RecordViolation> {
        if job.title.trim().is_empty() {
            return Err(RecordViolation::MissingJobTitle);
        }
        if job.vacancies == 0 {
            return Err(RecordViolation::NoVacancies);
        }
        Ok(())
    }

    fn check_score(&self, field: &'static str, value: u8) -> Result<(), RecordViolation> {
        if self.score_range.contains(&value) {
            Ok(())
        } else {
            Err(RecordViolation::ScoreOutOfRange {
                field,
                value,
                min: *self.score_range.start(),
                max: *self.score_range.end(),
            })
        }
    }
}
