use chrono::NaiveDate;
use tracing::debug;

use super::classification::classify;
use super::domain::{Employee, SuccessionStatus};
use super::retirement::RetirementOutlook;

/// Readiness bucket for a 9-box cell. Total over every `u8`.
pub const fn status_for_box(box_number: u8) -> SuccessionStatus {
    match box_number {
        9 | 8 => SuccessionStatus::ReadyNow,
        7 | 5 => SuccessionStatus::OneToTwoYears,
        6 | 4 | 3 => SuccessionStatus::FuturePotential,
        _ => SuccessionStatus::NotACandidate,
    }
}

/// Derives the succession status for `employee` as of `today`.
///
/// An employee past retirement age, or retiring within a year, is never a candidate; otherwise
/// the 9-box placement decides.
pub fn evaluate(employee: &Employee, today: NaiveDate) -> SuccessionStatus {
    let outlook = RetirementOutlook::assess(
        employee.resolved_birth_date(),
        &employee.role_tier,
        today,
    );
    evaluate_with_outlook(employee.performance, employee.potential, &outlook)
}

pub fn evaluate_with_outlook(
    performance: u8,
    potential: u8,
    outlook: &RetirementOutlook,
) -> SuccessionStatus {
    if outlook.birth_date.is_some() && outlook.blocks_succession() {
        debug!(
            retirement_date = ?outlook.retirement_date,
            past = outlook.past,
            "retirement overrides succession placement"
        );
        return SuccessionStatus::NotACandidate;
    }

    status_for_box(classify(performance, potential).box_number)
}
