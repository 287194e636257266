use super::common::*;
use crate::talent::validation::{RecordGuard, RecordViolation};

#[test]
fn accepts_complete_employee() {
    let guard = RecordGuard::default();
    assert_eq!(guard.check_employee(&employee("1", "Ahmad", 1, 100)), Ok(()));
}

#[test]
fn rejects_blank_identity_fields() {
    let guard = RecordGuard::default();

    let mut nameless = employee("1", "  ", 80, 80);
    assert_eq!(
        guard.check_employee(&nameless),
        Err(RecordViolation::MissingName)
    );

    nameless.employee_number = " ".to_string();
    assert_eq!(
        guard.check_employee(&nameless),
        Err(RecordViolation::MissingEmployeeNumber)
    );
}

#[test]
fn rejects_scores_outside_percentage_range() {
    let guard = RecordGuard::default();

    match guard.check_employee(&employee("1", "Ahmad", 0, 80)) {
        Err(RecordViolation::ScoreOutOfRange { field, value, .. }) => {
            assert_eq!(field, "performance");
            assert_eq!(value, 0);
        }
        other => panic!("expected performance violation, got {other:?}"),
    }

    let mut over = employee("1", "Ahmad", 80, 80);
    over.competency = Some(101);
    assert!(matches!(
        guard.check_employee(&over),
        Err(RecordViolation::ScoreOutOfRange {
            field: "competency",
            ..
        })
    ));
}

#[test]
fn jobs_need_title_and_vacancy() {
    let guard = RecordGuard::default();
    assert_eq!(guard.check_job(&job("cj-1", "Kepala Seksi")), Ok(()));

    assert_eq!(
        guard.check_job(&job("cj-1", "   ")),
        Err(RecordViolation::MissingJobTitle)
    );

    let mut empty = job("cj-1", "Kepala Seksi");
    empty.vacancies = 0;
    assert_eq!(guard.check_job(&empty), Err(RecordViolation::NoVacancies));
}

#[test]
fn bare_score_pairs_use_the_same_range() {
    let guard = RecordGuard::default();
    assert_eq!(guard.check_scores(1, 100), Ok(()));
    assert!(matches!(
        guard.check_scores(90, 0),
        Err(RecordViolation::ScoreOutOfRange {
            field: "potential",
            ..
        })
    ));
}
