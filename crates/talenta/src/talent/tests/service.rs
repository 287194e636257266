use std::sync::Arc;

use super::common::*;
use crate::talent::domain::{EmployeeId, JobId, SuccessionStatus};
use crate::talent::import::ImportBundle;
use crate::talent::repository::{RepositoryError, TalentRepository};
use crate::talent::roster::{RosterQuery, RosterSort};
use crate::talent::service::{TalentService, TalentServiceError};
use crate::talent::validation::RecordViolation;

#[test]
fn save_employee_refreshes_derived_fields() {
    let (service, repository) = seeded_service(Vec::new(), Vec::new());
    let mut draft = employee("ignored", "Ahmad Subarjo", 92, 95);
    draft.employee_number = " 198501152010011001 ".to_string();
    draft.id = EmployeeId(String::new());

    let saved = service.save_employee(draft, today()).expect("saved");

    assert_eq!(saved.employee_number, "198501152010011001");
    assert_eq!(saved.id, EmployeeId("198501152010011001".to_string()));
    assert_eq!(saved.birth_date, Some(date(1985, 1, 15)));
    assert_eq!(saved.succession_status, SuccessionStatus::ReadyNow);
    assert_eq!(repository.load_employees().expect("load"), vec![saved]);
}

#[test]
fn save_employee_updates_in_place() {
    let (service, repository) = seeded_service(vec![employee("1", "Ahmad", 50, 50)], Vec::new());
    let mut stored = service.employee(&EmployeeId("X1".to_string())).expect("present");
    stored.performance = 95;
    stored.potential = 95;

    let saved = service.save_employee(stored, today()).expect("saved");

    assert_eq!(saved.succession_status, SuccessionStatus::ReadyNow);
    assert_eq!(repository.load_employees().expect("load").len(), 1);
}

#[test]
fn creating_without_id_keeps_record_holding_that_nip_as_id() {
    let mut renumbered = employee("1", "Ahmad", 80, 80);
    renumbered.id = EmployeeId("198501152010011001".to_string());
    renumbered.employee_number = "199003202015022002".to_string();
    let (service, repository) = seeded_service(vec![renumbered.clone()], Vec::new());

    let mut draft = employee("2", "Budi", 92, 95);
    draft.employee_number = "198501152010011001".to_string();
    draft.id = EmployeeId(String::new());
    let saved = service.save_employee(draft, today()).expect("saved");

    assert_eq!(saved.id, EmployeeId("198501152010011001-2".to_string()));
    let stored = repository.load_employees().expect("load");
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0], renumbered);
    assert_eq!(stored[1].name, "Budi");
}

#[test]
fn save_employee_rejects_duplicate_nip() {
    let (service, _) = seeded_service(vec![employee("1", "Ahmad", 80, 80)], Vec::new());
    let mut other = employee("1", "Budi", 80, 80);
    other.id = EmployeeId("budi".to_string());

    match service.save_employee(other, today()) {
        Err(TalentServiceError::DuplicateEmployeeNumber(nip)) => assert_eq!(nip, "X1"),
        other => panic!("expected duplicate NIP, got {other:?}"),
    }
}

#[test]
fn save_employee_propagates_validation_errors() {
    let (service, repository) = seeded_service(Vec::new(), Vec::new());

    match service.save_employee(employee("1", "Ahmad", 0, 80), today()) {
        Err(TalentServiceError::Violation(RecordViolation::ScoreOutOfRange { .. })) => {}
        other => panic!("expected score violation, got {other:?}"),
    }
    assert!(repository.load_employees().expect("load").is_empty());
}

#[test]
fn delete_unknown_employee_is_not_found() {
    let (service, _) = seeded_service(Vec::new(), Vec::new());
    assert!(matches!(
        service.delete_employee(&EmployeeId("missing".to_string())),
        Err(TalentServiceError::Repository(RepositoryError::NotFound))
    ));
}

#[test]
fn employees_apply_query() {
    let (service, _) = seeded_service(
        vec![
            employee("1", "Citra", 70, 80),
            employee("2", "Ahmad", 90, 80),
            employee("3", "Budi", 80, 80),
        ],
        Vec::new(),
    );

    let query = RosterQuery {
        search: None,
        sort: RosterSort::PerformanceDesc,
    };
    let names: Vec<String> = service
        .employees(&query)
        .expect("listed")
        .into_iter()
        .map(|employee| employee.name)
        .collect();
    assert_eq!(names, vec!["Ahmad", "Budi", "Citra"]);
}

#[test]
fn save_job_assigns_sequential_id_when_blank() {
    let (service, _) = seeded_service(Vec::new(), Vec::new());

    let first = service
        .save_job(job("", " Kepala Bidang Perencanaan "))
        .expect("saved");
    let second = service.save_job(job("", "Sekretaris Dinas")).expect("saved");

    assert!(first.id.0.starts_with("cj-"));
    assert_eq!(first.id.0.len(), "cj-000000".len());
    assert_ne!(first.id, second.id);
    assert_eq!(first.title, "Kepala Bidang Perencanaan");
    assert_eq!(service.jobs().expect("jobs").len(), 2);
}

#[test]
fn candidates_for_job_ranks_targeting_employees() {
    let title = "Kepala Bidang Perencanaan";
    let (service, _) = seeded_service(
        vec![
            targeting(employee("1", "Eight", 85, 92), title),
            targeting(employee("2", "Nine", 95, 95), title),
            targeting(employee("3", "Five", 80, 80), title),
        ],
        vec![job("cj-000010", title)],
    );

    let (found_job, candidates) = service
        .candidates_for_job(&JobId("cj-000010".to_string()))
        .expect("job exists");
    assert_eq!(found_job.title, title);
    let names: Vec<&str> = candidates.iter().map(|employee| employee.name.as_str()).collect();
    assert_eq!(names, vec!["Nine", "Eight"]);

    assert!(matches!(
        service.candidates_for_job(&JobId("cj-404".to_string())),
        Err(TalentServiceError::Repository(RepositoryError::NotFound))
    ));
}

#[test]
fn reevaluate_all_counts_changed_statuses() {
    let mut stale = employee("1", "Ahmad", 95, 95);
    stale.succession_status = SuccessionStatus::NotACandidate;
    let mut current = employee("2", "Budi", 50, 50);
    current.succession_status = SuccessionStatus::NotACandidate;
    let (service, repository) = seeded_service(vec![stale, current], Vec::new());

    assert_eq!(service.reevaluate_all(today()).expect("reevaluated"), 1);
    let stored = repository.load_employees().expect("load");
    assert_eq!(stored[0].succession_status, SuccessionStatus::ReadyNow);
    assert_eq!(service.reevaluate_all(today()).expect("idempotent"), 0);
}

#[test]
fn dashboard_counts_boxes_statuses_and_vacancies() {
    let nine = employee("1", "Nine", 95, 95);
    let one = employee("2", "One", 40, 40);
    let mut jobs = vec![job("cj-1", "Kepala Seksi"), job("cj-2", "Kepala Bidang")];
    jobs[1].vacancies = 3;
    let (service, _) = seeded_service(vec![nine, one], jobs);

    let summary = service.dashboard(today()).expect("summary");

    assert_eq!(summary.total_employees, 2);
    assert_eq!(summary.total_critical_jobs, 2);
    assert_eq!(summary.total_vacancies, 4);
    assert_eq!(summary.ready_now, 1);
    assert_eq!(summary.box_counts.len(), 9);
    assert_eq!(summary.box_counts[0].box_number, 9);
    assert_eq!(summary.box_counts[0].count, 1);
    assert_eq!(summary.box_counts[8].box_number, 1);
    assert_eq!(summary.box_counts[8].count, 1);
    assert_eq!(summary.top_talents.len(), 1);
    assert_eq!(summary.top_talents[0].name, "Nine");
}

#[test]
fn talent_pool_brief_groups_boxes() {
    let (service, _) = seeded_service(
        vec![
            employee("1", "Nine", 95, 95),
            employee("2", "Core", 80, 80),
            employee("3", "Risk", 40, 40),
        ],
        Vec::new(),
    );

    let brief = service.talent_pool_brief().expect("brief");

    assert_eq!(brief.total_employees, 3);
    assert_eq!(brief.boxes.len(), 9);
    let boxes = |group: &[crate::talent::report::views::BoxRoster]| -> Vec<u8> {
        group.iter().map(|roster| roster.box_number).collect()
    };
    assert_eq!(boxes(&brief.top_talent), vec![9, 8, 7]);
    assert_eq!(boxes(&brief.core), vec![5, 4, 2]);
    assert_eq!(boxes(&brief.at_risk), vec![1, 3, 6]);
    assert_eq!(brief.top_talent[0].members[0].name, "Nine");
    assert_eq!(brief.core[0].count, 1);
    assert_eq!(brief.at_risk[0].members[0].name, "Risk");
}

#[test]
fn import_roster_persists_merged_roster() {
    let (service, repository) = seeded_service(Vec::new(), Vec::new());
    let bundle = ImportBundle {
        employees: "NIP,Nama Lengkap,Skor Kinerja,Skor Potensi\n198501152010011001,Ahmad,92,95\n"
            .to_string(),
        ..ImportBundle::default()
    };

    let outcome = service.import_roster(&bundle, today()).expect("imported");

    assert_eq!(outcome.added, 1);
    let stored = repository.load_employees().expect("load");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].succession_status, SuccessionStatus::ReadyNow);
}

#[test]
fn export_recap_writes_every_employee() {
    let (service, _) = seeded_service(
        vec![employee("1", "Ahmad", 92, 95), employee("2", "Budi", 60, 60)],
        Vec::new(),
    );

    let mut buffer = Vec::new();
    assert_eq!(service.export_recap(&mut buffer, today()).expect("exported"), 2);
    assert_eq!(String::from_utf8(buffer).expect("utf8").lines().count(), 3);
}

#[test]
fn repository_failures_surface_as_repository_errors() {
    let service = TalentService::new(Arc::new(UnavailableRepository));
    assert!(matches!(
        service.dashboard(today()),
        Err(TalentServiceError::Repository(RepositoryError::Unavailable(_)))
    ));
    assert!(matches!(
        service.save_job(job("", "Kepala Seksi")),
        Err(TalentServiceError::Repository(RepositoryError::Unavailable(_)))
    ));
}
