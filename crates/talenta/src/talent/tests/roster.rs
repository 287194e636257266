use super::common::*;
use crate::talent::domain::Employee;
use crate::talent::roster::{is_education_below_standard, RosterQuery, RosterSort};

fn tiered(id: &str, name: &str, role_tier: &str, performance: u8) -> Employee {
    let mut employee = employee(id, name, performance, 80);
    employee.role_tier = role_tier.to_string();
    employee
}

fn names(employees: Vec<&Employee>) -> Vec<String> {
    employees.into_iter().map(|employee| employee.name.clone()).collect()
}

#[test]
fn sort_keys_parse_from_header_options() {
    assert_eq!("default".parse::<RosterSort>(), Ok(RosterSort::Unsorted));
    assert_eq!("eselon-desc".parse::<RosterSort>(), Ok(RosterSort::EselonDesc));
    assert_eq!(" Name-Asc ".parse::<RosterSort>(), Ok(RosterSort::NameAsc));
    assert_eq!(
        "competency-desc".parse::<RosterSort>(),
        Ok(RosterSort::CompetencyDesc)
    );
    assert!("salary-desc".parse::<RosterSort>().is_err());
    assert_eq!(RosterSort::default(), RosterSort::EselonDesc);
}

#[test]
fn eselon_desc_lists_most_senior_first_and_unknown_last() {
    let roster = vec![
        tiered("1", "Staf", "Staf", 80),
        tiered("2", "Unknown", "Honorer", 80),
        tiered("3", "Pratama", "JPT Pratama (Eselon II)", 80),
        tiered("4", "Pengawas", "Pengawas (Eselon IV)", 80),
    ];

    let query = RosterQuery::default();
    assert_eq!(
        names(query.apply(&roster)),
        vec!["Pratama", "Pengawas", "Staf", "Unknown"]
    );

    let ascending = RosterQuery {
        sort: RosterSort::EselonAsc,
        ..RosterQuery::default()
    };
    assert_eq!(
        names(ascending.apply(&roster)),
        vec!["Unknown", "Staf", "Pengawas", "Pratama"]
    );
}

#[test]
fn competency_sort_treats_missing_as_zero() {
    let mut scored = tiered("1", "Scored", "Staf", 80);
    scored.competency = Some(70);
    let unscored = tiered("2", "Unscored", "Staf", 80);
    let roster = vec![unscored, scored];

    let query = RosterQuery {
        sort: RosterSort::CompetencyDesc,
        ..RosterQuery::default()
    };
    assert_eq!(names(query.apply(&roster)), vec!["Scored", "Unscored"]);
}

#[test]
fn search_covers_text_fields_and_nip() {
    let mut ahmad = tiered("198501152010011001", "Ahmad Subarjo", "Staf", 80);
    ahmad.email = Some("ahmad.s@example.com".to_string());
    let mut siti = tiered("199003202015022002", "Siti Aminah", "Staf", 80);
    siti.work_unit = "Dinas Kominfo".to_string();
    let roster = vec![ahmad, siti];

    let search = |term: &str| RosterQuery {
        search: Some(term.to_string()),
        sort: RosterSort::Unsorted,
    };

    assert_eq!(names(search("AHMAD.S@").apply(&roster)), vec!["Ahmad Subarjo"]);
    assert_eq!(names(search("kominfo").apply(&roster)), vec!["Siti Aminah"]);
    assert_eq!(names(search("20150220").apply(&roster)), vec!["Siti Aminah"]);
    assert_eq!(search("").apply(&roster).len(), 2);
    assert!(search("tidak ada").apply(&roster).is_empty());
}

#[test]
fn education_standard_flags_diploma_and_secondary_levels() {
    for level in ["SMA", " smk ", "D3", "D-III", "Diploma 1", "Paket C Sederajat"] {
        assert!(is_education_below_standard(level), "{level}");
    }
    for level in ["S1", "D4", "S2", "", "  "] {
        assert!(!is_education_below_standard(level), "{level}");
    }
}

#[test]
fn query_deserializes_sort_from_kebab_case() {
    let query: RosterQuery =
        serde_json::from_str(r#"{"search":"ahmad","sort":"performance-desc"}"#)
            .expect("query parses");
    assert_eq!(query.sort, RosterSort::PerformanceDesc);

    let unsorted: RosterQuery = serde_json::from_str(r#"{"sort":"default"}"#).expect("parses");
    assert_eq!(unsorted.sort, RosterSort::Unsorted);
}
