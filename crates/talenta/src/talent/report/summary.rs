use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::super::candidates::top_talents;
use super::super::classification::{category_for, classify};
use super::super::domain::{CriticalJob, Employee, SuccessionStatus};
use super::super::succession::evaluate;
use super::views::{
    BoxCountEntry, BoxRoster, CandidateView, DashboardSummary, PoolMember, StatusCountEntry,
    TalentPoolBrief,
};

const TOP_TALENT_LIMIT: usize = 5;
const TOP_TALENT_BOXES: [u8; 3] = [9, 8, 7];
const CORE_BOXES: [u8; 3] = [5, 4, 2];
const AT_RISK_BOXES: [u8; 3] = [1, 3, 6];

/// Headline figures for the dashboard landing view. Statuses are derived as of `today`, not
/// read from the stored records.
pub fn dashboard_summary(
    employees: &[Employee],
    jobs: &[CriticalJob],
    today: NaiveDate,
) -> DashboardSummary {
    let mut per_box: BTreeMap<u8, usize> = BTreeMap::new();
    let mut per_status: BTreeMap<&'static str, usize> = BTreeMap::new();

    for employee in employees {
        let placement = classify(employee.performance, employee.potential);
        *per_box.entry(placement.box_number).or_default() += 1;
        *per_status
            .entry(evaluate(employee, today).label())
            .or_default() += 1;
    }

    let box_counts = (1..=9u8)
        .rev()
        .map(|box_number| BoxCountEntry {
            box_number,
            category: category_for(box_number),
            count: per_box.get(&box_number).copied().unwrap_or(0),
        })
        .collect();

    let status_counts: Vec<StatusCountEntry> = SuccessionStatus::ordered()
        .into_iter()
        .map(|status| StatusCountEntry {
            status,
            status_label: status.label(),
            count: per_status.get(status.label()).copied().unwrap_or(0),
        })
        .collect();

    let ready_now = status_counts
        .iter()
        .find(|entry| entry.status == SuccessionStatus::ReadyNow)
        .map(|entry| entry.count)
        .unwrap_or(0);

    DashboardSummary {
        total_employees: employees.len(),
        total_critical_jobs: jobs.len(),
        total_vacancies: jobs.iter().map(|job| u64::from(job.vacancies)).sum(),
        ready_now,
        box_counts,
        status_counts,
        top_talents: top_talents(employees, TOP_TALENT_LIMIT)
            .into_iter()
            .map(|employee| CandidateView::build(employee, today))
            .collect(),
    }
}

pub fn talent_pool_brief(employees: &[Employee]) -> TalentPoolBrief {
    let mut rosters: BTreeMap<u8, BoxRoster> = (1..=9u8)
        .map(|box_number| {
            (
                box_number,
                BoxRoster {
                    box_number,
                    category: category_for(box_number),
                    count: 0,
                    members: Vec::new(),
                },
            )
        })
        .collect();

    for employee in employees {
        let box_number = classify(employee.performance, employee.potential).box_number;
        if let Some(roster) = rosters.get_mut(&box_number) {
            roster.count += 1;
            roster.members.push(PoolMember {
                name: employee.name.clone(),
                position: employee.position.clone(),
            });
        }
    }

    let group = |boxes: [u8; 3]| -> Vec<BoxRoster> {
        boxes
            .iter()
            .filter_map(|box_number| rosters.get(box_number).cloned())
            .collect()
    };

    TalentPoolBrief {
        total_employees: employees.len(),
        top_talent: group(TOP_TALENT_BOXES),
        core: group(CORE_BOXES),
        at_risk: group(AT_RISK_BOXES),
        boxes: rosters.values().rev().cloned().collect(),
    }
}
