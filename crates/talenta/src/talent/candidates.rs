use std::cmp::Reverse;

use super::classification::{classify, is_top_talent_box};
use super::domain::{CriticalJob, Employee};

fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

/// Ranked successors for `job`: employees targeting the job's title (trimmed, case-folded,
/// exact) whose placement is box 7, 8 or 9. Ordered by box then performance, both descending;
/// ties keep their roster order.
pub fn find_candidates<'a>(job: &CriticalJob, employees: &'a [Employee]) -> Vec<&'a Employee> {
    let target = normalize_title(&job.title);

    let mut candidates: Vec<(u8, &Employee)> = employees
        .iter()
        .filter(|employee| normalize_title(&employee.target_critical_position) == target)
        .map(|employee| {
            let placement = classify(employee.performance, employee.potential);
            (placement.box_number, employee)
        })
        .filter(|(box_number, _)| is_top_talent_box(*box_number))
        .collect();

    candidates.sort_by_key(|(box_number, employee)| {
        (Reverse(*box_number), Reverse(employee.performance))
    });

    candidates
        .into_iter()
        .map(|(_, employee)| employee)
        .collect()
}

/// Top-talent employees (boxes 7–9) across the whole roster, ranked like candidates.
pub fn top_talents(employees: &[Employee], limit: usize) -> Vec<&Employee> {
    let mut ranked: Vec<(u8, &Employee)> = employees
        .iter()
        .map(|employee| {
            (
                classify(employee.performance, employee.potential).box_number,
                employee,
            )
        })
        .filter(|(box_number, _)| is_top_talent_box(*box_number))
        .collect();

    ranked.sort_by_key(|(box_number, employee)| {
        (Reverse(*box_number), Reverse(employee.performance))
    });

    ranked
        .into_iter()
        .take(limit)
        .map(|(_, employee)| employee)
        .collect()
}
