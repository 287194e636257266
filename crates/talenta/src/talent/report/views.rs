use chrono::NaiveDate;
use serde::Serialize;

use super::super::classification::{classify, Tier};
use super::super::domain::{Employee, EmployeeId, SuccessionStatus};
use super::super::retirement::RetirementOutlook;
use super::super::roster::is_education_below_standard;
use super::super::succession::{evaluate, evaluate_with_outlook};

/// 9-box placement with the labels a badge or report needs.
#[derive(Debug, Clone, Serialize)]
pub struct PlacementView {
    pub box_number: u8,
    pub category: &'static str,
    pub recommendation: &'static str,
    pub performance_tier: Tier,
    pub performance_label: &'static str,
    pub potential_tier: Tier,
    pub potential_label: &'static str,
}

impl PlacementView {
    pub fn for_scores(performance: u8, potential: u8) -> Self {
        let placement = classify(performance, potential);
        Self {
            box_number: placement.box_number,
            category: placement.category,
            recommendation: placement.recommendation,
            performance_tier: placement.performance_tier,
            performance_label: placement.performance_tier.performance_label(),
            potential_tier: placement.potential_tier,
            potential_label: placement.potential_tier.potential_label(),
        }
    }
}

/// Roster row: the stored record's identity plus its talent signals, all derived as of one
/// `today` so the status never disagrees with the retirement outlook.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeView {
    pub id: EmployeeId,
    pub employee_number: String,
    pub name: String,
    pub position: String,
    pub work_unit: String,
    pub role_tier: String,
    pub performance: u8,
    pub potential: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competency: Option<u8>,
    pub placement: PlacementView,
    pub succession_status: SuccessionStatus,
    pub succession_label: &'static str,
    pub retirement: RetirementOutlook,
    pub education_below_standard: bool,
}

impl EmployeeView {
    pub fn build(employee: &Employee, today: NaiveDate) -> Self {
        let retirement =
            RetirementOutlook::assess(employee.resolved_birth_date(), &employee.role_tier, today);
        let status = evaluate_with_outlook(employee.performance, employee.potential, &retirement);
        Self {
            id: employee.id.clone(),
            employee_number: employee.employee_number.clone(),
            name: employee.name.clone(),
            position: employee.position.clone(),
            work_unit: employee.work_unit.clone(),
            role_tier: employee.role_tier.clone(),
            performance: employee.performance,
            potential: employee.potential,
            competency: employee.competency,
            placement: PlacementView::for_scores(employee.performance, employee.potential),
            succession_status: status,
            succession_label: status.label(),
            retirement,
            education_below_standard: is_education_below_standard(&employee.education),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateView {
    pub id: EmployeeId,
    pub name: String,
    pub position: String,
    pub work_unit: String,
    pub box_number: u8,
    pub performance: u8,
    pub potential: u8,
    pub succession_status: SuccessionStatus,
    pub succession_label: &'static str,
}

impl CandidateView {
    pub fn build(employee: &Employee, today: NaiveDate) -> Self {
        let status = evaluate(employee, today);
        Self {
            id: employee.id.clone(),
            name: employee.name.clone(),
            position: employee.position.clone(),
            work_unit: employee.work_unit.clone(),
            box_number: classify(employee.performance, employee.potential).box_number,
            performance: employee.performance,
            potential: employee.potential,
            succession_status: status,
            succession_label: status.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoxCountEntry {
    pub box_number: u8,
    pub category: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCountEntry {
    pub status: SuccessionStatus,
    pub status_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub total_employees: usize,
    pub total_critical_jobs: usize,
    pub total_vacancies: u64,
    pub ready_now: usize,
    pub box_counts: Vec<BoxCountEntry>,
    pub status_counts: Vec<StatusCountEntry>,
    pub top_talents: Vec<CandidateView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolMember {
    pub name: String,
    pub position: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoxRoster {
    pub box_number: u8,
    pub category: &'static str,
    pub count: usize,
    pub members: Vec<PoolMember>,
}

/// Structured talent-pool digest handed to the narrative generator.
#[derive(Debug, Clone, Serialize)]
pub struct TalentPoolBrief {
    pub total_employees: usize,
    pub boxes: Vec<BoxRoster>,
    pub top_talent: Vec<BoxRoster>,
    pub core: Vec<BoxRoster>,
    pub at_risk: Vec<BoxRoster>,
}
