mod summary;
pub mod views;

pub use summary::{dashboard_summary, talent_pool_brief};
pub use views::{
    CandidateView, DashboardSummary, EmployeeView, PlacementView, TalentPoolBrief,
};
