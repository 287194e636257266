use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::domain::Employee;
use super::eselon::rank;

/// Sort orders offered by the roster listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RosterSort {
    #[serde(rename = "default")]
    Unsorted,
    EselonAsc,
    #[default]
    EselonDesc,
    NameAsc,
    NameDesc,
    PerformanceAsc,
    PerformanceDesc,
    PotentialAsc,
    PotentialDesc,
    CompetencyAsc,
    CompetencyDesc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortKey(pub String);

impl fmt::Display for UnknownSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown roster sort key '{}'", self.0)
    }
}

impl std::error::Error for UnknownSortKey {}

impl FromStr for RosterSort {
    type Err = UnknownSortKey;

    /// Accepts `default` or `<key>-<asc|desc>`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let sort = match value.trim().to_ascii_lowercase().as_str() {
            "default" => Self::Unsorted,
            "eselon-asc" => Self::EselonAsc,
            "eselon-desc" => Self::EselonDesc,
            "name-asc" => Self::NameAsc,
            "name-desc" => Self::NameDesc,
            "performance-asc" => Self::PerformanceAsc,
            "performance-desc" => Self::PerformanceDesc,
            "potential-asc" => Self::PotentialAsc,
            "potential-desc" => Self::PotentialDesc,
            "competency-asc" => Self::CompetencyAsc,
            "competency-desc" => Self::CompetencyDesc,
            _ => return Err(UnknownSortKey(value.to_string())),
        };
        Ok(sort)
    }
}

impl RosterSort {
    fn compare(self, a: &Employee, b: &Employee) -> Ordering {
        match self {
            Self::Unsorted => Ordering::Equal,
            // Descending eselon means most senior first, i.e. lowest rank number first.
            Self::EselonAsc => rank(&b.role_tier).cmp(&rank(&a.role_tier)),
            Self::EselonDesc => rank(&a.role_tier).cmp(&rank(&b.role_tier)),
            Self::NameAsc => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            Self::NameDesc => b.name.to_lowercase().cmp(&a.name.to_lowercase()),
            Self::PerformanceAsc => a.performance.cmp(&b.performance),
            Self::PerformanceDesc => b.performance.cmp(&a.performance),
            Self::PotentialAsc => a.potential.cmp(&b.potential),
            Self::PotentialDesc => b.potential.cmp(&a.potential),
            Self::CompetencyAsc => competency(a).cmp(&competency(b)),
            Self::CompetencyDesc => competency(b).cmp(&competency(a)),
        }
    }
}

fn competency(employee: &Employee) -> u8 {
    employee.competency.unwrap_or(0)
}

/// Free-text search plus ordering for roster listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RosterQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub sort: RosterSort,
}

impl RosterQuery {
    pub fn matches(&self, employee: &Employee) -> bool {
        let Some(term) = self.search.as_deref().filter(|term| !term.is_empty()) else {
            return true;
        };
        let needle = term.to_lowercase();

        employee.name.to_lowercase().contains(&needle)
            || employee.position.to_lowercase().contains(&needle)
            || employee.work_unit.to_lowercase().contains(&needle)
            || employee
                .email
                .as_deref()
                .map(|email| email.to_lowercase().contains(&needle))
                .unwrap_or(false)
            || employee.employee_number.contains(&needle)
    }

    pub fn apply<'a>(&self, employees: &'a [Employee]) -> Vec<&'a Employee> {
        let mut selected: Vec<&Employee> = employees
            .iter()
            .filter(|employee| self.matches(employee))
            .collect();
        selected.sort_by(|a, b| self.sort.compare(a, b));
        selected
    }
}

const BELOW_STANDARD_LEVELS: [&str; 12] = [
    "SMA",
    "SMK",
    "MA",
    "D3",
    "D-III",
    "DIPLOMA 3",
    "D2",
    "D-II",
    "DIPLOMA 2",
    "D1",
    "D-I",
    "DIPLOMA 1",
];

/// Whether the highest education level sits below the S1/D4 requirement.
pub fn is_education_below_standard(education: &str) -> bool {
    let level = education.trim().to_uppercase();
    if level.is_empty() {
        return false;
    }
    BELOW_STANDARD_LEVELS.contains(&level.as_str()) || level.contains("SEDERAJAT")
}
