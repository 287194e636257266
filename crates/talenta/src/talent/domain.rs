use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::retirement::parse_birth_date;
use super::succession::evaluate;

/// Stable record identifier, distinct from the NIP.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct EmployeeId(pub String);

impl EmployeeId {
    /// Id for a new record: the NIP itself, or the NIP with the first free `-N` suffix when a
    /// stored record already holds it (its NIP was edited after creation).
    pub fn unused_for(employee_number: &str, roster: &[Employee]) -> Self {
        let taken = |candidate: &str| roster.iter().any(|employee| employee.id.0 == candidate);
        if !taken(employee_number) {
            return Self(employee_number.to_string());
        }

        let mut suffix = 2u32;
        loop {
            let candidate = format!("{employee_number}-{suffix}");
            if !taken(&candidate) {
                return Self(candidate);
            }
            suffix += 1;
        }
    }
}

/// Identifier wrapper for critical job records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct JobId(pub String);

/// Readiness category for filling a future vacancy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuccessionStatus {
    ReadyNow,
    OneToTwoYears,
    FuturePotential,
    #[default]
    NotACandidate,
}

impl SuccessionStatus {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::ReadyNow,
            Self::OneToTwoYears,
            Self::FuturePotential,
            Self::NotACandidate,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ReadyNow => "Siap Sekarang",
            Self::OneToTwoYears => "1-2 Tahun",
            Self::FuturePotential => "Potensi Masa Depan",
            Self::NotACandidate => "Bukan Kandidat",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationRecord {
    pub id: String,
    pub level: String,
    pub major: String,
    pub institution: String,
    pub graduation_year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerRecord {
    pub id: String,
    pub position: String,
    pub work_unit: String,
    pub effective_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub id: String,
    pub year: String,
    pub skp_score: String,
    pub rating: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingMode {
    Classroom,
    NonClassroom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevelopmentRecord {
    pub id: String,
    pub training_name: String,
    pub organizer: String,
    pub year: String,
    pub mode: TrainingMode,
}

/// Civil-service employee record as held by the roster.
///
/// `birth_date` and `succession_status` are derived; callers refresh them through
/// [`Employee::refresh_derived`] after touching the NIP, scores or role tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub id: EmployeeId,
    pub employee_number: String,
    pub name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub rank_grade: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub major: String,
    #[serde(default)]
    pub work_unit: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub training_attended: String,
    #[serde(default)]
    pub role_tier: String,
    pub performance: u8,
    pub potential: u8,
    #[serde(default)]
    pub competency: Option<u8>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub target_critical_position: String,
    #[serde(default)]
    pub development_plan: String,
    #[serde(default)]
    pub succession_status: SuccessionStatus,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default)]
    pub education_history: Vec<EducationRecord>,
    #[serde(default)]
    pub performance_history: Vec<PerformanceRecord>,
    #[serde(default)]
    pub career_history: Vec<CareerRecord>,
    #[serde(default)]
    pub development_history: Vec<DevelopmentRecord>,
}

impl Employee {
    /// Minimal record with every optional attribute left empty.
    pub fn new(
        employee_number: impl Into<String>,
        name: impl Into<String>,
        role_tier: impl Into<String>,
        performance: u8,
        potential: u8,
    ) -> Self {
        let employee_number = employee_number.into();
        Self {
            id: EmployeeId(employee_number.clone()),
            employee_number,
            name: name.into(),
            position: String::new(),
            rank_grade: String::new(),
            education: String::new(),
            major: String::new(),
            work_unit: String::new(),
            email: None,
            phone: String::new(),
            training_attended: String::new(),
            role_tier: role_tier.into(),
            performance,
            potential,
            competency: None,
            skills: Vec::new(),
            target_critical_position: String::new(),
            development_plan: String::new(),
            succession_status: SuccessionStatus::NotACandidate,
            birth_date: None,
            education_history: Vec::new(),
            performance_history: Vec::new(),
            career_history: Vec::new(),
            development_history: Vec::new(),
        }
    }

    /// Birth date to use for retirement checks: the cached value, else parsed from the NIP.
    pub fn resolved_birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
            .or_else(|| parse_birth_date(&self.employee_number))
    }

    pub fn refresh_derived(&mut self, today: NaiveDate) {
        self.birth_date = parse_birth_date(&self.employee_number);
        self.succession_status = evaluate(self, today);
    }
}

/// Strategically important vacancy tracked for succession.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalJob {
    pub id: JobId,
    pub title: String,
    #[serde(default)]
    pub work_unit: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_role_tier: String,
    pub vacancies: u32,
}
