mod normalizer;
mod parser;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::domain::{
    CareerRecord, DevelopmentRecord, EducationRecord, Employee, EmployeeId, PerformanceRecord,
};
use super::eselon::DEFAULT_ROLE_TIER;
use normalizer::{latest_by_year, score_or_default, split_skills, training_mode};
use parser::{CareerRow, DevelopmentRow, EducationRow, EmployeeRow, PerformanceRow};

pub const EMPLOYEE_SHEET: &str = "Data Pegawai";

/// Header row of the "Data Pegawai" sheet, also emitted as the import template.
pub const EMPLOYEE_COLUMNS: [&str; 13] = [
    "NIP",
    "Nama Lengkap",
    "Jabatan",
    "Pangkat/Golongan",
    "Unit Kerja (SKPD)",
    "Eselon",
    "Email",
    "Telepon",
    "Skor Kinerja",
    "Skor Potensi",
    "Skor Kompetensi",
    "Kompetensi Teknis (pisahkan koma)",
    "Jabatan Target Suksesi",
];

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read import file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid CSV in sheet \"{sheet}\": {source}")]
    Csv {
        sheet: &'static str,
        #[source]
        source: csv::Error,
    },
}

/// CSV text of the workbook sheets. Only the employee sheet is required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportBundle {
    pub employees: String,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub career: Option<String>,
    #[serde(default)]
    pub performance: Option<String>,
    #[serde(default)]
    pub development: Option<String>,
}

/// File locations for [`ImportBundle::from_paths`].
#[derive(Debug, Clone, Default)]
pub struct ImportPaths {
    pub employees: PathBuf,
    pub education: Option<PathBuf>,
    pub career: Option<PathBuf>,
    pub performance: Option<PathBuf>,
    pub development: Option<PathBuf>,
}

impl ImportBundle {
    pub fn from_paths(paths: &ImportPaths) -> Result<Self, ImportError> {
        Ok(Self {
            employees: read_sheet(&paths.employees)?,
            education: paths.education.as_deref().map(read_sheet).transpose()?,
            career: paths.career.as_deref().map(read_sheet).transpose()?,
            performance: paths.performance.as_deref().map(read_sheet).transpose()?,
            development: paths.development.as_deref().map(read_sheet).transpose()?,
        })
    }
}

fn read_sheet(path: &Path) -> Result<String, ImportError> {
    std::fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Merged roster plus the counters and warnings shown after an import.
#[derive(Debug, Clone, Serialize)]
pub struct ImportOutcome {
    #[serde(skip)]
    pub employees: Vec<Employee>,
    pub added: usize,
    pub updated: usize,
    pub warnings: Vec<String>,
}

pub struct RosterImporter;

impl RosterImporter {
    /// Merges `bundle` into `existing` by NIP. Existing employees keep their id and untouched
    /// attributes but lose their histories, which are rebuilt from the history sheets.
    pub fn merge(
        existing: Vec<Employee>,
        bundle: &ImportBundle,
        today: NaiveDate,
    ) -> Result<ImportOutcome, ImportError> {
        let rows: Vec<EmployeeRow> = parse_sheet(EMPLOYEE_SHEET, &bundle.employees)?;

        let mut roster = existing;
        let mut by_number: HashMap<String, usize> = roster
            .iter()
            .enumerate()
            .map(|(index, employee)| (employee.employee_number.clone(), index))
            .collect();
        let mut added = 0;
        let mut updated = 0;
        let mut warnings = Vec::new();

        for (index, row) in rows.iter().enumerate() {
            let (Some(number), Some(name)) = (
                row.employee_number.as_deref().map(str::trim),
                row.name.as_deref().map(str::trim),
            ) else {
                let message = format!(
                    "Baris {} di sheet \"{EMPLOYEE_SHEET}\" diabaikan karena NIP atau Nama Lengkap kosong.",
                    index + 2
                );
                warn!(row = index + 2, "skipping import row without NIP or name");
                warnings.push(message);
                continue;
            };

            match by_number.get(number) {
                Some(&position) => {
                    let employee = &mut roster[position];
                    apply_row(employee, name, row);
                    employee.education_history.clear();
                    employee.career_history.clear();
                    employee.performance_history.clear();
                    employee.development_history.clear();
                    updated += 1;
                }
                None => {
                    let mut employee = Employee::new(number, name, DEFAULT_ROLE_TIER, 0, 0);
                    employee.id = EmployeeId::unused_for(number, &roster);
                    apply_row(&mut employee, name, row);
                    by_number.insert(number.to_string(), roster.len());
                    roster.push(employee);
                    added += 1;
                }
            }
        }

        attach_histories(&mut roster, &by_number, bundle)?;

        for employee in &mut roster {
            adopt_latest_history(employee);
            employee.refresh_derived(today);
        }

        info!(
            added,
            updated,
            warnings = warnings.len(),
            "roster import merged"
        );

        Ok(ImportOutcome {
            employees: roster,
            added,
            updated,
            warnings,
        })
    }
}

fn parse_sheet<T: serde::de::DeserializeOwned>(
    sheet: &'static str,
    body: &str,
) -> Result<Vec<T>, ImportError> {
    parser::parse_rows(body.as_bytes()).map_err(|source| ImportError::Csv { sheet, source })
}

fn apply_row(employee: &mut Employee, name: &str, row: &EmployeeRow) {
    let text = |cell: &Option<String>| cell.as_deref().map(str::trim).unwrap_or_default().to_string();

    employee.name = name.to_string();
    employee.position = text(&row.position);
    employee.rank_grade = text(&row.rank_grade);
    employee.work_unit = text(&row.work_unit);
    employee.email = row.email.as_deref().map(str::trim).map(str::to_string);
    employee.phone = text(&row.phone);
    if let Some(role_tier) = row.role_tier.as_deref().map(str::trim) {
        employee.role_tier = role_tier.to_string();
    } else if employee.role_tier.trim().is_empty() {
        employee.role_tier = DEFAULT_ROLE_TIER.to_string();
    }
    employee.performance = score_or_default(row.performance.as_deref());
    employee.potential = score_or_default(row.potential.as_deref());
    employee.competency = Some(score_or_default(row.competency.as_deref()));
    employee.skills = split_skills(row.skills.as_deref());
    employee.target_critical_position = text(&row.target_critical_position);
}

fn attach_histories(
    roster: &mut [Employee],
    by_number: &HashMap<String, usize>,
    bundle: &ImportBundle,
) -> Result<(), ImportError> {
    let lookup = |number: &str| by_number.get(number.trim()).copied();

    if let Some(body) = bundle.education.as_deref() {
        for row in parse_sheet::<EducationRow>("Riwayat Pendidikan", body)? {
            if let Some(index) = lookup(&row.employee_number) {
                let employee = &mut roster[index];
                let id = history_id(employee, "edu", employee.education_history.len());
                employee.education_history.push(EducationRecord {
                    id,
                    level: row.level,
                    major: row.major,
                    institution: row.institution,
                    graduation_year: row.graduation_year,
                });
            }
        }
    }

    if let Some(body) = bundle.career.as_deref() {
        for row in parse_sheet::<CareerRow>("Riwayat Karir", body)? {
            if let Some(index) = lookup(&row.employee_number) {
                let employee = &mut roster[index];
                let id = history_id(employee, "career", employee.career_history.len());
                employee.career_history.push(CareerRecord {
                    id,
                    position: row.position,
                    work_unit: row.work_unit,
                    effective_date: row.effective_date,
                });
            }
        }
    }

    if let Some(body) = bundle.performance.as_deref() {
        for row in parse_sheet::<PerformanceRow>("Riwayat Kinerja", body)? {
            if let Some(index) = lookup(&row.employee_number) {
                let employee = &mut roster[index];
                let id = history_id(employee, "perf", employee.performance_history.len());
                employee.performance_history.push(PerformanceRecord {
                    id,
                    year: row.year,
                    skp_score: row.skp_score,
                    rating: row.rating,
                });
            }
        }
    }

    if let Some(body) = bundle.development.as_deref() {
        for row in parse_sheet::<DevelopmentRow>("Riwayat Pengembangan", body)? {
            if let Some(index) = lookup(&row.employee_number) {
                let employee = &mut roster[index];
                let id = history_id(employee, "dev", employee.development_history.len());
                employee.development_history.push(DevelopmentRecord {
                    id,
                    training_name: row.training_name,
                    organizer: row.organizer,
                    year: row.year,
                    mode: training_mode(&row.mode),
                });
            }
        }
    }

    Ok(())
}

fn history_id(employee: &Employee, kind: &str, existing: usize) -> String {
    format!("{}-{kind}-{}", employee.employee_number, existing + 1)
}

fn adopt_latest_history(employee: &mut Employee) {
    if let Some(index) = latest_by_year(&employee.education_history, |record| {
        record.graduation_year.as_str()
    }) {
        let latest = &employee.education_history[index];
        employee.education = latest.level.clone();
        employee.major = latest.major.clone();
    }

    if let Some(index) = latest_by_year(&employee.development_history, |record| record.year.as_str()) {
        employee.training_attended = employee.development_history[index].training_name.clone();
    }
}
