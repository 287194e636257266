use std::io::Write;

use chrono::NaiveDate;

use super::classification::classify;
use super::domain::Employee;
use super::import::EMPLOYEE_COLUMNS;
use super::succession::evaluate;

pub const RECAP_COLUMNS: [&str; 11] = [
    "No",
    "Nama",
    "NIP",
    "Jabatan",
    "Unit Kerja",
    "Kinerja",
    "Potensi",
    "Kompetensi",
    "Kotak",
    "Kategori Kotak",
    "Status Suksesi",
];

const MISSING_COMPETENCY: &str = "N/A";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush export: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes the talent recap, one row per employee in roster order, with statuses as of `today`.
pub fn write_recap<W: Write>(
    writer: W,
    employees: &[Employee],
    today: NaiveDate,
) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(RECAP_COLUMNS)?;

    for (index, employee) in employees.iter().enumerate() {
        let placement = classify(employee.performance, employee.potential);
        let competency = employee
            .competency
            .map(|score| score.to_string())
            .unwrap_or_else(|| MISSING_COMPETENCY.to_string());

        csv_writer.write_record([
            (index + 1).to_string(),
            employee.name.clone(),
            employee.employee_number.clone(),
            employee.position.clone(),
            employee.work_unit.clone(),
            employee.performance.to_string(),
            employee.potential.to_string(),
            competency,
            placement.box_number.to_string(),
            placement.category.to_string(),
            evaluate(employee, today).label().to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Writes an empty "Data Pegawai" sheet carrying only the header row.
pub fn write_template<W: Write>(writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(EMPLOYEE_COLUMNS)?;
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recap_marks_missing_competency_and_labels_current_status() {
        let mut scored = Employee::new("198501152010011001", "Ahmad Subarjo", "Staf", 92, 95);
        scored.competency = Some(88);
        let unscored = Employee::new("199003202015022002", "Siti Aminah", "Staf", 50, 50);
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date");

        let mut buffer = Vec::new();
        write_recap(&mut buffer, &[scored, unscored], today).expect("recap written");
        let body = String::from_utf8(buffer).expect("utf8");
        let lines: Vec<&str> = body.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("No,Nama,NIP"));
        assert!(lines[1].starts_with("1,Ahmad Subarjo,198501152010011001"));
        assert!(lines[1].contains(",88,9,"));
        assert!(lines[1].ends_with("Siap Sekarang"));
        assert!(lines[2].contains(",N/A,1,"));
    }

    #[test]
    fn template_is_header_only() {
        let mut buffer = Vec::new();
        write_template(&mut buffer).expect("template written");
        let body = String::from_utf8(buffer).expect("utf8");
        assert_eq!(body.lines().count(), 1);
        assert!(body.starts_with("NIP,Nama Lengkap,Jabatan"));
    }
}
