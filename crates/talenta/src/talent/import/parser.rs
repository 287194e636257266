use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_rows<T, R>(reader: R) -> Result<Vec<T>, csv::Error>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    csv_reader.deserialize::<T>().collect()
}

/// One row of the "Data Pegawai" sheet.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct EmployeeRow {
    #[serde(rename = "NIP", default, deserialize_with = "empty_string_as_none")]
    pub(crate) employee_number: Option<String>,
    #[serde(rename = "Nama Lengkap", default, deserialize_with = "empty_string_as_none")]
    pub(crate) name: Option<String>,
    #[serde(rename = "Jabatan", default, deserialize_with = "empty_string_as_none")]
    pub(crate) position: Option<String>,
    #[serde(
        rename = "Pangkat/Golongan",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) rank_grade: Option<String>,
    #[serde(
        rename = "Unit Kerja (SKPD)",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) work_unit: Option<String>,
    #[serde(rename = "Eselon", default, deserialize_with = "empty_string_as_none")]
    pub(crate) role_tier: Option<String>,
    #[serde(rename = "Email", default, deserialize_with = "empty_string_as_none")]
    pub(crate) email: Option<String>,
    #[serde(rename = "Telepon", default, deserialize_with = "empty_string_as_none")]
    pub(crate) phone: Option<String>,
    #[serde(rename = "Skor Kinerja", default, deserialize_with = "empty_string_as_none")]
    pub(crate) performance: Option<String>,
    #[serde(rename = "Skor Potensi", default, deserialize_with = "empty_string_as_none")]
    pub(crate) potential: Option<String>,
    #[serde(
        rename = "Skor Kompetensi",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) competency: Option<String>,
    #[serde(
        rename = "Kompetensi Teknis (pisahkan koma)",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) skills: Option<String>,
    #[serde(
        rename = "Jabatan Target Suksesi",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub(crate) target_critical_position: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EducationRow {
    #[serde(rename = "NIP", default)]
    pub(crate) employee_number: String,
    #[serde(rename = "Jenjang", default)]
    pub(crate) level: String,
    #[serde(rename = "Jurusan", default)]
    pub(crate) major: String,
    #[serde(rename = "Institusi", default)]
    pub(crate) institution: String,
    #[serde(rename = "Tahun Lulus", default)]
    pub(crate) graduation_year: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CareerRow {
    #[serde(rename = "NIP", default)]
    pub(crate) employee_number: String,
    #[serde(rename = "Jabatan", default)]
    pub(crate) position: String,
    #[serde(rename = "Unit Kerja", default)]
    pub(crate) work_unit: String,
    #[serde(rename = "TMT", default)]
    pub(crate) effective_date: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PerformanceRow {
    #[serde(rename = "NIP", default)]
    pub(crate) employee_number: String,
    #[serde(rename = "Tahun", default)]
    pub(crate) year: String,
    #[serde(rename = "Nilai SKP", default)]
    pub(crate) skp_score: String,
    #[serde(rename = "Predikat", default)]
    pub(crate) rating: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DevelopmentRow {
    #[serde(rename = "NIP", default)]
    pub(crate) employee_number: String,
    #[serde(rename = "Nama Pelatihan", default)]
    pub(crate) training_name: String,
    #[serde(rename = "Penyelenggara", default)]
    pub(crate) organizer: String,
    #[serde(rename = "Tahun", default)]
    pub(crate) year: String,
    #[serde(rename = "Jenis", default)]
    pub(crate) mode: String,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
