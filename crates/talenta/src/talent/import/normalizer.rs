use super::super::domain::TrainingMode;

pub(crate) const DEFAULT_IMPORT_SCORE: u8 = 75;

/// Score cell to a 1..=100 score. Blank, non-numeric, zero or oversized cells fall back to 75.
/// Fractional values are truncated.
pub(crate) fn score_or_default(cell: Option<&str>) -> u8 {
    cell.and_then(leading_integer)
        .filter(|value| (1..=100).contains(value))
        .and_then(|value| u8::try_from(value).ok())
        .unwrap_or(DEFAULT_IMPORT_SCORE)
}

/// Integer prefix of a cell, e.g. `"2014"` or `"88.5"`.
pub(crate) fn leading_integer(cell: &str) -> Option<i64> {
    let trimmed = cell.trim();
    let digits_end = trimmed
        .char_indices()
        .find(|(index, ch)| !(ch.is_ascii_digit() || (*index == 0 && *ch == '-')))
        .map(|(index, _)| index)
        .unwrap_or(trimmed.len());

    trimmed.get(..digits_end)?.parse().ok()
}

pub(crate) fn split_skills(cell: Option<&str>) -> Vec<String> {
    cell.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

pub(crate) fn training_mode(cell: &str) -> TrainingMode {
    if cell.trim().eq_ignore_ascii_case("non-klasikal") {
        TrainingMode::NonClassroom
    } else {
        TrainingMode::Classroom
    }
}

/// Index of the entry with the greatest parseable year; earlier entries win ties.
pub(crate) fn latest_by_year<T>(items: &[T], year: impl Fn(&T) -> &str) -> Option<usize> {
    let mut best: Option<(usize, i64)> = None;
    for (index, item) in items.iter().enumerate() {
        let Some(value) = leading_integer(year(item)) else {
            continue;
        };
        match best {
            Some((_, current)) if current >= value => {}
            _ => best = Some((index, value)),
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_defaults_cover_blank_garbage_zero_and_overflow() {
        assert_eq!(score_or_default(Some("92")), 92);
        assert_eq!(score_or_default(Some("88.7")), 88);
        assert_eq!(score_or_default(None), DEFAULT_IMPORT_SCORE);
        assert_eq!(score_or_default(Some("tinggi")), DEFAULT_IMPORT_SCORE);
        assert_eq!(score_or_default(Some("0")), DEFAULT_IMPORT_SCORE);
        assert_eq!(score_or_default(Some("101")), DEFAULT_IMPORT_SCORE);
        assert_eq!(score_or_default(Some("-4")), DEFAULT_IMPORT_SCORE);
    }

    #[test]
    fn skills_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            split_skills(Some(" Analisis Data , ,Penyusunan Laporan")),
            vec!["Analisis Data".to_string(), "Penyusunan Laporan".to_string()]
        );
        assert!(split_skills(None).is_empty());
    }

    #[test]
    fn latest_year_skips_unparseable_and_keeps_first_on_ties() {
        let years = ["2008", "", "2014", "n/a", "2014"];
        assert_eq!(latest_by_year(&years, |year| year), Some(2));
        let none: [&str; 2] = ["", "-"];
        assert_eq!(latest_by_year(&none, |year| year), None);
    }

    #[test]
    fn only_non_klasikal_maps_to_non_classroom() {
        assert_eq!(training_mode("Non-Klasikal"), TrainingMode::NonClassroom);
        assert_eq!(training_mode("Klasikal"), TrainingMode::Classroom);
        assert_eq!(training_mode("e-learning"), TrainingMode::Classroom);
    }
}
