/// Known role-tier labels from the most senior executive tier down to entry-level staff.
pub const ESELON_ORDER: [&str; 12] = [
    "JPT Utama (Eselon I.a)",
    "JPT Madya (Eselon I.b)",
    "JPT Pratama (Eselon II)",
    "Administrator (Eselon III)",
    "Pengawas (Eselon IV)",
    "Fungsional Ahli Utama",
    "Fungsional Ahli Madya",
    "Fungsional Ahli Muda",
    "Fungsional Ahli Pertama",
    "Fungsional Terampil",
    "Pelaksana",
    "Staf",
];

pub const DEFAULT_ROLE_TIER: &str = "Staf";

/// Position of `role_tier` in [`ESELON_ORDER`]; lower is more senior. Unknown labels rank
/// after every known one.
pub fn rank(role_tier: &str) -> usize {
    ESELON_ORDER
        .iter()
        .position(|label| *label == role_tier)
        .unwrap_or(ESELON_ORDER.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_rank_by_position() {
        assert_eq!(rank("JPT Utama (Eselon I.a)"), 0);
        assert_eq!(rank("Administrator (Eselon III)"), 3);
        assert_eq!(rank("Staf"), 11);
    }

    #[test]
    fn unknown_labels_sort_last() {
        assert_eq!(rank("Kepala Desa"), ESELON_ORDER.len());
        assert_eq!(rank("staf"), ESELON_ORDER.len());
        assert_eq!(rank(" Staf"), ESELON_ORDER.len());
        assert!(rank("Staf") < rank("Unknown"));
    }
}
