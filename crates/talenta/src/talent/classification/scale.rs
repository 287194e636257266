use serde::{Deserialize, Serialize};

const HIGH_THRESHOLD: u8 = 90;
const MEDIUM_THRESHOLD: u8 = 70;

/// Three-step ordinal scale shared by the performance and potential axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Tier {
    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn performance_label(self) -> &'static str {
        match self {
            Self::Low => "Di Bawah Ekspektasi",
            Self::Medium => "Sesuai Ekspektasi",
            Self::High => "Di Atas Ekspektasi",
        }
    }

    pub const fn potential_label(self) -> &'static str {
        match self {
            Self::Low => "Rendah",
            Self::Medium => "Menengah",
            Self::High => "Tinggi",
        }
    }
}

/// Maps a raw score onto the three-tier scale. Scores are not clamped; range checks belong
/// to the record guard.
pub const fn scale(score: u8) -> Tier {
    if score >= HIGH_THRESHOLD {
        Tier::High
    } else if score >= MEDIUM_THRESHOLD {
        Tier::Medium
    } else {
        Tier::Low
    }
}
