use serde::Serialize;

use super::scale::{scale, Tier};

/// Box numbers indexed by `[potential][performance]`, both axes ordered Low, Medium, High.
const BOX_TABLE: [[u8; 3]; 3] = [
    // potential Low
    [1, 2, 4],
    // potential Medium
    [3, 5, 7],
    // potential High
    [6, 8, 9],
];

pub const UNCLASSIFIED_BOX: u8 = 0;
const UNCLASSIFIED_CATEGORY: &str = "Tidak terklasifikasi";

/// Outcome of placing an employee on the 9-box matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoxPlacement {
    pub box_number: u8,
    pub performance_tier: Tier,
    pub potential_tier: Tier,
    pub category: &'static str,
    pub recommendation: &'static str,
}

impl BoxPlacement {
    pub fn is_top_talent(&self) -> bool {
        is_top_talent_box(self.box_number)
    }
}

pub const fn is_top_talent_box(box_number: u8) -> bool {
    matches!(box_number, 7..=9)
}

pub fn classify(performance: u8, potential: u8) -> BoxPlacement {
    let performance_tier = scale(performance);
    let potential_tier = scale(potential);
    let box_number = box_number_for(potential_tier, performance_tier);

    BoxPlacement {
        box_number,
        performance_tier,
        potential_tier,
        category: category_for(box_number),
        recommendation: recommendation_for(box_number),
    }
}

pub fn box_number_for(potential: Tier, performance: Tier) -> u8 {
    let row = usize::from(potential.value()) - 1;
    let column = usize::from(performance.value()) - 1;
    BOX_TABLE
        .get(row)
        .and_then(|cells| cells.get(column))
        .copied()
        .unwrap_or(UNCLASSIFIED_BOX)
}

pub const fn category_for(box_number: u8) -> &'static str {
    match box_number {
        9 => "Kinerja di atas ekspektasi dan potensial tinggi",
        8 => "Kinerja sesuai ekspektasi dan potensial tinggi",
        7 => "Kinerja di atas ekspektasi dan potensial menengah",
        6 => "Kinerja di bawah ekspektasi dan potensial tinggi",
        5 => "Kinerja sesuai ekspektasi dan potensial menengah",
        4 => "Kinerja di atas ekspektasi dan potensial rendah",
        3 => "Kinerja di bawah ekspektasi dan potensial menengah",
        2 => "Kinerja sesuai ekspektasi dan potensial rendah",
        1 => "Kinerja di bawah ekspektasi dan potensial rendah",
        _ => UNCLASSIFIED_CATEGORY,
    }
}

pub const fn recommendation_for(box_number: u8) -> &'static str {
    match box_number {
        9 => "Dipromosikan dan dipertahankan, Masuk Kelompok Rencana Suksesi Instansi/Nasional, Penghargaan.",
        8 => "Dipertahankan, Masuk Kelompok Rencana Suksesi Instansi, Rotasi/Perluasan jabatan, Bimbingan kinerja.",
        7 => "Dipertahankan, Masuk Kelompok Rencana Suksesi Instansi, Rotasi/Pengayaan jabatan, Pengembangan kompetensi, Tugas belajar.",
        6 => "Penempatan yang sesuai, Bimbingan kinerja, Konseling kinerja.",
        5 => "Penempatan yang sesuai, Bimbingan kinerja, Pengembangan kompetensi.",
        4 => "Rotasi, Pengembangan kompetensi.",
        3 => "Bimbingan kinerja, Konseling kinerja, Pengembangan kompetensi, Penempatan yang sesuai.",
        2 => "Bimbingan kinerja, Pengembangan kompetensi, Penempatan yang sesuai.",
        1 => "Diproses sesuai ketentuan peraturan perundangan.",
        _ => "",
    }
}
