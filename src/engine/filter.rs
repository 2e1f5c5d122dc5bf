// ==========================================
// Profil Digital Puskesmas - Resolusi Filter Dasbor
// ==========================================
// Input: koleksi capaian penuh + pilihan tahun/bulan/klaster/indikator
// Output: subset catatan yang memenuhi seluruh batasan non-"semua"
// Hasil kosong adalah keadaan valid ("tidak ada data"), bukan error
// ==========================================

use crate::domain::AchievementRecord;

// ==========================================
// Selection - nilai filter "semua" atau satu nilai persis
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    One(String),
}

impl Selection {
    pub fn one(value: impl Into<String>) -> Self {
        Selection::One(value.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// Cocok bila filter "semua", atau nilainya sama persis
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::One(v) => v == value,
        }
    }

    /// Nilai terpilih (None bila "semua")
    pub fn value(&self) -> Option<&str> {
        match self {
            Selection::All => None,
            Selection::One(v) => Some(v),
        }
    }
}

// ==========================================
// FilterSelection - keadaan filter dasbor
// ==========================================
// Aturan drill-down: aktif saat tepat satu klaster dipilih
// dan filter indikator masih "semua"
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub year: String,
    pub month: Selection,
    pub cluster: Selection,
    pub indicator: Selection,
}

impl FilterSelection {
    /// Filter awal: tahun terbaru pada data (tahun berjalan bila data
    /// kosong), seluruh pilihan lain "semua"
    pub fn new(records: &[AchievementRecord]) -> Self {
        let year = available_years(records)
            .into_iter()
            .next()
            .unwrap_or_else(|| chrono::Utc::now().format("%Y").to_string());
        Self {
            year,
            month: Selection::All,
            cluster: Selection::All,
            indicator: Selection::All,
        }
    }

    // ==========================================
    // Mutator gaya reducer
    // ==========================================
    // Mengganti klaster/tahun/bulan membatalkan pilihan indikator:
    // indikator basi dari pilihan lain tidak boleh bertahan diam-diam

    pub fn set_year(&mut self, year: impl Into<String>) {
        self.year = year.into();
        self.indicator = Selection::All;
    }

    pub fn set_month(&mut self, month: Selection) {
        self.month = month;
        self.indicator = Selection::All;
    }

    pub fn set_cluster(&mut self, cluster: Selection) {
        self.cluster = cluster;
        self.indicator = Selection::All;
    }

    pub fn set_indicator(&mut self, indicator: Selection) {
        self.indicator = indicator;
    }

    /// Mode drill-down: kelompokkan per indikator di dalam satu klaster
    pub fn is_drill_down(&self) -> bool {
        !self.cluster.is_all() && self.indicator.is_all()
    }

    /// Terapkan seluruh batasan non-"semua" (kesetaraan string persis)
    pub fn apply<'a>(&self, records: &'a [AchievementRecord]) -> Vec<&'a AchievementRecord> {
        records
            .iter()
            .filter(|r| r.year == self.year)
            .filter(|r| self.month.matches(&r.month))
            .filter(|r| self.cluster.matches(&r.cluster_id))
            .filter(|r| self.indicator.matches(&r.indicator))
            .collect()
    }

    /// Indikator yang tersedia untuk pilihan saat ini (unik, terurut).
    /// Batasan indikator sendiri sengaja tidak ikut diterapkan.
    pub fn available_indicators(&self, records: &[AchievementRecord]) -> Vec<String> {
        let mut out: Vec<String> = records
            .iter()
            .filter(|r| r.year == self.year)
            .filter(|r| self.month.matches(&r.month))
            .filter(|r| self.cluster.matches(&r.cluster_id))
            .map(|r| r.indicator.clone())
            .collect();
        out.sort();
        out.dedup();
        out
    }
}

/// Tahun yang muncul pada data, unik, terurut menurun (terbaru dahulu)
pub fn available_years(records: &[AchievementRecord]) -> Vec<String> {
    let mut years: Vec<String> = records.iter().map(|r| r.year.clone()).collect();
    years.sort_by(|a, b| b.cmp(a));
    years.dedup();
    years
}
