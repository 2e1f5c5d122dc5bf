// ==========================================
// Profil Digital Puskesmas - Agregasi Capaian
// ==========================================
// Skor universal: realisasi / target, dipotong pada 100%
// Pembagian dengan target 0 didefinisikan bernilai 0, bukan error
// Kelompok tanpa catatan harus tampil "Tidak Ada Data",
// berbeda dari 0% sungguhan
// ==========================================

use crate::domain::AchievementRecord;
use serde::Serialize;

/// Persentase capaian satu catatan
///
/// # Aturan
/// - target <= 0 -> 0
/// - selain itu  -> min(100, realisasi / target * 100)
///
/// Hasil selalu berada pada rentang [0, 100]
pub fn achievement_percent(target: f64, realization: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    let percent = realization / target * 100.0;
    percent.clamp(0.0, 100.0)
}

/// Rata-rata persentase capaian sekelompok catatan (0 bila kosong)
pub fn average_percent(records: &[&AchievementRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let total: f64 = records
        .iter()
        .map(|r| achievement_percent(r.target, r.realization))
        .sum();
    total / records.len() as f64
}

// ==========================================
// AchievementStatus - pita status capaian
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AchievementStatus {
    Optimal,          // rata-rata >= 80
    PerluPeningkatan, // 50..=79
    Kritis,           // < 50
    TidakAdaData,     // kelompok tanpa catatan, apa pun skornya
}

impl AchievementStatus {
    /// Pita status dari skor rata-rata (dibulatkan) dan jumlah catatan.
    /// count = 0 selalu "Tidak Ada Data", tidak pernah Optimal/Kritis.
    pub fn from_summary(avg_score: f64, count: usize) -> Self {
        if count == 0 {
            return AchievementStatus::TidakAdaData;
        }
        let score = avg_score.round();
        if score < 50.0 {
            AchievementStatus::Kritis
        } else if score < 80.0 {
            AchievementStatus::PerluPeningkatan
        } else {
            AchievementStatus::Optimal
        }
    }

    /// Label tampilan
    pub fn label(&self) -> &'static str {
        match self {
            AchievementStatus::Optimal => "Optimal",
            AchievementStatus::PerluPeningkatan => "Perlu Peningkatan",
            AchievementStatus::Kritis => "Kritis",
            AchievementStatus::TidakAdaData => "Tidak Ada Data",
        }
    }
}

// ==========================================
// GroupSummary - ringkasan satu kelompok
// ==========================================
// Kelompok = satu klaster, atau satu indikator di dalam
// klaster saat drill-down aktif
#[derive(Debug, Clone, Serialize)]
pub struct GroupSummary {
    pub id: String,
    pub name: String,      // Nama lengkap (dipakai tooltip)
    pub icon_name: String, // Ikon baris tabel
    pub count: usize,      // Jumlah catatan terjaring
    pub avg_score: f64,    // Rata-rata persentase capaian
    pub gap: f64,          // Kesenjangan: 100 - avg_score
    pub color: String,     // Warna stabil kelompok
    pub problems: Vec<String>, // Permasalahan unik non-kosong
    pub action_plans: Vec<String>, // Tindak lanjut unik non-kosong
}

impl GroupSummary {
    pub fn status(&self) -> AchievementStatus {
        AchievementStatus::from_summary(self.avg_score, self.count)
    }
}

/// Kumpulkan teks unik non-kosong dari satu field catatan;
/// urutan kemunculan pertama dipertahankan
pub fn collect_unique_notes<'a, F>(records: &[&'a AchievementRecord], field: F) -> Vec<String>
where
    F: Fn(&'a AchievementRecord) -> Option<&'a str>,
{
    let mut seen: Vec<String> = Vec::new();
    for record in records.iter().copied() {
        if let Some(text) = field(record) {
            let trimmed = text.trim();
            if !trimmed.is_empty() && !seen.iter().any(|s| s == trimmed) {
                seen.push(trimmed.to_string());
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(target: f64, realization: f64) -> AchievementRecord {
        AchievementRecord {
            id: "1".to_string(),
            cluster_id: "2".to_string(),
            service_name: None,
            activity_name: None,
            indicator: "IDL".to_string(),
            target,
            realization,
            unit: "%".to_string(),
            year: "2024".to_string(),
            month: "Januari".to_string(),
            problems: None,
            action_plan: None,
        }
    }

    #[test]
    fn test_persentase_target_nol() {
        assert_eq!(achievement_percent(0.0, 50.0), 0.0);
    }

    #[test]
    fn test_persentase_dipotong_pada_100() {
        assert_eq!(achievement_percent(100.0, 150.0), 100.0);
    }

    #[test]
    fn test_persentase_selalu_dalam_rentang() {
        for (t, r) in [(0.0, 0.0), (100.0, 92.0), (95.0, 92.0), (10.0, 1000.0), (100.0, -5.0)] {
            let p = achievement_percent(t, r);
            assert!((0.0..=100.0).contains(&p), "persen {} di luar rentang", p);
        }
    }

    #[test]
    fn test_rata_rata_kelompok() {
        let a = record(100.0, 92.0);
        let b = record(100.0, 40.0);
        let refs: Vec<&AchievementRecord> = vec![&a, &b];
        assert_eq!(average_percent(&refs), 66.0);
    }

    #[test]
    fn test_rata_rata_kelompok_kosong_nol() {
        let refs: Vec<&AchievementRecord> = vec![];
        assert_eq!(average_percent(&refs), 0.0);
    }

    #[test]
    fn test_pita_status() {
        // Contoh dari data nyata: 92 -> Optimal, 40 -> Kritis
        assert_eq!(AchievementStatus::from_summary(92.0, 1), AchievementStatus::Optimal);
        assert_eq!(AchievementStatus::from_summary(40.0, 1), AchievementStatus::Kritis);
        assert_eq!(
            AchievementStatus::from_summary(65.0, 3),
            AchievementStatus::PerluPeningkatan
        );
        // Batas pita
        assert_eq!(AchievementStatus::from_summary(80.0, 1), AchievementStatus::Optimal);
        assert_eq!(
            AchievementStatus::from_summary(79.0, 1),
            AchievementStatus::PerluPeningkatan
        );
        assert_eq!(
            AchievementStatus::from_summary(50.0, 1),
            AchievementStatus::PerluPeningkatan
        );
        assert_eq!(AchievementStatus::from_summary(49.0, 1), AchievementStatus::Kritis);
    }

    #[test]
    fn test_status_tanpa_data_mengalahkan_skor() {
        // count = 0 tidak boleh tampil Optimal maupun Kritis
        assert_eq!(AchievementStatus::from_summary(0.0, 0), AchievementStatus::TidakAdaData);
        assert_eq!(AchievementStatus::from_summary(100.0, 0), AchievementStatus::TidakAdaData);
        assert_eq!(AchievementStatus::TidakAdaData.label(), "Tidak Ada Data");
    }

    #[test]
    fn test_catatan_unik_non_kosong() {
        let mut a = record(100.0, 90.0);
        a.problems = Some("Kurangnya partisipasi warga".to_string());
        let mut b = record(100.0, 85.0);
        b.problems = Some("Kurangnya partisipasi warga".to_string());
        let mut c = record(100.0, 80.0);
        c.problems = Some("   ".to_string());
        let d = record(100.0, 75.0);

        let refs: Vec<&AchievementRecord> = vec![&a, &b, &c, &d];
        let notes = collect_unique_notes(&refs, |r| r.problems.as_deref());
        assert_eq!(notes, vec!["Kurangnya partisipasi warga".to_string()]);
    }
}
