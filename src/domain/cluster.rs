// ==========================================
// Profil Digital Puskesmas - Model Klaster & Capaian
// ==========================================
// Klaster ILP: pengelompokan layanan berdasarkan siklus hidup
// Capaian: indikator kinerja per periode (bulan/tahun) dengan
// target dan realisasi
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Cluster - Klaster layanan
// ==========================================
// Catatan: `services` berisi nama layanan sebagai string
// (tautan berbasis kecocokan nama, tanpa kunci asing);
// mengganti nama layanan TIDAK menjalar ke catatan capaian
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    pub id: String,            // Identitas klaster
    pub name: String,          // Nama lengkap, mis. "Klaster 2: Ibu & Anak"
    pub description: String,   // Deskripsi singkat
    pub services: Vec<String>, // Nama layanan anggota (berurut)
    pub icon_name: String,     // Nama ikon untuk tampilan
}

impl Cluster {
    /// Nama pendek untuk label sumbu/legenda: dipotong pada ':' pertama.
    /// Nama lengkap tetap dipakai pada tooltip.
    pub fn short_name(&self) -> &str {
        self.name.split(':').next().unwrap_or(&self.name)
    }
}

// ==========================================
// AchievementRecord - Catatan capaian indikator
// ==========================================
// Invarian: target dan realisasi non-negatif; satuan adalah
// label bebas (tidak divalidasi terhadap daftar tertutup).
// Persentase capaian TIDAK disimpan, selalu diturunkan
// (lihat engine::aggregate::achievement_percent)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementRecord {
    pub id: String,
    pub cluster_id: String, // Klaster induk
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>, // Tautan nama layanan (string, tanpa FK)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_name: Option<String>, // Tautan nama kegiatan (string, tanpa FK)
    pub indicator: String,  // Nama indikator kinerja
    pub target: f64,        // Target periode
    pub realization: f64,   // Realisasi periode
    pub unit: String,       // Satuan bebas ('%', 'Orang', 'KK', ...)
    pub year: String,       // Tahun, mis. "2024"
    pub month: String,      // Nama bulan Indonesia, mis. "Januari"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problems: Option<String>, // Permasalahan (teks bebas)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_plan: Option<String>, // Rencana tindak lanjut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nama_pendek_dipotong_pada_titik_dua() {
        let cluster = Cluster {
            id: "2".to_string(),
            name: "Klaster 2: Ibu & Anak".to_string(),
            description: String::new(),
            services: vec![],
            icon_name: "Baby".to_string(),
        };
        assert_eq!(cluster.short_name(), "Klaster 2");
        // Nama lengkap tetap tersedia untuk tooltip
        assert_eq!(cluster.name, "Klaster 2: Ibu & Anak");
    }

    #[test]
    fn test_nama_pendek_tanpa_titik_dua() {
        let cluster = Cluster {
            id: "5".to_string(),
            name: "Lintas Klaster".to_string(),
            description: String::new(),
            services: vec![],
            icon_name: "LayoutGrid".to_string(),
        };
        assert_eq!(cluster.short_name(), "Lintas Klaster");
    }

    #[test]
    fn test_serde_camel_case() {
        let record = AchievementRecord {
            id: "1".to_string(),
            cluster_id: "2".to_string(),
            service_name: Some("Imunisasi".to_string()),
            activity_name: None,
            indicator: "IDL".to_string(),
            target: 95.0,
            realization: 92.0,
            unit: "%".to_string(),
            year: "2024".to_string(),
            month: "Januari".to_string(),
            problems: None,
            action_plan: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"clusterId\":\"2\""));
        assert!(json.contains("\"serviceName\":\"Imunisasi\""));
        // Field opsional kosong tidak ikut diserialisasi
        assert!(!json.contains("activityName"));
    }
}
