// ==========================================
// Profil Digital Puskesmas - Model Layanan
// ==========================================
// ServiceItem: entri katalog layanan (kartu ringkas)
// ServiceDetailContent: konten halaman detail, diindeks nama layanan
// ==========================================

use serde::{Deserialize, Serialize};

/// Entri katalog layanan
///
/// Terhubung ke klaster hanya lewat kecocokan nama
/// (lihat Cluster::services)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    pub title: String,
    pub desc: String,      // Deskripsi singkat satu kalimat
    pub icon_name: String, // Nama ikon untuk tampilan
}

// ==========================================
// ServiceDetailContent - konten halaman detail layanan
// ==========================================
// `activities` adalah label lingkup kegiatan (teks bebas) yang
// dirujuk AchievementRecord::activity_name lewat kecocokan string
// persis; mengganti nama kegiatan membuat catatan lama yatim
// tanpa peringatan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDetailContent {
    pub title: String,
    pub description: String,
    pub activities: Vec<String>,
    pub image_url: String,
}

/// Kunci entri templat bawaan pada peta detail layanan
pub const DEFAULT_DETAIL_KEY: &str = "default";
