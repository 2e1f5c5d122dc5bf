// ==========================================
// Profil Digital Puskesmas - Model Laporan Publik
// ==========================================

use serde::{Deserialize, Serialize};

/// Dokumen laporan yang dipublikasikan (LAKIP, Renstra, dsb.)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicReport {
    pub id: String,
    pub title: String,
    pub year: String,     // Tahun terbit
    pub category: String, // Kategori, mis. "Laporan Tahunan"
    pub size: String,     // Ukuran berkas, teks bebas, mis. "4.2 MB"
}
