// ==========================================
// Profil Digital Puskesmas - Model Info Geografis
// ==========================================

use serde::{Deserialize, Serialize};

/// Deskripsi wilayah kerja puskesmas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoInfo {
    pub description: String, // Narasi wilayah kerja (luas, batas, populasi)
    pub image_url: String,   // Peta/citra wilayah
}
