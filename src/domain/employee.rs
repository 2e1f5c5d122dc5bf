// ==========================================
// Profil Digital Puskesmas - Model Pegawai
// ==========================================

use serde::{Deserialize, Serialize};

/// Data pegawai untuk halaman profil tim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,      // Nama lengkap beserta gelar
    pub role: String,      // Jabatan, mis. "Kepala Puskesmas"
    pub photo_url: String, // URL foto profil
}
