// ==========================================
// Profil Digital Puskesmas - Konfigurasi Aplikasi
// ==========================================
// Identitas situs, konten hero, kontak, dan tema tampilan;
// seluruhnya dapat disunting admin dan ikut dalam cadangan
// ==========================================

use serde::{Deserialize, Serialize};

/// Konfigurasi aplikasi (konten & tampilan utama)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub app_name: String, // Nama instansi, mis. "UPTD Puskesmas Sehat Mandiri"
    pub tagline: String,  // Slogan singkat
    pub hero: HeroContent,
    pub contact: ContactInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeConfig>,
}

/// Konten banner utama
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub image_url: String,
}

/// Informasi kontak instansi
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub address: String,
    pub phone: String,
    pub email: String,
    pub hours: String, // Jam layanan, teks bebas
}

/// Tema tampilan (kelas latar belakang)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    pub background: String,
}
