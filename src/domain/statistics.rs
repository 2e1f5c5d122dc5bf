// ==========================================
// Profil Digital Puskesmas - Statistik Kunjungan & Penyakit
// ==========================================
// Agregat yang dikonsumsi kolaborator analisis AI (lihat insight/)
// ==========================================

use serde::{Deserialize, Serialize};

/// Agregat kunjungan pasien per bulan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitRecord {
    pub month: String, // Singkatan bulan, mis. "Jan"
    pub visits: u32,   // Total kunjungan
    pub bpjs: u32,     // Kunjungan peserta BPJS
    pub umum: u32,     // Kunjungan pasien umum
}

/// Arah tren kasus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// Agregat kasus per penyakit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiseaseRecord {
    pub name: String, // Nama penyakit, mis. "ISPA"
    pub cases: u32,   // Jumlah kasus
    pub trend: Trend, // Arah tren dibanding periode lalu
}
