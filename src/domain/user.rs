// ==========================================
// Profil Digital Puskesmas - Model Pengguna
// ==========================================
// Kredensial dicek atas daftar datar dalam memori;
// satu flag peran, tanpa protokol sesi/token
// ==========================================

use serde::{Deserialize, Serialize};

/// Peran pengguna
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Editor,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Editor => "editor",
        }
    }
}

/// Akun pengguna sistem
///
/// `password` menyimpan hash bergaram skema `sha256$...`
/// (lihat auth::password); nilai tanpa prefix skema adalah
/// password polos warisan dari cadangan aplikasi lama
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub password: String,
    pub name: String, // Nama tampilan
    pub role: UserRole,
}
