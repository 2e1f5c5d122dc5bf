// ==========================================
// Profil Digital Puskesmas - Ekspor & Impor
// ==========================================
// JSON: satu-satunya format yang bisa diimpor kembali
// SQL : proyeksi relasional satu arah untuk migrasi keluar
// ==========================================

pub mod json;
pub mod sql;

pub use json::{default_backup_file_name, export_json, import_json, FullBackup};
pub use sql::{default_sql_file_name, export_sql};
