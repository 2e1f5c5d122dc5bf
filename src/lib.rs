// ==========================================
// Profil Digital Puskesmas - Pustaka Inti
// ==========================================
// Sistem manajemen konten & capaian Integrasi Layanan Primer (ILP)
// Posisi sistem: dasbor pelaporan satu sesi admin dalam memori
// ==========================================

// Inisialisasi sistem internasionalisasi
rust_i18n::i18n!("locales", fallback = "id");

// ==========================================
// Deklarasi modul
// ==========================================

// Lapisan domain - entitas & tipe
pub mod domain;

// Lapisan engine - filter, agregasi, penyajian
pub mod engine;

// Lapisan aplikasi - keadaan, sesi, data bawaan
pub mod app;

// Autentikasi - pencocokan kredensial & hash password
pub mod auth;

// Ekspor/impor - cadangan JSON & dump SQL
pub mod backup;

// Analisis naratif - kolaborator layanan teks generatif
pub mod insight;

// Tipe error aplikasi
pub mod error;

// Sistem log
pub mod logging;

// Internasionalisasi
pub mod i18n;

// ==========================================
// Re-ekspor tipe inti
// ==========================================

// Entitas domain
pub use domain::{
    AchievementRecord, AppConfig, Cluster, DiseaseRecord, Employee, GeoInfo, PublicReport,
    ServiceDetailContent, ServiceItem, Trend, User, UserRole, VisitRecord,
};

// Engine
pub use engine::{
    achievement_percent, AchievementStatus, ChartData, DashboardView, FilterSelection,
    GroupSummary, Selection, SnapshotBar, TrendSeries,
};

// Aplikasi
pub use app::{AppState, Session};

// Ekspor/impor
pub use backup::FullBackup;

// Error
pub use error::{AppError, AppResult};

// ==========================================
// Konstanta sistem
// ==========================================

// Versi sistem
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Nama sistem
pub const APP_NAME: &str = "Profil Digital Puskesmas";

// Tag versi format berkas cadangan JSON
pub const EXPORT_VERSION: &str = "1.0";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_export_version_tag() {
        assert_eq!(EXPORT_VERSION, "1.0");
    }
}
