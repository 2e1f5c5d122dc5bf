// ==========================================
// Profil Digital Puskesmas - Lapisan Engine
// ==========================================
// Tanggung jawab: komputasi murni atas data dalam memori
// Alur data satu arah: catatan -> filter -> agregasi -> penyajian
// Tidak ada akses berkas/jaringan di lapisan ini
// ==========================================

pub mod aggregate;
pub mod filter;
pub mod presentation;

// Re-ekspor tipe inti
pub use aggregate::{achievement_percent, average_percent, AchievementStatus, GroupSummary};
pub use filter::{available_years, FilterSelection, Selection};
pub use presentation::{
    build_dashboard, color_for, month_abbrev, ChartData, DashboardView, SnapshotBar, TrendSeries,
    MONTH_NAMES, NO_DATA_COLOR, PALETTE,
};
