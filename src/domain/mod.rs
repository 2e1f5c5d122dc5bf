// ==========================================
// Profil Digital Puskesmas - Lapisan Model Domain
// ==========================================
// Tanggung jawab: entitas domain & tipe nilai
// Batasan: tidak memuat logika filter/agregasi (lihat engine/)
// Seluruh entitas serde camelCase agar kompatibel dengan
// format cadangan JSON aplikasi lama
// ==========================================

pub mod cluster;
pub mod config;
pub mod employee;
pub mod geo;
pub mod report;
pub mod service;
pub mod statistics;
pub mod user;

// Re-ekspor tipe inti
pub use cluster::{AchievementRecord, Cluster};
pub use config::{AppConfig, ContactInfo, HeroContent, ThemeConfig};
pub use employee::Employee;
pub use geo::GeoInfo;
pub use report::PublicReport;
pub use service::{ServiceDetailContent, ServiceItem};
pub use statistics::{DiseaseRecord, Trend, VisitRecord};
pub use user::{User, UserRole};
