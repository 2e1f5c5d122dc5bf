// ==========================================
// Profil Digital Puskesmas - Lapisan Aplikasi
// ==========================================
// Keadaan aplikasi, sesi login, dan data bawaan
// ==========================================

pub mod defaults;
pub mod session;
pub mod state;

pub use session::Session;
pub use state::{default_backup_dir, AppState};
