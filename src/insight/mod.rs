// ==========================================
// Profil Digital Puskesmas - Analisis Naratif AI
// ==========================================
// Kolaborator eksternal: layanan teks generatif mengonsumsi
// agregat kunjungan & penyakit dan mengembalikan laporan naratif.
// Setiap kegagalan berakhir sebagai pesan pengguna, bukan crash
// ==========================================

pub mod narrative;

pub use narrative::{GeminiClient, NarrativeEngine, DEFAULT_MODEL};
