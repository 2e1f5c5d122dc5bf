// ==========================================
// Profil Digital Puskesmas - Tipe Error Aplikasi
// ==========================================
// Tanggung jawab: taksonomi error seluruh lapisan
// Aturan: tidak ada error yang fatal bagi proses; setiap jalur
// kegagalan berakhir sebagai pesan pengguna dan keadaan semula
// ==========================================

use thiserror::Error;

/// Tipe error aplikasi
#[derive(Error, Debug)]
pub enum AppError {
    // ==========================================
    // Impor & validasi
    // ==========================================
    #[error("Impor gagal: {0}")]
    ImportError(String),

    #[error("Validasi data gagal: {0}")]
    ValidationError(String),

    // ==========================================
    // Autentikasi
    // ==========================================
    #[error("Username atau password salah. Silakan coba lagi.")]
    LoginFailed,

    // ==========================================
    // Layanan eksternal
    // ==========================================
    #[error("Layanan eksternal gagal: {0}")]
    ExternalService(String),

    // ==========================================
    // Umum
    // ==========================================
    #[error("Data tidak ditemukan: {0}")]
    NotFound(String),

    #[error("Gagal membaca/menulis berkas: {0}")]
    Io(#[from] std::io::Error),

    #[error("Format JSON tidak valid: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias tipe Result
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pesan_login_gagal() {
        let err = AppError::LoginFailed;
        assert_eq!(
            err.to_string(),
            "Username atau password salah. Silakan coba lagi."
        );
    }

    #[test]
    fn test_konversi_error_json() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{tidak valid").unwrap_err();
        let err: AppError = parse_err.into();
        assert!(matches!(err, AppError::Json(_)));
        assert!(err.to_string().starts_with("Format JSON tidak valid"));
    }
}
