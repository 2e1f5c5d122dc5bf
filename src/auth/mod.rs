// ==========================================
// Profil Digital Puskesmas - Autentikasi
// ==========================================
// Pencocokan kredensial atas daftar pengguna dalam memori;
// tanpa lockout, tanpa token - hanya flag sesi di AppState
// ==========================================

pub mod password;

pub use password::{hash_password, verify_password};

use crate::domain::User;
use crate::error::{AppError, AppResult};

/// Cari pengguna dengan pasangan kredensial yang cocok
///
/// # Hasil
/// - Ok(User): kredensial cocok
/// - Err(AppError::LoginFailed): tidak ada pasangan yang cocok;
///   dilaporkan sebaris ke pengguna, keadaan tidak berubah
pub fn login(users: &[User], username: &str, password: &str) -> AppResult<User> {
    users
        .iter()
        .find(|u| u.username == username && verify_password(password, &u.password))
        .cloned()
        .ok_or(AppError::LoginFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserRole;

    fn user(username: &str, stored_password: String) -> User {
        User {
            id: "1".to_string(),
            username: username.to_string(),
            password: stored_password,
            name: "Administrator".to_string(),
            role: UserRole::Admin,
        }
    }

    #[test]
    fn test_login_berhasil_dengan_hash() {
        let users = vec![user("admin", hash_password("admin123"))];
        let found = login(&users, "admin", "admin123").expect("login harus berhasil");
        assert_eq!(found.username, "admin");
    }

    #[test]
    fn test_login_gagal_password_salah() {
        let users = vec![user("admin", hash_password("admin123"))];
        let result = login(&users, "admin", "salah");
        assert!(matches!(result, Err(AppError::LoginFailed)));
    }

    #[test]
    fn test_login_gagal_username_tidak_ada() {
        let users = vec![user("admin", hash_password("admin123"))];
        let result = login(&users, "operator", "admin123");
        assert!(matches!(result, Err(AppError::LoginFailed)));
    }

    #[test]
    fn test_login_password_polos_warisan() {
        // Cadangan aplikasi lama menyimpan password tanpa prefix skema
        let users = vec![user("admin", "admin123".to_string())];
        assert!(login(&users, "admin", "admin123").is_ok());
    }
}
