// ==========================================
// Profil Digital Puskesmas - Hash Password
// ==========================================
// Skema simpanan: sha256$<garam>$<digest hex>
// Nilai tanpa prefix skema adalah password polos warisan dari
// cadangan aplikasi lama dan dibandingkan apa adanya
// ==========================================

use sha2::{Digest, Sha256};
use uuid::Uuid;

const SCHEME_PREFIX: &str = "sha256$";

/// Hash password dengan garam acak
pub fn hash_password(password: &str) -> String {
    let salt = Uuid::new_v4().simple().to_string();
    format!("{}{}${}", SCHEME_PREFIX, salt, digest_hex(&salt, password))
}

/// Verifikasi password terhadap nilai tersimpan
pub fn verify_password(password: &str, stored: &str) -> bool {
    match parse_stored(stored) {
        Some((salt, digest)) => digest_hex(salt, password) == digest,
        // Warisan: password polos tanpa skema
        None => stored == password,
    }
}

/// Apakah nilai tersimpan sudah memakai skema hash
pub fn is_hashed(stored: &str) -> bool {
    parse_stored(stored).is_some()
}

fn parse_stored(stored: &str) -> Option<(&str, &str)> {
    let rest = stored.strip_prefix(SCHEME_PREFIX)?;
    rest.split_once('$')
}

fn digest_hex(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_lalu_verifikasi() {
        let stored = hash_password("admin123");
        assert!(stored.starts_with(SCHEME_PREFIX));
        assert!(is_hashed(&stored));
        assert!(verify_password("admin123", &stored));
        assert!(!verify_password("admin124", &stored));
    }

    #[test]
    fn test_garam_acak_menghasilkan_hash_berbeda() {
        let a = hash_password("admin123");
        let b = hash_password("admin123");
        assert_ne!(a, b);
        assert!(verify_password("admin123", &a));
        assert!(verify_password("admin123", &b));
    }

    #[test]
    fn test_password_polos_warisan() {
        assert!(!is_hashed("admin123"));
        assert!(verify_password("admin123", "admin123"));
        assert!(!verify_password("salah", "admin123"));
    }

    #[test]
    fn test_simpanan_rusak_tidak_lolos() {
        // Prefix benar tetapi tanpa pemisah digest: dianggap polos
        assert!(!verify_password("admin123", "sha256$tanpadigest"));
    }
}
