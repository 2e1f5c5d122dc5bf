// ==========================================
// Modul Internasionalisasi (i18n)
// ==========================================
// Menggunakan pustaka rust-i18n
// Mendukung bahasa Indonesia (bawaan) dan Inggris
// ==========================================
// Catatan: makro rust_i18n::i18n! sudah diinisialisasi di lib.rs
// ==========================================

/// Ambil bahasa aktif
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// Atur bahasa aktif
///
/// # Parameter
/// - locale: kode bahasa ("id" atau "en")
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// Terjemahkan pesan (tanpa argumen)
///
/// # Contoh
/// ```no_run
/// use puskesmas_profiler::i18n::t;
/// let msg = t("common.success");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// Terjemahkan pesan (dengan argumen)
///
/// # Contoh
/// ```no_run
/// use puskesmas_profiler::i18n::t_with_args;
/// let msg = t_with_args("import.success", &[("date", "2024-06-01")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Locale rust-i18n adalah keadaan global dan uji Rust berjalan paralel;
    // uji i18n diserialisasi agar tidak saling mengganggu.
    static LOCALE_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("id");
        assert_eq!(current_locale(), "id");
    }

    #[test]
    fn test_translate_simple() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("id");
        let msg = t("common.success");
        assert_eq!(msg, "Operasi berhasil");

        set_locale("en");
        let msg = t("common.success");
        assert_eq!(msg, "Operation successful");

        set_locale("id");
    }

    #[test]
    fn test_translate_with_args() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("id");
        let msg = t_with_args("import.success", &[("date", "2024-06-01")]);
        assert!(msg.contains("2024-06-01"));
        assert!(msg.contains("memulihkan"));

        set_locale("en");
        let msg = t_with_args("import.success", &[("date", "2024-06-01")]);
        assert!(msg.contains("2024-06-01"));
        assert!(msg.contains("restored"));

        set_locale("id");
    }
}
