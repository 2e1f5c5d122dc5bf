// ==========================================
// Profil Digital Puskesmas - Sesi Login
// ==========================================
// Tepat satu sesi logis dalam memori pada satu waktu;
// tanpa token, tanpa daftar sesi, hanya flag "sedang masuk"
// ==========================================

use crate::domain::User;

/// Sesi pengguna dalam memori
#[derive(Debug, Clone, Default)]
pub struct Session {
    current_user: Option<User>,
}

impl Session {
    pub fn login(&mut self, user: User) {
        tracing::info!(username = %user.username, "pengguna masuk");
        self.current_user = Some(user);
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            tracing::info!(username = %user.username, "pengguna keluar");
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }
}
