// ==========================================
// Profil Digital Puskesmas - Keadaan Aplikasi
// ==========================================
// Satu struct keadaan eksplisit untuk seluruh koleksi konten.
// Setiap mutasi adalah penggantian koleksi utuh gaya reducer
// sehingga seluruh titik mutasi mudah diaudit lewat log.
// Tidak ada yang bertahan melewati restart proses kecuali
// lewat ekspor/impor eksplisit (lihat backup/)
// ==========================================

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::app::defaults;
use crate::app::session::Session;
use crate::auth;
use crate::backup::FullBackup;
use crate::domain::{
    AchievementRecord, AppConfig, Cluster, Employee, GeoInfo, PublicReport, ServiceDetailContent,
    ServiceItem, User,
};
use crate::domain::service::DEFAULT_DETAIL_KEY;
use crate::error::AppResult;

// ==========================================
// AppState - keadaan aplikasi
// ==========================================
pub struct AppState {
    pub config: AppConfig,
    pub vision: String,
    pub missions: Vec<String>,
    pub services: Vec<ServiceItem>,
    pub employees: Vec<Employee>,
    pub reports: Vec<PublicReport>,
    pub users: Vec<User>,
    pub geo_info: GeoInfo,
    pub clusters: Vec<Cluster>,
    pub cluster_achievements: Vec<AchievementRecord>,
    pub service_details: BTreeMap<String, ServiceDetailContent>,

    /// Sesi login aktif
    pub session: Session,
}

impl AppState {
    /// Keadaan awal berisi dataset contoh (konten profil,
    /// klaster ILP, dan catatan capaian)
    pub fn seeded() -> Self {
        Self {
            config: defaults::default_config(),
            vision: defaults::default_vision(),
            missions: defaults::default_missions(),
            services: defaults::default_services(),
            employees: defaults::default_employees(),
            reports: defaults::default_reports(),
            users: defaults::default_users(),
            geo_info: defaults::default_geo_info(),
            clusters: defaults::default_clusters(),
            cluster_achievements: defaults::default_cluster_achievements(),
            service_details: defaults::default_service_details(),
            session: Session::default(),
        }
    }

    // ==========================================
    // Mutator gaya reducer (satu per entitas)
    // ==========================================

    pub fn set_config(&mut self, config: AppConfig) {
        tracing::info!(app_name = %config.app_name, "konfigurasi aplikasi diganti");
        self.config = config;
    }

    pub fn set_vision_missions(&mut self, vision: String, missions: Vec<String>) {
        tracing::info!(missions = missions.len(), "visi & misi diganti");
        self.vision = vision;
        self.missions = missions;
    }

    pub fn set_services(&mut self, services: Vec<ServiceItem>) {
        tracing::info!(count = services.len(), "daftar layanan diganti");
        self.services = services;
    }

    pub fn set_employees(&mut self, employees: Vec<Employee>) {
        tracing::info!(count = employees.len(), "data pegawai diganti");
        self.employees = employees;
    }

    pub fn set_reports(&mut self, reports: Vec<PublicReport>) {
        tracing::info!(count = reports.len(), "daftar laporan diganti");
        self.reports = reports;
    }

    pub fn set_users(&mut self, users: Vec<User>) {
        tracing::info!(count = users.len(), "daftar pengguna diganti");
        self.users = users;
    }

    pub fn set_geo_info(&mut self, geo_info: GeoInfo) {
        tracing::info!("info geografis diganti");
        self.geo_info = geo_info;
    }

    pub fn set_clusters(&mut self, clusters: Vec<Cluster>) {
        tracing::info!(count = clusters.len(), "daftar klaster diganti");
        self.clusters = clusters;
    }

    pub fn set_cluster_achievements(&mut self, records: Vec<AchievementRecord>) {
        tracing::info!(count = records.len(), "catatan capaian diganti");
        self.cluster_achievements = records;
    }

    /// Ganti satu entri detail layanan (kunci = nama layanan)
    pub fn set_service_detail(&mut self, service_name: &str, content: ServiceDetailContent) {
        tracing::info!(service = service_name, "detail layanan diganti");
        self.service_details.insert(service_name.to_string(), content);
    }

    pub fn set_service_details(&mut self, details: BTreeMap<String, ServiceDetailContent>) {
        tracing::info!(count = details.len(), "peta detail layanan diganti");
        self.service_details = details;
    }

    // ==========================================
    // Bantu navigasi (tautan berbasis nama)
    // ==========================================

    /// Klaster pemilik sebuah layanan (kecocokan nama persis)
    pub fn cluster_for_service(&self, service_name: &str) -> Option<&Cluster> {
        self.clusters
            .iter()
            .find(|c| c.services.iter().any(|s| s == service_name))
    }

    /// Konten detail sebuah layanan; jatuh ke templat bawaan
    /// dengan judul diganti nama layanan yang diminta
    pub fn service_detail_or_default(&self, service_name: &str) -> ServiceDetailContent {
        if let Some(content) = self.service_details.get(service_name) {
            return content.clone();
        }
        let mut content = self
            .service_details
            .get(DEFAULT_DETAIL_KEY)
            .cloned()
            .unwrap_or_else(|| ServiceDetailContent {
                title: String::new(),
                description: String::new(),
                activities: Vec::new(),
                image_url: String::new(),
            });
        content.title = service_name.to_string();
        content
    }

    // ==========================================
    // Sesi
    // ==========================================

    /// Masuk dengan pasangan kredensial; gagal dilaporkan sebaris,
    /// tanpa lockout maupun pembatasan laju
    pub fn login(&mut self, username: &str, password: &str) -> AppResult<User> {
        let user = auth::login(&self.users, username, password)?;
        self.session.login(user.clone());
        Ok(user)
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in()
    }

    // ==========================================
    // Pemulihan dari cadangan
    // ==========================================

    /// Terapkan dokumen cadangan yang sudah lolos validasi.
    /// Koleksi yang hadir menggantikan koleksi lama secara utuh;
    /// koleksi yang absen dibiarkan apa adanya
    pub fn apply_backup(&mut self, backup: FullBackup) {
        tracing::info!(
            version = %backup.version,
            exported_at = backup.exported_at.as_deref().unwrap_or("-"),
            "memulihkan keadaan dari cadangan"
        );

        self.config = backup.app_config;
        if let Some(vision) = backup.vision {
            self.vision = vision;
        }
        if let Some(missions) = backup.missions {
            self.missions = missions;
        }
        if let Some(services) = backup.services {
            self.services = services;
        }
        if let Some(employees) = backup.employees {
            self.employees = employees;
        }
        if let Some(reports) = backup.reports {
            self.reports = reports;
        }
        if let Some(users) = backup.users {
            self.users = users;
        }
        if let Some(geo_info) = backup.geo_info {
            self.geo_info = geo_info;
        }
        if let Some(clusters) = backup.clusters {
            self.clusters = clusters;
        }
        if let Some(records) = backup.cluster_achievements {
            self.cluster_achievements = records;
        }
        if let Some(details) = backup.service_details {
            self.service_details = details;
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::seeded()
    }
}

// ==========================================
// Direktori cadangan bawaan
// ==========================================

/// Direktori keluaran ekspor bawaan
///
/// # Urutan resolusi
/// - variabel lingkungan PUSKESMAS_BACKUP_DIR bila diisi
/// - direktori data pengguna / puskesmas-profiler
/// - direktori kerja saat ini sebagai cadangan terakhir
pub fn default_backup_dir() -> PathBuf {
    if let Ok(path) = std::env::var("PUSKESMAS_BACKUP_DIR") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    if let Some(data_dir) = dirs::data_dir() {
        let path = data_dir.join("puskesmas-profiler");
        std::fs::create_dir_all(&path).ok();
        return path;
    }

    PathBuf::from(".")
}
