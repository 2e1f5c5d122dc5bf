// ==========================================
// Profil Digital Puskesmas - Cadangan JSON
// ==========================================
// Satu dokumen memuat seluruh koleksi tingkat atas + stempel
// waktu ekspor + tag versi format. Validasi impor terjadi
// SEBELUM ada perubahan keadaan: impor tidak boleh setengah jadi
// ==========================================

use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::app::AppState;
use crate::domain::{
    AchievementRecord, AppConfig, Cluster, Employee, GeoInfo, PublicReport, ServiceDetailContent,
    ServiceItem, User,
};
use crate::error::{AppError, AppResult};
use crate::i18n;
use crate::EXPORT_VERSION;

// ==========================================
// FullBackup - dokumen cadangan lengkap
// ==========================================
// Kunci camelCase agar identik dengan format ekspor aplikasi lama.
// `appConfig` dan `version` wajib; koleksi lain opsional dan
// dibiarkan apa adanya bila absen saat pemulihan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullBackup {
    pub app_config: AppConfig,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<ServiceItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employees: Option<Vec<Employee>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reports: Option<Vec<PublicReport>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<User>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo_info: Option<GeoInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clusters: Option<Vec<Cluster>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_achievements: Option<Vec<AchievementRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_details: Option<BTreeMap<String, ServiceDetailContent>>,
}

impl FullBackup {
    /// Potret seluruh keadaan saat ini
    pub fn from_state(state: &AppState) -> Self {
        Self {
            app_config: state.config.clone(),
            version: EXPORT_VERSION.to_string(),
            exported_at: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
            vision: Some(state.vision.clone()),
            missions: Some(state.missions.clone()),
            services: Some(state.services.clone()),
            employees: Some(state.employees.clone()),
            reports: Some(state.reports.clone()),
            users: Some(state.users.clone()),
            geo_info: Some(state.geo_info.clone()),
            clusters: Some(state.clusters.clone()),
            cluster_achievements: Some(state.cluster_achievements.clone()),
            service_details: Some(state.service_details.clone()),
        }
    }
}

/// Serialisasi cadangan keadaan saat ini (pretty-print)
pub fn export_json(state: &AppState) -> AppResult<String> {
    let backup = FullBackup::from_state(state);
    tracing::info!(version = %backup.version, "ekspor cadangan JSON");
    Ok(serde_json::to_string_pretty(&backup)?)
}

/// Parse + validasi minimal dokumen cadangan
///
/// # Aturan
/// - `appConfig` dan `version` wajib hadir dan bertipe benar
/// - ketidakcocokan struktur apa pun gagal di sini, sebelum
///   ada perubahan keadaan
pub fn import_json(raw: &str) -> AppResult<FullBackup> {
    let backup: FullBackup = serde_json::from_str(raw).map_err(|e| {
        AppError::ImportError(format!("{} ({})", i18n::t("import.invalid_format"), e))
    })?;

    if backup.version.trim().is_empty() {
        return Err(AppError::ValidationError(i18n::t("import.invalid_format")));
    }

    tracing::info!(
        version = %backup.version,
        exported_at = backup.exported_at.as_deref().unwrap_or("-"),
        "dokumen cadangan lolos validasi"
    );
    Ok(backup)
}

/// Nama berkas cadangan baku: puskesmas-backup-YYYY-MM-DD.json
pub fn default_backup_file_name() -> String {
    format!("puskesmas-backup-{}.json", Utc::now().format("%Y-%m-%d"))
}
