// ==========================================
// Uji integrasi ekspor/impor cadangan JSON
// ==========================================
// Cakupan:
// 1. Ekspor -> impor menghasilkan keadaan identik untuk
//    seluruh sebelas koleksi tingkat atas
// 2. Dokumen rusak ditolak tanpa menyentuh keadaan lama
// ==========================================

use std::io::Write;

use puskesmas_profiler::app::AppState;
use puskesmas_profiler::backup;
use puskesmas_profiler::domain::AchievementRecord;
use puskesmas_profiler::logging;
use tempfile::NamedTempFile;

/// Keadaan contoh yang sudah disunting admin (bukan murni bawaan)
fn mutated_state() -> AppState {
    let mut state = AppState::seeded();
    state.set_vision_missions(
        "Visi hasil suntingan".to_string(),
        vec!["Misi pertama".to_string(), "Misi kedua".to_string()],
    );

    let mut records = state.cluster_achievements.clone();
    records.push(AchievementRecord {
        id: "99".to_string(),
        cluster_id: "5".to_string(),
        service_name: Some("Laboratorium".to_string()),
        activity_name: None,
        indicator: "Pemeriksaan Lab Dasar".to_string(),
        target: 0.0,
        realization: 50.0,
        unit: "Orang".to_string(),
        year: "2024".to_string(),
        month: "Mei".to_string(),
        problems: Some("Reagen sempat kosong\nstok menipis".to_string()),
        action_plan: None,
    });
    state.set_cluster_achievements(records);
    state
}

#[test]
fn test_roundtrip_identik_seluruh_koleksi() {
    // Inisialisasi sistem log
    logging::init_test();

    let source = mutated_state();
    let json = backup::export_json(&source).expect("ekspor gagal");

    // Tulis lalu baca kembali lewat berkas sungguhan
    let mut file = NamedTempFile::new().expect("berkas sementara");
    file.write_all(json.as_bytes()).expect("tulis gagal");
    let raw = std::fs::read_to_string(file.path()).expect("baca gagal");

    // Keadaan tujuan sengaja dibuat berbeda dahulu
    let mut restored = AppState::seeded();
    restored.set_vision_missions("Visi lain".to_string(), vec![]);
    restored.set_cluster_achievements(vec![]);

    let document = backup::import_json(&raw).expect("impor gagal");
    restored.apply_backup(document);

    assert_eq!(restored.config, source.config);
    assert_eq!(restored.vision, source.vision);
    assert_eq!(restored.missions, source.missions);
    assert_eq!(restored.services, source.services);
    assert_eq!(restored.employees, source.employees);
    assert_eq!(restored.reports, source.reports);
    assert_eq!(restored.users, source.users);
    assert_eq!(restored.geo_info, source.geo_info);
    assert_eq!(restored.clusters, source.clusters);
    assert_eq!(restored.cluster_achievements, source.cluster_achievements);
    assert_eq!(restored.service_details, source.service_details);
}

#[test]
fn test_dokumen_rusak_ditolak_tanpa_perubahan() {
    logging::init_test();

    let mut state = AppState::seeded();
    let vision_before = state.vision.clone();
    let achievements_before = state.cluster_achievements.clone();

    // Tanpa appConfig, tanpa version, dan bukan JSON sama sekali
    let broken = [
        "{\"version\":\"1.0\",\"vision\":\"Visi penyusup\"}",
        "{\"appConfig\":{\"appName\":\"X\",\"tagline\":\"Y\",\"hero\":{\"title\":\"\",\"subtitle\":\"\",\"imageUrl\":\"\"},\"contact\":{\"address\":\"\",\"phone\":\"\",\"email\":\"\",\"hours\":\"\"}},\"vision\":\"Visi penyusup\"}",
        "-- Puskesmas Digital Profiler SQL Dump\nBEGIN TRANSACTION;",
    ];

    for raw in broken {
        let result = backup::import_json(raw);
        assert!(result.is_err(), "dokumen rusak harus ditolak: {}", raw);
    }

    // Keadaan lama tidak tersentuh
    assert_eq!(state.vision, vision_before);
    assert_eq!(state.cluster_achievements, achievements_before);

    // Dokumen valid setelahnya tetap bisa diterapkan
    let json = backup::export_json(&state).expect("ekspor gagal");
    let document = backup::import_json(&json).expect("impor gagal");
    state.apply_backup(document);
    assert_eq!(state.vision, vision_before);
}

#[test]
fn test_tipe_field_salah_ditolak() {
    // clusterAchievements bertipe objek, bukan larik
    let raw = "{\"appConfig\":{\"appName\":\"X\",\"tagline\":\"Y\",\"hero\":{\"title\":\"\",\"subtitle\":\"\",\"imageUrl\":\"\"},\"contact\":{\"address\":\"\",\"phone\":\"\",\"email\":\"\",\"hours\":\"\"}},\"version\":\"1.0\",\"clusterAchievements\":{}}";
    assert!(backup::import_json(raw).is_err());
}

#[test]
fn test_koleksi_absen_dibiarkan() {
    // Dokumen minimal yang valid: hanya appConfig + version
    let mut state = AppState::seeded();
    let achievements_before = state.cluster_achievements.clone();

    let raw = "{\"appConfig\":{\"appName\":\"Puskesmas Baru\",\"tagline\":\"Slogan\",\"hero\":{\"title\":\"\",\"subtitle\":\"\",\"imageUrl\":\"\"},\"contact\":{\"address\":\"\",\"phone\":\"\",\"email\":\"\",\"hours\":\"\"}},\"version\":\"1.0\"}";
    let document = backup::import_json(raw).expect("dokumen minimal valid");
    state.apply_backup(document);

    assert_eq!(state.config.app_name, "Puskesmas Baru");
    // Koleksi yang tidak hadir pada dokumen tetap utuh
    assert_eq!(state.cluster_achievements, achievements_before);
}
