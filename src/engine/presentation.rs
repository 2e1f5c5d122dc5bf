// ==========================================
// Profil Digital Puskesmas - Penyajian Grafik & Tabel
// ==========================================
// Dua bentuk saling eksklusif, dipilih oleh filter bulan:
// - Tren   : bulan = semua  -> 12 titik per seri (garis)
// - Potret : bulan tertentu -> satu batang per kelompok
// Warna kelompok harus stabil lintas mode dan lintas grafik/tabel
// ==========================================

use crate::domain::{AchievementRecord, Cluster};
use crate::engine::aggregate::{
    achievement_percent, average_percent, collect_unique_notes, GroupSummary,
};
use crate::engine::filter::{FilterSelection, Selection};
use serde::Serialize;

/// Sumbu bulan tetap (nama bulan Indonesia)
pub const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Palet warna kelompok; indeks kelompok menentukan warna
pub const PALETTE: [&str; 8] = [
    "#0d9488", "#ec4899", "#f59e0b", "#6366f1", "#10b981", "#ef4444", "#8b5cf6", "#14b8a6",
];

/// Warna baris "tidak ada data"
pub const NO_DATA_COLOR: &str = "#cbd5e1";

/// Warna stabil untuk indeks kelompok
pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Singkatan bulan untuk label sumbu (3 huruf pertama)
pub fn month_abbrev(month: &str) -> String {
    month.chars().take(3).collect()
}

// ==========================================
// TrendSeries - satu garis pada grafik tren
// ==========================================
// Titik None = tidak ada data bulan itu; garis menyambung
// melewati celah dan TIDAK digambar sebagai nol palsu
#[derive(Debug, Clone, Serialize)]
pub struct TrendSeries {
    pub name: String,             // Label legenda (nama pendek)
    pub full_name: String,        // Nama lengkap untuk tooltip
    pub color: String,
    pub points: Vec<Option<f64>>, // 12 titik mengikuti MONTH_NAMES
}

// ==========================================
// SnapshotBar - satu batang pada mode potret bulanan
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotBar {
    pub name: String,      // Label sumbu (nama pendek)
    pub full_name: String, // Nama lengkap untuk tooltip
    pub value: f64,        // Persentase capaian dibulatkan
    pub color: String,
}

/// Data grafik sesuai mode bulan pada filter
#[derive(Debug, Clone, Serialize)]
pub enum ChartData {
    Trend(Vec<TrendSeries>),
    Snapshot(Vec<SnapshotBar>),
}

// ==========================================
// DashboardView - hasil lengkap pipeline penyajian
// ==========================================
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub drill_down: bool,
    pub chart: ChartData,
    pub table: Vec<GroupSummary>,
}

/// Jalankan seluruh pipeline penyajian untuk satu keadaan filter
pub fn build_dashboard(
    clusters: &[Cluster],
    records: &[AchievementRecord],
    filter: &FilterSelection,
) -> DashboardView {
    let chart = match &filter.month {
        Selection::All => ChartData::Trend(build_trend(clusters, records, filter)),
        Selection::One(_) => ChartData::Snapshot(build_snapshot(clusters, records, filter)),
    };
    DashboardView {
        drill_down: filter.is_drill_down(),
        chart,
        table: build_table(clusters, records, filter),
    }
}

/// Klaster yang lolos filter klaster (semua, atau tepat satu)
fn filtered_clusters<'a>(clusters: &'a [Cluster], filter: &FilterSelection) -> Vec<&'a Cluster> {
    clusters
        .iter()
        .filter(|c| filter.cluster.matches(&c.id))
        .collect()
}

/// Indeks klaster pada daftar penuh; menjaga warna tetap sama
/// saat daftar sedang terfilter
fn cluster_color(clusters: &[Cluster], id: &str) -> String {
    let index = clusters.iter().position(|c| c.id == id).unwrap_or(0);
    color_for(index).to_string()
}

// ==========================================
// Mode tren (bulan = semua)
// ==========================================

/// Satu seri per kelompok, 12 titik per seri
pub fn build_trend(
    clusters: &[Cluster],
    records: &[AchievementRecord],
    filter: &FilterSelection,
) -> Vec<TrendSeries> {
    if filter.is_drill_down() {
        build_trend_indicators(records, filter)
    } else {
        build_trend_clusters(clusters, records, filter)
    }
}

/// Seri per klaster: titik = rata-rata capaian bulan tersebut
fn build_trend_clusters(
    clusters: &[Cluster],
    records: &[AchievementRecord],
    filter: &FilterSelection,
) -> Vec<TrendSeries> {
    filtered_clusters(clusters, filter)
        .into_iter()
        .map(|cluster| {
            let points = MONTH_NAMES
                .iter()
                .map(|month| {
                    let items: Vec<&AchievementRecord> = records
                        .iter()
                        .filter(|r| r.cluster_id == cluster.id)
                        .filter(|r| r.year == filter.year)
                        .filter(|r| r.month == *month)
                        .filter(|r| filter.indicator.matches(&r.indicator))
                        .collect();
                    if items.is_empty() {
                        None
                    } else {
                        Some(average_percent(&items).round())
                    }
                })
                .collect();
            TrendSeries {
                name: cluster.short_name().to_string(),
                full_name: cluster.name.clone(),
                color: cluster_color(clusters, &cluster.id),
                points,
            }
        })
        .collect()
}

/// Seri per indikator di dalam klaster terpilih (drill-down).
/// Satu catatan per (indikator, bulan); catatan dengan target 0
/// dianggap tidak punya titik, bukan 0%
fn build_trend_indicators(
    records: &[AchievementRecord],
    filter: &FilterSelection,
) -> Vec<TrendSeries> {
    let Some(cluster_id) = filter.cluster.value() else {
        return Vec::new();
    };
    filter
        .available_indicators(records)
        .into_iter()
        .enumerate()
        .map(|(index, indicator)| {
            let points = MONTH_NAMES
                .iter()
                .map(|month| {
                    records
                        .iter()
                        .find(|r| {
                            r.cluster_id == cluster_id
                                && r.year == filter.year
                                && r.month == *month
                                && r.indicator == indicator
                        })
                        .filter(|r| r.target > 0.0)
                        .map(|r| achievement_percent(r.target, r.realization).round())
                })
                .collect();
            TrendSeries {
                name: indicator.clone(),
                full_name: indicator,
                color: color_for(index).to_string(),
                points,
            }
        })
        .collect()
}

// ==========================================
// Mode potret (bulan tertentu)
// ==========================================

/// Satu batang per kelompok untuk bulan terpilih
pub fn build_snapshot(
    clusters: &[Cluster],
    records: &[AchievementRecord],
    filter: &FilterSelection,
) -> Vec<SnapshotBar> {
    let Some(month) = filter.month.value() else {
        return Vec::new();
    };

    if filter.is_drill_down() {
        let Some(cluster_id) = filter.cluster.value() else {
            return Vec::new();
        };
        filter
            .available_indicators(records)
            .into_iter()
            .enumerate()
            .map(|(index, indicator)| {
                let value = records
                    .iter()
                    .find(|r| {
                        r.cluster_id == cluster_id
                            && r.year == filter.year
                            && r.month == month
                            && r.indicator == indicator
                    })
                    .filter(|r| r.target > 0.0)
                    .map(|r| achievement_percent(r.target, r.realization).round())
                    .unwrap_or(0.0);
                SnapshotBar {
                    name: indicator.clone(),
                    full_name: indicator,
                    value,
                    color: color_for(index).to_string(),
                }
            })
            .collect()
    } else {
        filtered_clusters(clusters, filter)
            .into_iter()
            .map(|cluster| {
                let items: Vec<&AchievementRecord> = records
                    .iter()
                    .filter(|r| r.cluster_id == cluster.id)
                    .filter(|r| r.year == filter.year)
                    .filter(|r| r.month == month)
                    .filter(|r| filter.indicator.matches(&r.indicator))
                    .collect();
                let value = if items.is_empty() {
                    0.0
                } else {
                    average_percent(&items).round()
                };
                SnapshotBar {
                    name: cluster.short_name().to_string(),
                    full_name: cluster.name.clone(),
                    value,
                    color: cluster_color(clusters, &cluster.id),
                }
            })
            .collect()
    }
}

// ==========================================
// Mode tabel (capaian & kesenjangan)
// ==========================================

/// Baris tabel analisis: per klaster, atau per indikator saat
/// drill-down. Baris klaster tanpa catatan tetap tampil sebagai
/// "tidak ada data"; indikator tanpa catatan tidak ditampilkan.
pub fn build_table(
    clusters: &[Cluster],
    records: &[AchievementRecord],
    filter: &FilterSelection,
) -> Vec<GroupSummary> {
    if filter.is_drill_down() {
        build_table_indicators(records, filter)
    } else {
        build_table_clusters(clusters, records, filter)
    }
}

fn build_table_clusters(
    clusters: &[Cluster],
    records: &[AchievementRecord],
    filter: &FilterSelection,
) -> Vec<GroupSummary> {
    filtered_clusters(clusters, filter)
        .into_iter()
        .map(|cluster| {
            let items: Vec<&AchievementRecord> = records
                .iter()
                .filter(|r| r.cluster_id == cluster.id)
                .filter(|r| r.year == filter.year)
                .filter(|r| filter.month.matches(&r.month))
                .filter(|r| filter.indicator.matches(&r.indicator))
                .collect();

            if items.is_empty() {
                return GroupSummary {
                    id: cluster.id.clone(),
                    name: cluster.name.clone(),
                    icon_name: cluster.icon_name.clone(),
                    count: 0,
                    avg_score: 0.0,
                    gap: 100.0,
                    color: NO_DATA_COLOR.to_string(),
                    problems: Vec::new(),
                    action_plans: Vec::new(),
                };
            }

            let avg_score = average_percent(&items);
            GroupSummary {
                id: cluster.id.clone(),
                name: cluster.name.clone(),
                icon_name: cluster.icon_name.clone(),
                count: items.len(),
                avg_score,
                gap: 100.0 - avg_score,
                color: cluster_color(clusters, &cluster.id),
                problems: collect_unique_notes(&items, |r| r.problems.as_deref()),
                action_plans: collect_unique_notes(&items, |r| r.action_plan.as_deref()),
            }
        })
        .collect()
}

fn build_table_indicators(
    records: &[AchievementRecord],
    filter: &FilterSelection,
) -> Vec<GroupSummary> {
    let Some(cluster_id) = filter.cluster.value() else {
        return Vec::new();
    };
    filter
        .available_indicators(records)
        .into_iter()
        .enumerate()
        .filter_map(|(index, indicator)| {
            let items: Vec<&AchievementRecord> = records
                .iter()
                .filter(|r| r.cluster_id == cluster_id)
                .filter(|r| r.year == filter.year)
                .filter(|r| r.indicator == indicator)
                .filter(|r| filter.month.matches(&r.month))
                .collect();

            if items.is_empty() {
                return None;
            }

            let avg_score = average_percent(&items);
            Some(GroupSummary {
                id: indicator.clone(),
                name: indicator,
                icon_name: "Target".to_string(),
                count: items.len(),
                avg_score,
                gap: 100.0 - avg_score,
                color: color_for(index).to_string(),
                problems: collect_unique_notes(&items, |r| r.problems.as_deref()),
                action_plans: collect_unique_notes(&items, |r| r.action_plan.as_deref()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::aggregate::AchievementStatus;

    fn cluster(id: &str, name: &str) -> Cluster {
        Cluster {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            services: vec![],
            icon_name: "Layers".to_string(),
        }
    }

    fn record(
        id: &str,
        cluster_id: &str,
        indicator: &str,
        month: &str,
        target: f64,
        realization: f64,
    ) -> AchievementRecord {
        AchievementRecord {
            id: id.to_string(),
            cluster_id: cluster_id.to_string(),
            service_name: None,
            activity_name: None,
            indicator: indicator.to_string(),
            target,
            realization,
            unit: "%".to_string(),
            year: "2024".to_string(),
            month: month.to_string(),
            problems: None,
            action_plan: None,
        }
    }

    fn sample_clusters() -> Vec<Cluster> {
        vec![
            cluster("1", "Klaster 1: Manajemen"),
            cluster("2", "Klaster 2: Ibu & Anak"),
            cluster("3", "Klaster 3: Usia Dewasa & Lansia"),
        ]
    }

    fn sample_records() -> Vec<AchievementRecord> {
        vec![
            record("1", "2", "Kunjungan K1", "Januari", 100.0, 98.0),
            record("2", "2", "IDL", "Januari", 95.0, 92.0),
            record("3", "2", "Kunjungan K1", "Februari", 100.0, 99.0),
            record("4", "3", "Skrining PTM", "Januari", 100.0, 85.0),
        ]
    }

    #[test]
    fn test_tren_bulan_kosong_none_bukan_nol() {
        let clusters = sample_clusters();
        let records = sample_records();
        let filter = FilterSelection::new(&records);

        let series = build_trend(&clusters, &records, &filter);
        assert_eq!(series.len(), 3);

        let k2 = series.iter().find(|s| s.name == "Klaster 2").unwrap();
        assert_eq!(k2.points.len(), 12);
        // Januari: rata-rata (98 + 96.84...) / 2 -> 97
        assert_eq!(k2.points[0], Some(97.0));
        assert_eq!(k2.points[1], Some(99.0));
        // Maret dst. tidak ada catatan: celah, bukan nol palsu
        assert_eq!(k2.points[2], None);

        // Klaster tanpa catatan sama sekali: 12 celah
        let k1 = series.iter().find(|s| s.name == "Klaster 1").unwrap();
        assert!(k1.points.iter().all(|p| p.is_none()));
    }

    #[test]
    fn test_label_pendek_dan_nama_lengkap() {
        let clusters = sample_clusters();
        let records = sample_records();
        let filter = FilterSelection::new(&records);

        let series = build_trend(&clusters, &records, &filter);
        let k2 = series.iter().find(|s| s.full_name == "Klaster 2: Ibu & Anak").unwrap();
        assert_eq!(k2.name, "Klaster 2");
    }

    #[test]
    fn test_tren_drill_down_per_indikator() {
        let clusters = sample_clusters();
        let records = sample_records();
        let mut filter = FilterSelection::new(&records);
        filter.set_cluster(Selection::one("2"));
        assert!(filter.is_drill_down());

        let series = build_trend(&clusters, &records, &filter);
        // Indikator terurut: IDL, Kunjungan K1
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "IDL");
        assert_eq!(series[1].name, "Kunjungan K1");

        // IDL Januari: 92/95 -> 97 (dibulatkan)
        assert_eq!(series[0].points[0], Some(97.0));
        assert_eq!(series[0].points[1], None);
    }

    #[test]
    fn test_tren_drill_down_target_nol_jadi_celah() {
        let clusters = sample_clusters();
        let mut records = sample_records();
        records.push(record("5", "2", "Bebas Jentik", "Januari", 0.0, 50.0));

        let mut filter = FilterSelection::new(&records);
        filter.set_cluster(Selection::one("2"));

        let series = build_trend(&clusters, &records, &filter);
        let jentik = series.iter().find(|s| s.name == "Bebas Jentik").unwrap();
        assert_eq!(jentik.points[0], None);
    }

    #[test]
    fn test_potret_satu_batang_per_klaster() {
        let clusters = sample_clusters();
        let records = sample_records();
        let mut filter = FilterSelection::new(&records);
        filter.set_month(Selection::one("Januari"));

        let bars = build_snapshot(&clusters, &records, &filter);
        assert_eq!(bars.len(), 3);

        let k2 = bars.iter().find(|b| b.name == "Klaster 2").unwrap();
        assert_eq!(k2.value, 97.0);
        let k1 = bars.iter().find(|b| b.name == "Klaster 1").unwrap();
        assert_eq!(k1.value, 0.0);
    }

    #[test]
    fn test_warna_stabil_lintas_filter_dan_mode() {
        let clusters = sample_clusters();
        let records = sample_records();

        // Tampilan penuh, mode tren
        let filter = FilterSelection::new(&records);
        let series = build_trend(&clusters, &records, &filter);
        let warna_k3 = series.iter().find(|s| s.name == "Klaster 3").unwrap().color.clone();
        assert_eq!(warna_k3, PALETTE[2]);

        // Hanya klaster 3 + indikator terpilih (bukan drill-down), mode potret
        let mut filter = FilterSelection::new(&records);
        filter.set_cluster(Selection::one("3"));
        filter.set_month(Selection::one("Januari"));
        filter.set_indicator(Selection::one("Skrining PTM"));
        assert!(!filter.is_drill_down());
        let bars = build_snapshot(&clusters, &records, &filter);
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].color, warna_k3);

        // Tabel memakai warna yang sama
        let rows = build_table(&clusters, &records, &filter);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].color, warna_k3);
    }

    #[test]
    fn test_tabel_klaster_tanpa_data_tetap_tampil() {
        let clusters = sample_clusters();
        let records = sample_records();
        let filter = FilterSelection::new(&records);

        let rows = build_table(&clusters, &records, &filter);
        assert_eq!(rows.len(), 3);

        let k1 = rows.iter().find(|r| r.id == "1").unwrap();
        assert_eq!(k1.count, 0);
        assert_eq!(k1.avg_score, 0.0);
        assert_eq!(k1.gap, 100.0);
        assert_eq!(k1.color, NO_DATA_COLOR);
        assert_eq!(k1.status(), AchievementStatus::TidakAdaData);
    }

    #[test]
    fn test_tabel_drill_down_lewati_indikator_kosong() {
        let clusters = sample_clusters();
        let records = sample_records();
        let mut filter = FilterSelection::new(&records);
        filter.set_cluster(Selection::one("2"));
        // Bulan Februari: hanya Kunjungan K1 yang punya catatan
        filter.set_month(Selection::one("Februari"));

        let rows = build_table(&clusters, &records, &filter);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Kunjungan K1");
        assert_eq!(rows[0].icon_name, "Target");
    }

    #[test]
    fn test_tabel_mengumpulkan_catatan_unik() {
        let clusters = sample_clusters();
        let mut records = sample_records();
        records[0].problems = Some("Beberapa ibu hamil enggan periksa dini".to_string());
        records[0].action_plan = Some("Penyuluhan door-to-door oleh kader".to_string());
        records[2].problems = Some("Beberapa ibu hamil enggan periksa dini".to_string());

        let filter = FilterSelection::new(&records);
        let rows = build_table(&clusters, &records, &filter);
        let k2 = rows.iter().find(|r| r.id == "2").unwrap();
        assert_eq!(k2.problems.len(), 1);
        assert_eq!(k2.action_plans.len(), 1);
    }

    #[test]
    fn test_dashboard_mode_grafik_mengikuti_bulan() {
        let clusters = sample_clusters();
        let records = sample_records();

        let filter = FilterSelection::new(&records);
        let view = build_dashboard(&clusters, &records, &filter);
        assert!(matches!(view.chart, ChartData::Trend(_)));

        let mut filter = FilterSelection::new(&records);
        filter.set_month(Selection::one("Januari"));
        let view = build_dashboard(&clusters, &records, &filter);
        assert!(matches!(view.chart, ChartData::Snapshot(_)));
    }

    #[test]
    fn test_singkatan_bulan() {
        assert_eq!(month_abbrev("Januari"), "Jan");
        assert_eq!(month_abbrev("Agustus"), "Agu");
        assert_eq!(month_abbrev("Mei"), "Mei");
    }
}
