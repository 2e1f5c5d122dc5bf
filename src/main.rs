// ==========================================
// Profil Digital Puskesmas - Antarmuka Baris Perintah
// ==========================================
// Menjalankan seluruh operasi ujung-ke-ujung: dasbor capaian,
// ekspor/impor cadangan, dump SQL, dan analisis naratif AI
// ==========================================

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use puskesmas_profiler::app::{default_backup_dir, defaults, AppState};
use puskesmas_profiler::backup;
use puskesmas_profiler::engine::{
    build_dashboard, month_abbrev, ChartData, DashboardView, FilterSelection, Selection,
    MONTH_NAMES,
};
use puskesmas_profiler::i18n;
use puskesmas_profiler::insight::{GeminiClient, NarrativeEngine};

#[derive(Parser)]
#[command(
    name = "puskesmas-profiler",
    version,
    about = "Profil digital puskesmas - dasbor capaian Integrasi Layanan Primer (ILP)"
)]
struct Cli {
    /// Berkas cadangan JSON sebagai sumber data (bawaan: dataset contoh)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Tampilkan dasbor capaian (grafik + tabel analisis)
    Dashboard {
        /// Tahun pelaporan, mis. 2024 (bawaan: tahun terbaru pada data)
        #[arg(long)]
        year: Option<String>,
        /// Nama bulan Indonesia, mis. Januari (bawaan: semua bulan -> tren)
        #[arg(long)]
        month: Option<String>,
        /// ID klaster (bawaan: semua klaster)
        #[arg(long)]
        cluster: Option<String>,
        /// Nama indikator (bawaan: semua indikator)
        #[arg(long)]
        indicator: Option<String>,
    },
    /// Ekspor seluruh data (cadangan JSON atau dump SQL)
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Jalur berkas keluaran (bawaan: direktori data pengguna)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Validasi & muat berkas cadangan JSON
    Import {
        /// Berkas cadangan hasil ekspor JSON aplikasi ini
        file: PathBuf,
    },
    /// Analisis AI atas agregat kunjungan & penyakit
    Analyze,
    /// Tulis dataset contoh sebagai berkas cadangan JSON
    Seed {
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    Json,
    Sql,
}

#[tokio::main]
async fn main() -> Result<()> {
    puskesmas_profiler::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", puskesmas_profiler::APP_NAME);
    tracing::info!("Versi sistem: {}", puskesmas_profiler::VERSION);
    tracing::info!("==================================================");

    let cli = Cli::parse();
    let mut state = load_state(cli.data.as_deref())?;

    match cli.command {
        Command::Dashboard {
            year,
            month,
            cluster,
            indicator,
        } => run_dashboard(&state, year, month, cluster, indicator),
        Command::Export { format, out } => run_export(&state, format, out),
        Command::Import { file } => run_import(&mut state, &file),
        Command::Analyze => run_analyze().await,
        Command::Seed { out } => run_seed(out),
    }
}

/// Muat keadaan: dataset contoh, lalu timpa dari berkas cadangan
/// bila diberikan (jalur validasi impor yang sama dengan `import`)
fn load_state(data: Option<&Path>) -> Result<AppState> {
    let mut state = AppState::seeded();
    if let Some(path) = data {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("tidak bisa membaca berkas data: {}", path.display()))?;
        let backup = backup::import_json(&raw)?;
        state.apply_backup(backup);
    }
    Ok(state)
}

// ==========================================
// Dasbor
// ==========================================

fn run_dashboard(
    state: &AppState,
    year: Option<String>,
    month: Option<String>,
    cluster: Option<String>,
    indicator: Option<String>,
) -> Result<()> {
    let mut filter = FilterSelection::new(&state.cluster_achievements);
    if let Some(year) = year {
        filter.set_year(year);
    }
    if let Some(month) = month {
        filter.set_month(Selection::one(month));
    }
    if let Some(cluster) = cluster {
        filter.set_cluster(Selection::one(cluster));
    }
    // Terakhir: pilihan indikator tidak boleh ter-reset oleh mutator lain
    if let Some(indicator) = indicator {
        filter.set_indicator(Selection::one(indicator));
    }

    let view = build_dashboard(&state.clusters, &state.cluster_achievements, &filter);
    print_dashboard(&view, &filter);
    Ok(())
}

fn print_dashboard(view: &DashboardView, filter: &FilterSelection) {
    let mode = if view.drill_down {
        "Analisis Indikator (Detail Klaster)"
    } else {
        "Perbandingan Klaster"
    };
    let period = match filter.month.value() {
        None => format!("Rata-rata Tahun {}", filter.year),
        Some(month) => format!("{} {}", month, filter.year),
    };
    println!("== Dashboard Kinerja ILP ==");
    println!("Mode: {} | Data: {}", mode, period);
    println!();

    match &view.chart {
        ChartData::Trend(series) => {
            // Baris kepala: singkatan 12 bulan
            print!("{:<34}", "Tren Capaian (%)");
            for month in MONTH_NAMES {
                print!("{:>5}", month_abbrev(month));
            }
            println!();
            for s in series {
                print!("{:<34}", truncate(&s.name, 32));
                for point in &s.points {
                    match point {
                        Some(value) => print!("{:>5.0}", value),
                        // Celah data: garis menyambung, bukan nol palsu
                        None => print!("{:>5}", "-"),
                    }
                }
                println!();
            }
        }
        ChartData::Snapshot(bars) => {
            println!("Capaian Bulan {} (%)", filter.month.value().unwrap_or("-"));
            for bar in bars {
                let filled = (bar.value / 5.0).round() as usize;
                println!(
                    "{:<34}{:>4.0}% |{}",
                    truncate(&bar.name, 32),
                    bar.value,
                    "#".repeat(filled)
                );
            }
        }
    }

    println!();
    if view.table.is_empty() {
        println!("{}", i18n::t("dashboard.no_data"));
        return;
    }

    println!(
        "{:<34}{:>9}{:>10}{:>8}  {:<18}{:<40}{:<40}",
        if view.drill_down { "Nama Indikator" } else { "Klaster" },
        "Jml Data",
        "Capaian",
        "Gap",
        "Status",
        "Permasalahan",
        "Tindak Lanjut"
    );
    for row in &view.table {
        let score = row.avg_score.round();
        let gap = row.gap.round();
        let gap_label = if gap > 0.0 {
            format!("-{:.0}%", gap)
        } else {
            "0%".to_string()
        };
        println!(
            "{:<34}{:>9}{:>9.0}%{:>8}  {:<18}{:<40}{:<40}",
            truncate(&row.name, 32),
            row.count,
            score,
            gap_label,
            row.status().label(),
            truncate(&join_or_dash(&row.problems), 38),
            truncate(&join_or_dash(&row.action_plans), 38)
        );
    }
}

fn join_or_dash(notes: &[String]) -> String {
    if notes.is_empty() {
        "-".to_string()
    } else {
        notes.join("; ")
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

// ==========================================
// Ekspor / impor / seed
// ==========================================

fn run_export(state: &AppState, format: ExportFormat, out: Option<PathBuf>) -> Result<()> {
    let (content, default_name) = match format {
        ExportFormat::Json => (
            backup::export_json(state)?,
            backup::default_backup_file_name(),
        ),
        ExportFormat::Sql => (backup::export_sql(state), backup::default_sql_file_name()),
    };

    let path = out.unwrap_or_else(|| default_backup_dir().join(default_name));
    fs::write(&path, content)
        .with_context(|| format!("tidak bisa menulis berkas: {}", path.display()))?;
    println!(
        "{}",
        i18n::t_with_args("export.written", &[("path", &path.display().to_string())])
    );
    Ok(())
}

fn run_import(state: &mut AppState, file: &Path) -> Result<()> {
    println!("{}", i18n::t("import.reading"));
    let raw = fs::read_to_string(file)
        .with_context(|| format!("tidak bisa membaca berkas: {}", file.display()))?;

    let backup = match backup::import_json(&raw) {
        Ok(backup) => backup,
        Err(e) => {
            // Validasi gagal: keadaan lama tidak tersentuh
            eprintln!("{}", e);
            eprintln!("{}", i18n::t("import.failed"));
            std::process::exit(1);
        }
    };

    println!("{}", i18n::t("import.restoring"));
    let exported_date = backup
        .exported_at
        .as_deref()
        .map(|ts| ts.split('T').next().unwrap_or(ts).to_string())
        .unwrap_or_else(|| "-".to_string());
    state.apply_backup(backup);

    println!(
        "{}",
        i18n::t_with_args("import.success", &[("date", &exported_date)])
    );
    println!(
        "Koleksi termuat: {} klaster, {} capaian, {} layanan, {} pegawai, {} laporan, {} pengguna",
        state.clusters.len(),
        state.cluster_achievements.len(),
        state.services.len(),
        state.employees.len(),
        state.reports.len(),
        state.users.len()
    );
    Ok(())
}

fn run_seed(out: Option<PathBuf>) -> Result<()> {
    let state = AppState::seeded();
    let path = out.unwrap_or_else(|| default_backup_dir().join(backup::default_backup_file_name()));
    fs::write(&path, backup::export_json(&state)?)
        .with_context(|| format!("tidak bisa menulis berkas: {}", path.display()))?;
    println!(
        "{}",
        i18n::t_with_args("export.written", &[("path", &path.display().to_string())])
    );
    Ok(())
}

// ==========================================
// Analisis AI
// ==========================================

async fn run_analyze() -> Result<()> {
    let client = GeminiClient::from_env();
    if !client.has_api_key() {
        tracing::warn!("GEMINI_API_KEY tidak diisi; analisis akan terdegradasi");
    }

    let narrative = client
        .analyze(
            &defaults::default_visit_stats(),
            &defaults::default_disease_stats(),
        )
        .await;
    println!("{}", narrative);
    Ok(())
}
