// ==========================================
// Profil Digital Puskesmas - Ekspor Dump SQL
// ==========================================
// Proyeksi relasional satu arah untuk migrasi ke basis data
// eksternal (MySQL/PostgreSQL/SQLite); TIDAK dapat diimpor
// kembali oleh aplikasi ini.
// Seluruh nilai melewati SqlValue; tidak ada penyambungan
// string ad-hoc di titik nilai
// ==========================================

use chrono::Utc;

use crate::app::AppState;

// ==========================================
// SqlValue - nilai literal yang sudah di-escape
// ==========================================
#[derive(Debug, Clone)]
pub enum SqlValue {
    Text(String),
    Number(f64),
    Null,
}

impl SqlValue {
    pub fn text(value: impl Into<String>) -> Self {
        SqlValue::Text(value.into())
    }

    pub fn opt_text(value: Option<&str>) -> Self {
        match value {
            Some(v) => SqlValue::Text(v.to_string()),
            None => SqlValue::Null,
        }
    }

    /// Render sebagai literal SQL: kutip tunggal digandakan,
    /// baris baru di-escape
    fn render(&self) -> String {
        match self {
            SqlValue::Text(s) => {
                format!("'{}'", s.replace('\'', "''").replace('\n', "\\n"))
            }
            SqlValue::Number(n) => format!("{}", n),
            SqlValue::Null => "NULL".to_string(),
        }
    }
}

// ==========================================
// SqlDump - penulis dump berbasis skema
// ==========================================
pub struct SqlDump {
    buf: String,
}

impl SqlDump {
    /// Mulai dump baru: header + BEGIN TRANSACTION
    pub fn new(title: &str) -> Self {
        let mut buf = String::new();
        buf.push_str(&format!("-- {}\n", title));
        buf.push_str(&format!("-- Generated: {}\n\n", Utc::now().to_rfc3339()));
        buf.push_str("BEGIN TRANSACTION;\n\n");
        Self { buf }
    }

    /// Komentar penanda tabel
    pub fn section(&mut self, table: &str) {
        self.buf.push_str(&format!("\n-- Table: {}\n", table));
    }

    /// Emit CREATE TABLE IF NOT EXISTS
    pub fn create_table(&mut self, table: &str, columns_ddl: &str) {
        self.buf.push_str(&format!(
            "CREATE TABLE IF NOT EXISTS {} ({});\n",
            table, columns_ddl
        ));
    }

    /// Emit satu INSERT dengan daftar kolom eksplisit
    pub fn insert(&mut self, table: &str, columns: &[&str], values: &[SqlValue]) {
        debug_assert_eq!(columns.len(), values.len(), "kolom dan nilai harus sejajar");
        let rendered: Vec<String> = values.iter().map(SqlValue::render).collect();
        self.buf.push_str(&format!(
            "INSERT INTO {} ({}) VALUES ({});\n",
            table,
            columns.join(", "),
            rendered.join(", ")
        ));
    }

    /// Tutup transaksi dan kembalikan teks dump
    pub fn finish(mut self) -> String {
        self.buf.push_str("\nCOMMIT;\n");
        self.buf
    }
}

/// Nama berkas dump baku: puskesmas-dump-YYYY-MM-DD.sql
pub fn default_sql_file_name() -> String {
    format!("puskesmas-dump-{}.sql", Utc::now().format("%Y-%m-%d"))
}

/// Proyeksikan seluruh koleksi keadaan menjadi dump relasional
pub fn export_sql(state: &AppState) -> String {
    let mut dump = SqlDump::new("Puskesmas Digital Profiler SQL Dump");

    // 1. Pengaturan aplikasi & meta (key-value per seksi)
    dump.section("app_settings");
    dump.create_table(
        "app_settings",
        "key VARCHAR(255) PRIMARY KEY, value TEXT, section VARCHAR(50)",
    );
    let settings: Vec<(&str, SqlValue, &str)> = vec![
        ("appName", SqlValue::text(&state.config.app_name), "config"),
        ("tagline", SqlValue::text(&state.config.tagline), "config"),
        ("hero_title", SqlValue::text(&state.config.hero.title), "hero"),
        ("hero_subtitle", SqlValue::text(&state.config.hero.subtitle), "hero"),
        ("hero_image", SqlValue::text(&state.config.hero.image_url), "hero"),
        ("contact_address", SqlValue::text(&state.config.contact.address), "contact"),
        ("contact_phone", SqlValue::text(&state.config.contact.phone), "contact"),
        ("contact_email", SqlValue::text(&state.config.contact.email), "contact"),
        ("contact_hours", SqlValue::text(&state.config.contact.hours), "contact"),
        (
            "theme_bg",
            SqlValue::opt_text(state.config.theme.as_ref().map(|t| t.background.as_str())),
            "theme",
        ),
        ("vision", SqlValue::text(&state.vision), "profile"),
        ("geo_desc", SqlValue::text(&state.geo_info.description), "geo"),
        ("geo_image", SqlValue::text(&state.geo_info.image_url), "geo"),
    ];
    for (key, value, section) in settings {
        dump.insert(
            "app_settings",
            &["key", "value", "section"],
            &[SqlValue::text(key), value, SqlValue::text(section)],
        );
    }

    // 2. Misi
    dump.section("missions");
    dump.create_table(
        "missions",
        "id INTEGER PRIMARY KEY AUTOINCREMENT, statement TEXT",
    );
    for mission in &state.missions {
        dump.insert("missions", &["statement"], &[SqlValue::text(mission)]);
    }

    // 3. Pengguna
    dump.section("users");
    dump.create_table(
        "users",
        "id VARCHAR(50) PRIMARY KEY, username VARCHAR(50), password VARCHAR(255), name VARCHAR(100), role VARCHAR(20)",
    );
    for user in &state.users {
        dump.insert(
            "users",
            &["id", "username", "password", "name", "role"],
            &[
                SqlValue::text(&user.id),
                SqlValue::text(&user.username),
                SqlValue::text(&user.password),
                SqlValue::text(&user.name),
                SqlValue::text(user.role.label()),
            ],
        );
    }

    // 4. Pegawai
    dump.section("employees");
    dump.create_table(
        "employees",
        "id VARCHAR(50) PRIMARY KEY, name VARCHAR(100), role VARCHAR(100), photo_url TEXT",
    );
    for employee in &state.employees {
        dump.insert(
            "employees",
            &["id", "name", "role", "photo_url"],
            &[
                SqlValue::text(&employee.id),
                SqlValue::text(&employee.name),
                SqlValue::text(&employee.role),
                SqlValue::text(&employee.photo_url),
            ],
        );
    }

    // 5. Katalog layanan
    dump.section("services");
    dump.create_table(
        "services",
        "title VARCHAR(100), description TEXT, icon_name VARCHAR(50)",
    );
    for service in &state.services {
        dump.insert(
            "services",
            &["title", "description", "icon_name"],
            &[
                SqlValue::text(&service.title),
                SqlValue::text(&service.desc),
                SqlValue::text(&service.icon_name),
            ],
        );
    }

    // 6. Klaster + relasi layanan per klaster
    dump.section("clusters");
    dump.create_table(
        "clusters",
        "id VARCHAR(50) PRIMARY KEY, name VARCHAR(100), description TEXT, icon_name VARCHAR(50)",
    );
    dump.section("cluster_services");
    dump.create_table(
        "cluster_services",
        "cluster_id VARCHAR(50), service_name VARCHAR(100)",
    );
    for cluster in &state.clusters {
        dump.insert(
            "clusters",
            &["id", "name", "description", "icon_name"],
            &[
                SqlValue::text(&cluster.id),
                SqlValue::text(&cluster.name),
                SqlValue::text(&cluster.description),
                SqlValue::text(&cluster.icon_name),
            ],
        );
        for service in &cluster.services {
            dump.insert(
                "cluster_services",
                &["cluster_id", "service_name"],
                &[SqlValue::text(&cluster.id), SqlValue::text(service)],
            );
        }
    }

    // 7. Catatan capaian indikator
    dump.section("cluster_achievements");
    dump.create_table(
        "cluster_achievements",
        "id VARCHAR(50) PRIMARY KEY, cluster_id VARCHAR(50), service_name VARCHAR(100), activity_name VARCHAR(100), indicator VARCHAR(255), target DECIMAL(10,2), realization DECIMAL(10,2), unit VARCHAR(20), year VARCHAR(4), month VARCHAR(20), problems TEXT, action_plan TEXT",
    );
    for record in &state.cluster_achievements {
        dump.insert(
            "cluster_achievements",
            &[
                "id",
                "cluster_id",
                "service_name",
                "activity_name",
                "indicator",
                "target",
                "realization",
                "unit",
                "year",
                "month",
                "problems",
                "action_plan",
            ],
            &[
                SqlValue::text(&record.id),
                SqlValue::text(&record.cluster_id),
                SqlValue::opt_text(record.service_name.as_deref()),
                SqlValue::opt_text(record.activity_name.as_deref()),
                SqlValue::text(&record.indicator),
                SqlValue::Number(record.target),
                SqlValue::Number(record.realization),
                SqlValue::text(&record.unit),
                SqlValue::text(&record.year),
                SqlValue::text(&record.month),
                SqlValue::opt_text(record.problems.as_deref()),
                SqlValue::opt_text(record.action_plan.as_deref()),
            ],
        );
    }

    // 8. Laporan publik
    dump.section("public_reports");
    dump.create_table(
        "public_reports",
        "id VARCHAR(50) PRIMARY KEY, title VARCHAR(255), year VARCHAR(4), category VARCHAR(50), size VARCHAR(20)",
    );
    for report in &state.reports {
        dump.insert(
            "public_reports",
            &["id", "title", "year", "category", "size"],
            &[
                SqlValue::text(&report.id),
                SqlValue::text(&report.title),
                SqlValue::text(&report.year),
                SqlValue::text(&report.category),
                SqlValue::text(&report.size),
            ],
        );
    }

    // 9. Detail layanan + relasi kegiatan
    dump.section("service_details");
    dump.create_table(
        "service_details",
        "service_key VARCHAR(100) PRIMARY KEY, title VARCHAR(255), description TEXT, image_url TEXT",
    );
    dump.section("service_detail_activities");
    dump.create_table(
        "service_detail_activities",
        "service_key VARCHAR(100), activity_name TEXT",
    );
    for (key, content) in &state.service_details {
        dump.insert(
            "service_details",
            &["service_key", "title", "description", "image_url"],
            &[
                SqlValue::text(key),
                SqlValue::text(&content.title),
                SqlValue::text(&content.description),
                SqlValue::text(&content.image_url),
            ],
        );
        for activity in &content.activities {
            dump.insert(
                "service_detail_activities",
                &["service_key", "activity_name"],
                &[SqlValue::text(key), SqlValue::text(activity)],
            );
        }
    }

    tracing::info!("ekspor dump SQL selesai");
    dump.finish()
}
