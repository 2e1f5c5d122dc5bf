// ==========================================
// Profil Digital Puskesmas - Dataset Bawaan
// ==========================================
// Konten awal profil, klaster ILP, dan catatan capaian contoh;
// seluruhnya dapat diganti admin dan lewat impor cadangan
// ==========================================

use std::collections::BTreeMap;

use crate::auth::hash_password;
use crate::domain::{
    AchievementRecord, AppConfig, Cluster, ContactInfo, DiseaseRecord, Employee, GeoInfo,
    HeroContent, PublicReport, ServiceDetailContent, ServiceItem, ThemeConfig, Trend, User,
    UserRole, VisitRecord,
};
use crate::domain::service::DEFAULT_DETAIL_KEY;

pub fn default_config() -> AppConfig {
    AppConfig {
        app_name: "UPTD Puskesmas Sehat Mandiri".to_string(),
        tagline: "Melayani dengan Hati, Menuju Masyarakat Sehat".to_string(),
        hero: HeroContent {
            title: "Profil Digital Puskesmas Sehat Mandiri".to_string(),
            subtitle: "Kami menyediakan data kesehatan transparan, layanan terpadu, dan fasilitas modern untuk kesejahteraan masyarakat.".to_string(),
            image_url: "https://picsum.photos/800/600?grayscale".to_string(),
        },
        contact: ContactInfo {
            address: "Jl. Kesehatan No. 12, Kota Sehat".to_string(),
            phone: "021-555-0199".to_string(),
            email: "info@puskesmas-sehat.go.id".to_string(),
            hours: "Senin - Sabtu: 07.00 - 14.00".to_string(),
        },
        theme: Some(ThemeConfig {
            background: "bg-slate-50".to_string(),
        }),
    }
}

pub fn default_vision() -> String {
    "Terwujudnya Masyarakat Kecamatan Sehat yang Mandiri dan Berkeadilan.".to_string()
}

pub fn default_missions() -> Vec<String> {
    vec![
        "Meningkatkan pelayanan kesehatan yang bermutu dan terjangkau.".to_string(),
        "Mendorong kemandirian masyarakat untuk hidup sehat.".to_string(),
        "Meningkatkan tata kelola puskesmas yang akuntabel.".to_string(),
    ]
}

pub fn default_services() -> Vec<ServiceItem> {
    let service = |title: &str, desc: &str, icon_name: &str| ServiceItem {
        title: title.to_string(),
        desc: desc.to_string(),
        icon_name: icon_name.to_string(),
    };
    vec![
        service(
            "Poli Umum",
            "Pemeriksaan kesehatan dasar dan pengobatan umum.",
            "Stethoscope",
        ),
        service("Poli KIA/KB", "Kesehatan Ibu Anak dan Keluarga Berencana.", "Baby"),
        service("UGD 24 Jam", "Penanganan gawat darurat medis siap siaga.", "Activity"),
        service("Konseling Gizi", "Konsultasi pola makan dan gizi seimbang.", "Users"),
    ]
}

pub fn default_employees() -> Vec<Employee> {
    let employee = |id: &str, name: &str, role: &str, photo_url: &str| Employee {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        photo_url: photo_url.to_string(),
    };
    vec![
        employee(
            "1",
            "Dr. Budi Santoso, M.Kes",
            "Kepala Puskesmas",
            "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?auto=format&fit=crop&q=80&w=300&h=300",
        ),
        employee(
            "2",
            "Dr. Siti Aminah",
            "Dokter Umum",
            "https://images.unsplash.com/photo-1594824476967-48c8b964273f?auto=format&fit=crop&q=80&w=300&h=300",
        ),
        employee(
            "3",
            "Ns. Ahmad Rizki, S.Kep",
            "Koordinator Perawat",
            "https://images.unsplash.com/photo-1537368910025-700350fe46c7?auto=format&fit=crop&q=80&w=300&h=300",
        ),
        employee(
            "4",
            "Bidan Ratna Sari, Str.Keb",
            "Koordinator KIA",
            "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?auto=format&fit=crop&q=80&w=300&h=300",
        ),
    ]
}

pub fn default_reports() -> Vec<PublicReport> {
    let report = |id: &str, title: &str, year: &str, category: &str, size: &str| PublicReport {
        id: id.to_string(),
        title: title.to_string(),
        year: year.to_string(),
        category: category.to_string(),
        size: size.to_string(),
    };
    vec![
        report("1", "Profil Kesehatan Puskesmas 2023", "2023", "Laporan Tahunan", "4.2 MB"),
        report("2", "Laporan Akuntabilitas Kinerja (LAKIP)", "2023", "Kinerja", "2.1 MB"),
        report("3", "Hasil Survei Kepuasan Masyarakat", "2024", "Survei", "1.5 MB"),
        report("4", "Rencana Strategis (Renstra) 2022-2027", "2022", "Perencanaan", "5.8 MB"),
        report("5", "Laporan Keuangan Semester I 2024", "2024", "Keuangan", "1.8 MB"),
        report("6", "Standar Pelayanan Publik", "2024", "Regulasi", "0.9 MB"),
    ]
}

pub fn default_users() -> Vec<User> {
    vec![User {
        id: "1".to_string(),
        username: "admin".to_string(),
        password: hash_password("admin123"),
        name: "Administrator".to_string(),
        role: UserRole::Admin,
    }]
}

pub fn default_geo_info() -> GeoInfo {
    GeoInfo {
        description: "Wilayah kerja UPTD Puskesmas Sehat Mandiri mencakup area seluas 45 km² yang terdiri dari dataran rendah dan perbukitan. Secara administratif, wilayah ini meliputi 5 Desa dan 2 Kelurahan dengan total populasi sekitar 35.000 jiwa. Batas wilayah sebelah utara berbatasan dengan Kecamatan Maju, sebelah selatan dengan Sungai Besar, sebelah timur dengan Kabupaten Tetangga, dan sebelah barat dengan Kecamatan Jaya.".to_string(),
        image_url: "https://images.unsplash.com/photo-1569336415962-a4bd9f69cd83?auto=format&fit=crop&q=80&w=1000&h=600".to_string(),
    }
}

pub fn default_clusters() -> Vec<Cluster> {
    let cluster = |id: &str, name: &str, description: &str, services: &[&str], icon_name: &str| {
        Cluster {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            services: services.iter().map(|s| s.to_string()).collect(),
            icon_name: icon_name.to_string(),
        }
    };
    vec![
        cluster(
            "1",
            "Klaster 1: Manajemen",
            "Menangani ketatausahaan, kepegawaian, dan manajemen mutu puskesmas.",
            &[
                "Manajemen Puskesmas",
                "Ketatausahaan & Kepegawaian",
                "Manajemen Keuangan",
                "Sistem Informasi Puskesmas",
            ],
            "FileText",
        ),
        cluster(
            "2",
            "Klaster 2: Ibu & Anak",
            "Pelayanan kesehatan komprehensif untuk ibu, anak, dan remaja.",
            &[
                "Ibu Hamil, Bersalin & Nifas",
                "Bayi & Balita (MTBS)",
                "Anak Usia Sekolah & Remaja (PKPR)",
                "Imunisasi",
            ],
            "Baby",
        ),
        cluster(
            "3",
            "Klaster 3: Usia Dewasa & Lansia",
            "Skrining dan pengobatan penyakit menular & tidak menular serta kesehatan lansia.",
            &[
                "Kesehatan Usia Produktif",
                "Kesehatan Lansia",
                "Skrining PTM (Penyakit Tidak Menular)",
                "Pelayanan Jiwa",
                "Kesehatan Gigi & Mulut",
            ],
            "Users",
        ),
        cluster(
            "4",
            "Klaster 4: Penanggulangan Penyakit",
            "Upaya pencegahan penyakit menular dan penyehatan lingkungan.",
            &[
                "Pencegahan & Pengendalian Penyakit (P2P)",
                "Penyehatan Lingkungan (Kesling)",
                "Surveilans Epidemiologi",
            ],
            "Shield",
        ),
        cluster(
            "5",
            "Lintas Klaster",
            "Layanan penunjang medis dan kegawatdaruratan.",
            &["Unit Gawat Darurat (UGD)", "Rawat Inap", "Laboratorium", "Kefarmasian"],
            "LayoutGrid",
        ),
    ]
}

pub fn default_cluster_achievements() -> Vec<AchievementRecord> {
    // Konstruktor ringkas: field opsional diisi lewat Option
    #[allow(clippy::too_many_arguments)]
    fn record(
        id: &str,
        cluster_id: &str,
        service_name: Option<&str>,
        activity_name: Option<&str>,
        indicator: &str,
        target: f64,
        realization: f64,
        year: &str,
        month: &str,
        problems: Option<&str>,
        action_plan: Option<&str>,
    ) -> AchievementRecord {
        AchievementRecord {
            id: id.to_string(),
            cluster_id: cluster_id.to_string(),
            service_name: service_name.map(str::to_string),
            activity_name: activity_name.map(str::to_string),
            indicator: indicator.to_string(),
            target,
            realization,
            unit: "%".to_string(),
            year: year.to_string(),
            month: month.to_string(),
            problems: problems.map(str::to_string),
            action_plan: action_plan.map(str::to_string),
        }
    }

    vec![
        // Januari 2024
        record(
            "1",
            "2",
            Some("Ibu Hamil, Bersalin & Nifas"),
            Some("Pemeriksaan kehamilan rutin (ANC Terpadu)"),
            "Kunjungan K1",
            100.0,
            98.0,
            "2024",
            "Januari",
            Some("Beberapa ibu hamil masih enggan periksa dini"),
            Some("Penyuluhan door-to-door oleh kader"),
        ),
        record(
            "2", "2", Some("Imunisasi"), Some("Imunisasi"), "IDL", 95.0, 92.0, "2024", "Januari",
            None, None,
        ),
        record(
            "3",
            "3",
            Some("Kesehatan Usia Produktif"),
            Some("Skrining PTM (Penyakit Tidak Menular)"),
            "Skrining PTM",
            100.0,
            85.0,
            "2024",
            "Januari",
            Some("Kurangnya partisipasi warga bekerja"),
            Some("Jadwal skrining di akhir pekan"),
        ),
        record(
            "4", "4", Some("Penyehatan Lingkungan (Kesling)"), None, "Bebas Jentik", 100.0, 80.0,
            "2024", "Januari", None, None,
        ),
        // Februari 2024
        record(
            "5",
            "2",
            Some("Ibu Hamil, Bersalin & Nifas"),
            Some("Pemeriksaan kehamilan rutin (ANC Terpadu)"),
            "Kunjungan K1",
            100.0,
            99.0,
            "2024",
            "Februari",
            None,
            None,
        ),
        record(
            "6", "2", Some("Imunisasi"), None, "IDL", 95.0, 94.0, "2024", "Februari", None, None,
        ),
        record(
            "7", "3", Some("Kesehatan Usia Produktif"), None, "Skrining PTM", 100.0, 88.0, "2024",
            "Februari", None, None,
        ),
        record(
            "8", "4", Some("Penyehatan Lingkungan (Kesling)"), None, "Bebas Jentik", 100.0, 82.0,
            "2024", "Februari", None, None,
        ),
        // Maret 2024
        record(
            "9", "2", Some("Ibu Hamil, Bersalin & Nifas"), None, "Kunjungan K1", 100.0, 95.0,
            "2024", "Maret", None, None,
        ),
        record(
            "10", "3", Some("Kesehatan Usia Produktif"), None, "Skrining PTM", 100.0, 90.0, "2024",
            "Maret", None, None,
        ),
        record(
            "11", "4", Some("Penyehatan Lingkungan (Kesling)"), None, "Bebas Jentik", 100.0, 88.0,
            "2024", "Maret", None, None,
        ),
        // April 2024
        record(
            "12", "2", Some("Ibu Hamil, Bersalin & Nifas"), None, "Kunjungan K1", 100.0, 92.0,
            "2024", "April", None, None,
        ),
        record(
            "13", "3", Some("Kesehatan Usia Produktif"), None, "Skrining PTM", 100.0, 92.0, "2024",
            "April", None, None,
        ),
        record(
            "14", "4", Some("Penyehatan Lingkungan (Kesling)"), None, "Bebas Jentik", 100.0, 90.0,
            "2024", "April", None, None,
        ),
        // Contoh tahun 2023
        record(
            "15", "2", Some("Ibu Hamil, Bersalin & Nifas"), None, "Kunjungan K1", 100.0, 85.0,
            "2023", "Desember", None, None,
        ),
    ]
}

pub fn default_service_details() -> BTreeMap<String, ServiceDetailContent> {
    let mut details = BTreeMap::new();

    details.insert(
        "Ketatausahaan & Kepegawaian".to_string(),
        ServiceDetailContent {
            title: "Ketatausahaan & Kepegawaian".to_string(),
            description: "Unit Tata Usaha bertanggung jawab atas penyelenggaraan administrasi umum, administrasi kepegawaian, dan perencanaan yang mendukung kelancaran operasional seluruh pelayanan di Puskesmas. Layanan ini menjadi tulang punggung manajemen internal puskesmas.".to_string(),
            activities: vec![
                "Pengelolaan surat masuk dan surat keluar".to_string(),
                "Administrasi data kepegawaian (Kenaikan Pangkat, Gaji Berkala, Cuti)".to_string(),
                "Pengelolaan arsip dan dokumen dinas".to_string(),
                "Penyusunan perencanaan tingkat puskesmas (PTP)".to_string(),
                "Pelayanan administrasi tamu dan rapat dinas".to_string(),
            ],
            image_url: "https://images.unsplash.com/photo-1554224155-8d04cb21cd6c?auto=format&fit=crop&q=80&w=1000&h=600".to_string(),
        },
    );

    details.insert(
        "Ibu Hamil, Bersalin & Nifas".to_string(),
        ServiceDetailContent {
            title: "Ibu Hamil, Bersalin & Nifas".to_string(),
            description: "Pelayanan komprehensif yang ditujukan untuk menjaga kesehatan ibu mulai dari masa kehamilan, proses persalinan yang aman, hingga masa nifas. Kami berkomitmen menurunkan Angka Kematian Ibu (AKI) melalui pemantauan intensif.".to_string(),
            activities: vec![
                "Pemeriksaan kehamilan rutin (ANC Terpadu)".to_string(),
                "Kelas Ibu Hamil".to_string(),
                "Pelayanan persalinan 24 jam".to_string(),
                "Kunjungan nifas dan neonatus".to_string(),
                "Konseling KB pasca persalinan".to_string(),
            ],
            image_url: "https://images.unsplash.com/photo-1555252333-9f8e92e65df9?auto=format&fit=crop&q=80&w=1000&h=600".to_string(),
        },
    );

    // Templat bawaan untuk layanan tanpa konten khusus
    details.insert(
        DEFAULT_DETAIL_KEY.to_string(),
        ServiceDetailContent {
            title: "Detail Layanan".to_string(),
            description: "Informasi detail mengenai layanan ini sedang dalam proses pembaruan. Silakan hubungi petugas kami untuk informasi lebih lanjut mengenai prosedur dan jadwal pelayanan.".to_string(),
            activities: vec![
                "Pelayanan sesuai standar operasional prosedur".to_string(),
                "Konsultasi dengan tenaga medis profesional".to_string(),
                "Pencatatan rekam medis digital".to_string(),
            ],
            image_url: "https://images.unsplash.com/photo-1505751172876-fa1923c5c528?auto=format&fit=crop&q=80&w=1000&h=600".to_string(),
        },
    );

    details
}

// ==========================================
// Agregat kunjungan & penyakit (input analisis AI)
// ==========================================

pub fn default_visit_stats() -> Vec<VisitRecord> {
    let visit = |month: &str, visits: u32, bpjs: u32, umum: u32| VisitRecord {
        month: month.to_string(),
        visits,
        bpjs,
        umum,
    };
    vec![
        visit("Jan", 1200, 850, 350),
        visit("Feb", 1150, 800, 350),
        visit("Mar", 1300, 950, 350),
        visit("Apr", 1450, 1100, 350),
        visit("Mei", 1400, 1050, 350),
        visit("Jun", 1600, 1200, 400),
    ]
}

pub fn default_disease_stats() -> Vec<DiseaseRecord> {
    let disease = |name: &str, cases: u32, trend: Trend| DiseaseRecord {
        name: name.to_string(),
        cases,
        trend,
    };
    vec![
        disease("ISPA", 450, Trend::Up),
        disease("Hipertensi", 320, Trend::Stable),
        disease("Diabetes Melitus", 180, Trend::Up),
        disease("Diare", 150, Trend::Down),
        disease("Gastritis", 120, Trend::Stable),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{available_years, FilterSelection};

    #[test]
    fn test_dataset_contoh_lengkap() {
        assert_eq!(default_clusters().len(), 5);
        assert_eq!(default_cluster_achievements().len(), 15);
        assert_eq!(default_services().len(), 4);
        assert_eq!(default_employees().len(), 4);
        assert_eq!(default_reports().len(), 6);
        assert_eq!(default_missions().len(), 3);
        assert_eq!(default_visit_stats().len(), 6);
        assert_eq!(default_disease_stats().len(), 5);
    }

    #[test]
    fn test_tahun_contoh() {
        let records = default_cluster_achievements();
        assert_eq!(available_years(&records), vec!["2024".to_string(), "2023".to_string()]);
        assert_eq!(FilterSelection::new(&records).year, "2024");
    }

    #[test]
    fn test_password_bawaan_sudah_di_hash() {
        let users = default_users();
        assert!(crate::auth::password::is_hashed(&users[0].password));
        assert!(crate::auth::verify_password("admin123", &users[0].password));
    }
}
