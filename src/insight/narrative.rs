// ==========================================
// Profil Digital Puskesmas - Klien Teks Generatif
// ==========================================
// Memanggil endpoint REST generateContent (Gemini) lewat reqwest.
// Degradasi anggun: tanpa kunci API atau saat panggilan gagal,
// pemanggil menerima pesan siap tampil, bukan error
// ==========================================

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{DiseaseRecord, VisitRecord};
use crate::error::{AppError, AppResult};
use crate::i18n;

/// Model bawaan layanan teks generatif
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Variabel lingkungan pembawa kunci API
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

// ==========================================
// NarrativeEngine - kontrak penyusun narasi
// ==========================================
#[async_trait]
pub trait NarrativeEngine {
    /// Susun "Laporan Eksekutif" dari agregat kunjungan & penyakit.
    ///
    /// Tidak pernah menggagalkan pemanggil: setiap kegagalan
    /// dipetakan menjadi pesan yang layak tampil
    async fn analyze(&self, visits: &[VisitRecord], diseases: &[DiseaseRecord]) -> String;
}

// ==========================================
// Struktur permintaan/jawaban generateContent
// ==========================================

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

// ==========================================
// GeminiClient - implementasi atas REST Gemini
// ==========================================
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    pub fn with_model(api_key: Option<String>, model: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            http,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: model.to_string(),
        }
    }

    /// Kunci API dibaca dari variabel lingkungan GEMINI_API_KEY
    pub fn from_env() -> Self {
        Self::new(std::env::var(API_KEY_ENV).ok())
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Kirim permintaan dan ambil teks kandidat pertama;
    /// Ok(None) bila layanan menjawab tanpa teks
    async fn request_narrative(&self, api_key: &str, prompt: String) -> AppResult<Option<String>> {
        let url = format!("{}/{}:generateContent?key={}", API_BASE, self.model, api_key);
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.7,
                max_output_tokens: 1000,
            },
        };

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::ExternalService(format!(
                "status HTTP {}",
                response.status()
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalService(e.to_string()))?;

        Ok(parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.trim().is_empty()))
    }
}

#[async_trait]
impl NarrativeEngine for GeminiClient {
    async fn analyze(&self, visits: &[VisitRecord], diseases: &[DiseaseRecord]) -> String {
        let Some(api_key) = self.api_key.clone() else {
            return i18n::t("insight.api_key_missing");
        };

        let prompt = build_prompt(visits, diseases);
        match self.request_narrative(&api_key, prompt).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                tracing::warn!("layanan AI menjawab tanpa teks");
                i18n::t("insight.empty_answer")
            }
            Err(e) => {
                tracing::warn!("panggilan layanan AI gagal: {}", e);
                i18n::t("insight.service_error")
            }
        }
    }
}

/// Susun prompt "Laporan Eksekutif" berbahasa Indonesia
fn build_prompt(visits: &[VisitRecord], diseases: &[DiseaseRecord]) -> String {
    let visit_json = serde_json::to_string(visits).unwrap_or_else(|_| "[]".to_string());
    let disease_json = serde_json::to_string(diseases).unwrap_or_else(|_| "[]".to_string());

    format!(
        "Bertindaklah sebagai Konsultan Kesehatan Masyarakat Senior untuk Puskesmas di Indonesia.\n\n\
         Analisis data berikut ini dan berikan \"Laporan Eksekutif\" singkat dalam bahasa Indonesia.\n\n\
         Struktur Laporan:\n\
         1. **Ringkasan Tren**: Apa yang terjadi dengan kunjungan pasien? Apakah ada lonjakan?\n\
         2. **Analisis Penyakit**: Soroti penyakit dengan tren 'up' (naik). Berikan konteks kemungkinan penyebab (misal: ISPA sering naik saat pancaroba).\n\
         3. **Rekomendasi Strategis**: 3 poin tindakan preventif atau promotif yang harus dilakukan kepala Puskesmas minggu ini.\n\n\
         Data:\n\
         Data Kunjungan Pasien (6 bulan terakhir): {}\n\
         Data 5 Penyakit Terbanyak: {}\n\n\
         Gunakan format Markdown yang rapi. Jangan gunakan jargon medis yang terlalu rumit, tapi tetap profesional.",
        visit_json, disease_json
    )
}
