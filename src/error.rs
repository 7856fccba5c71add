// src/error.rs

use thiserror::Error;

/// Fallback shown when an error response carries no usable `detail`.
pub const UNKNOWN_ERROR_DETAIL: &str = "Bilinmeyen Hata";

/// Failures of a single analysis call. Every variant ends the call; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
	#[error("Bağlantı Hatası: Backend API ({url}) çalışmıyor. Lütfen analiz servisini başlattığınızdan emin olun.")]
	Connection { url: String },

	#[error("API Hatası (HTTP {status}): Backend'de bir hata oluştu. Detay: {detail}")]
	Http { status: u16, detail: String },

	#[error("Beklenmeyen Hata: {message}")]
	Unexpected { message: String },
}

/// Input rejected before any request is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
	#[error("Lütfen analiz edilecek bir gereksinim metni girin.")]
	EmptyRequirement,
}
