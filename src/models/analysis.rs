// src/models/analysis.rs

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Frameworks every request asks the backend to map against, in wire order.
pub const STANDARD_FRAMEWORKS: [&str; 5] = ["OWASP", "MITRE", "NIST", "ISO", "IEC 62443"];

/// Marker that opens the explanation segment inside a framework rationale.
const RATIONALE_MARKER: &str = "(Neden:";

pub const DEFAULT_STATUS: AnalysisStatus = AnalysisStatus::Error;
pub const DEFAULT_MODE_USED: &str = "N/A";
pub const DEFAULT_PROCESSING_TIME_MS: u64 = 0;
pub const DEFAULT_RISK_LEVEL: &str = "Bilinmiyor";
pub const DEFAULT_SUMMARY: &str = "Detaylı özet alınamadı.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
	Auto,
	Fast,
	#[default]
	Ai,
}

impl AnalysisMode {
	pub const ALL: [AnalysisMode; 3] = [AnalysisMode::Auto, AnalysisMode::Fast, AnalysisMode::Ai];

	pub fn as_str(&self) -> &'static str {
		match self {
			AnalysisMode::Auto => "auto",
			AnalysisMode::Fast => "fast",
			AnalysisMode::Ai => "ai",
		}
	}

	/// Label shown next to the radio button.
	pub fn label(&self) -> &'static str {
		match self {
			AnalysisMode::Auto => "Otomatik Seçim",
			AnalysisMode::Fast => "Hızlı Mod",
			AnalysisMode::Ai => "Yapay Zeka (Derin)",
		}
	}

	/// Fast mode is rule based and never reaches the LLM.
	pub fn uses_llm(&self) -> bool {
		!matches!(self, AnalysisMode::Fast)
	}
}

impl fmt::Display for AnalysisMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.as_str())
	}
}

/// Body of `POST {prefix}/analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisRequest {
	pub requirement_text: String,
	pub analysis_mode: AnalysisMode,
	pub standard_frameworks: Vec<String>,
}

impl AnalysisRequest {
	pub fn new(requirement_text: impl Into<String>, analysis_mode: AnalysisMode) -> Self {
		Self {
			requirement_text: requirement_text.into(),
			analysis_mode,
			standard_frameworks: STANDARD_FRAMEWORKS.iter().map(|f| f.to_string()).collect(),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisStatus {
	Success,
	Error,
}

impl AnalysisStatus {
	fn from_raw(raw: &str) -> Self {
		if raw == "success" {
			AnalysisStatus::Success
		} else {
			AnalysisStatus::Error
		}
	}
}

/// One matched framework with its rationale split into label and explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameworkMatch {
	pub framework: String,
	pub label: String,
	pub explanation: String,
}

impl FrameworkMatch {
	/// Splits `"label (Neden: explanation)"` on the first marker. Without a
	/// marker the whole rationale is the label and the explanation is empty.
	pub fn split(framework: impl Into<String>, rationale: &str) -> Self {
		let (label, explanation) = match rationale.split_once(RATIONALE_MARKER) {
			Some((label, rest)) => {
				let rest = rest.trim();
				let rest = rest.strip_suffix(')').unwrap_or(rest);
				(label.trim(), rest.trim())
			}
			None => (rationale.trim(), ""),
		};

		Self {
			framework: framework.into(),
			label: label.to_string(),
			explanation: explanation.to_string(),
		}
	}

	pub fn has_explanation(&self) -> bool {
		!self.explanation.is_empty()
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suggestions {
	pub short_term: Vec<String>,
	pub long_term: Vec<String>,
}

/// Dashboard view of a backend analysis.
///
/// Built with [`AnalysisResponse::from_value`], which never fails: every field
/// that is missing, `null` or of the wrong type takes its documented default.
///
/// | field | default |
/// |---|---|
/// | `status` | [`AnalysisStatus::Error`] |
/// | `mode_used` | `"N/A"` |
/// | `processing_time_ms` | `0` |
/// | `risk_level` | `"Bilinmiyor"` |
/// | `summary` | `"Detaylı özet alınamadı."` |
/// | `cve_id_matches`, `framework_matches`, `suggestions.*` | empty |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResponse {
	pub status: AnalysisStatus,
	pub mode_used: String,
	pub processing_time_ms: u64,
	pub risk_level: String,
	pub summary: String,
	pub cve_id_matches: Vec<String>,
	pub framework_matches: Vec<FrameworkMatch>,
	pub suggestions: Suggestions,
}

impl Default for AnalysisResponse {
	fn default() -> Self {
		Self {
			status: DEFAULT_STATUS,
			mode_used: DEFAULT_MODE_USED.to_string(),
			processing_time_ms: DEFAULT_PROCESSING_TIME_MS,
			risk_level: DEFAULT_RISK_LEVEL.to_string(),
			summary: DEFAULT_SUMMARY.to_string(),
			cve_id_matches: Vec::new(),
			framework_matches: Vec::new(),
			suggestions: Suggestions::default(),
		}
	}
}

impl AnalysisResponse {
	pub fn from_value(data: &Value) -> Self {
		let Some(obj) = data.as_object() else {
			return Self::default();
		};
		let defaults = Self::default();

		let suggestions = obj
			.get("security_suggestions")
			.and_then(Value::as_object)
			.map(|s| Suggestions {
				short_term: string_list(s, "short_term"),
				long_term: string_list(s, "long_term"),
			})
			.unwrap_or_default();

		Self {
			status: obj
				.get("status")
				.and_then(Value::as_str)
				.map(AnalysisStatus::from_raw)
				.unwrap_or(defaults.status),
			mode_used: string_field(obj, "mode_used").unwrap_or(defaults.mode_used),
			processing_time_ms: obj
				.get("processing_time_ms")
				.and_then(milliseconds)
				.unwrap_or(defaults.processing_time_ms),
			risk_level: string_field(obj, "risk_level").unwrap_or(defaults.risk_level),
			summary: string_field(obj, "summary").unwrap_or(defaults.summary),
			cve_id_matches: string_list(obj, "cve_id_matches"),
			framework_matches: obj
				.get("framework_matches")
				.and_then(Value::as_object)
				.map(framework_matches)
				.unwrap_or_default(),
			suggestions,
		}
	}

	pub fn is_success(&self) -> bool {
		self.status == AnalysisStatus::Success
	}
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
	obj.get(key).and_then(Value::as_str).map(str::to_string)
}

fn string_list(obj: &Map<String, Value>, key: &str) -> Vec<String> {
	obj.get(key)
		.and_then(Value::as_array)
		.map(|items| {
			items
				.iter()
				.filter_map(Value::as_str)
				.map(str::to_string)
				.collect()
		})
		.unwrap_or_default()
}

fn milliseconds(value: &Value) -> Option<u64> {
	value
		.as_u64()
		.or_else(|| value.as_f64().map(|ms| if ms > 0.0 { ms as u64 } else { 0 }))
}

fn framework_matches(obj: &Map<String, Value>) -> Vec<FrameworkMatch> {
	obj.iter()
		.map(|(framework, rationale)| match rationale {
			Value::String(text) => FrameworkMatch::split(framework.as_str(), text),
			other => FrameworkMatch::split(framework.as_str(), &other.to_string()),
		})
		.collect()
}
