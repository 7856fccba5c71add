// src/config/settings.rs

use log::{debug, warn};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Optional override file, looked up in the working directory.
const ENV_FILE: &str = ".env";

const DEFAULT_PROJECT_NAME: &str = "AI Security Assistant";
const DEFAULT_API_V1_STR: &str = "/api/v1";
const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";
const DEFAULT_LLM_MODEL_NAME: &str = "mistral:latest";
const DEFAULT_NVD_API_KEY: &str = "YOUR_NVD_API_KEY_HERE";
const DEFAULT_BACKEND_BASE_URL: &str = "http://localhost:8000";

/// Process-wide configuration.
///
/// Built once in `main` and handed to the API client and the dashboard
/// behind an `Arc`; nothing mutates it afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
	pub project_name: String,
	pub api_v1_str: String,
	pub sqlite_db_path: PathBuf,
	pub chromadb_cache_path: PathBuf,
	pub ollama_base_url: String,
	pub llm_model_name: String,
	pub nvd_api_key: String,
	pub backend_base_url: String,
}

impl Default for Settings {
	fn default() -> Self {
		let db_dir = base_dir().join("backend").join("db");
		Self {
			project_name: DEFAULT_PROJECT_NAME.to_string(),
			api_v1_str: DEFAULT_API_V1_STR.to_string(),
			sqlite_db_path: db_dir.join("sqlite.db"),
			chromadb_cache_path: db_dir.join("chromedb_cache"),
			ollama_base_url: DEFAULT_OLLAMA_BASE_URL.to_string(),
			llm_model_name: DEFAULT_LLM_MODEL_NAME.to_string(),
			nvd_api_key: DEFAULT_NVD_API_KEY.to_string(),
			backend_base_url: DEFAULT_BACKEND_BASE_URL.to_string(),
		}
	}
}

impl fmt::Debug for Settings {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Settings")
			.field("project_name", &self.project_name)
			.field("api_v1_str", &self.api_v1_str)
			.field("sqlite_db_path", &self.sqlite_db_path)
			.field("chromadb_cache_path", &self.chromadb_cache_path)
			.field("ollama_base_url", &self.ollama_base_url)
			.field("llm_model_name", &self.llm_model_name)
			.field("nvd_api_key", &"<redacted>")
			.field("backend_base_url", &self.backend_base_url)
			.finish()
	}
}

impl Settings {
	/// Defaults, then `.env`, then the process environment.
	pub fn load() -> Self {
		let process_env = std::env::vars_os()
			.filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)));
		Self::load_from(Path::new(ENV_FILE), process_env)
	}

	/// Same layering as [`Settings::load`] with the sources supplied by the caller.
	pub fn load_from<I>(env_file: &Path, process_env: I) -> Self
	where
		I: IntoIterator<Item = (String, String)>,
	{
		let mut overrides = read_env_file(env_file);
		overrides.extend(
			process_env
				.into_iter()
				.map(|(key, value)| (key.to_uppercase(), value)),
		);
		Self::from_lookup(|key| overrides.get(key).cloned())
	}

	/// Builds settings from a key lookup. Keys are queried in upper case;
	/// a missing or blank value keeps the default.
	pub fn from_lookup<F>(lookup: F) -> Self
	where
		F: Fn(&str) -> Option<String>,
	{
		let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
		let defaults = Self::default();

		Self {
			project_name: value("PROJECT_NAME").unwrap_or(defaults.project_name),
			api_v1_str: value("API_V1_STR").unwrap_or(defaults.api_v1_str),
			sqlite_db_path: value("SQLITE_DB_PATH")
				.map(PathBuf::from)
				.unwrap_or(defaults.sqlite_db_path),
			chromadb_cache_path: value("CHROMADB_CACHE_PATH")
				.map(PathBuf::from)
				.unwrap_or(defaults.chromadb_cache_path),
			ollama_base_url: value("OLLAMA_BASE_URL").unwrap_or(defaults.ollama_base_url),
			llm_model_name: value("LLM_MODEL_NAME").unwrap_or(defaults.llm_model_name),
			nvd_api_key: value("NVD_API_KEY").unwrap_or(defaults.nvd_api_key),
			backend_base_url: value("BACKEND_BASE_URL").unwrap_or(defaults.backend_base_url),
		}
	}

	/// Full URL of the analysis endpoint.
	pub fn analyze_url(&self) -> String {
		let base = self.backend_base_url.trim_end_matches('/');
		let prefix = self.api_v1_str.trim_end_matches('/');
		if prefix.is_empty() || prefix.starts_with('/') {
			format!("{}{}/analyze", base, prefix)
		} else {
			format!("{}/{}/analyze", base, prefix)
		}
	}

	pub fn has_default_nvd_api_key(&self) -> bool {
		self.nvd_api_key == DEFAULT_NVD_API_KEY
	}
}

fn base_dir() -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn read_env_file(path: &Path) -> HashMap<String, String> {
	let mut entries = HashMap::new();
	if !path.exists() {
		debug!("No {} file found, using defaults and environment", path.display());
		return entries;
	}

	match dotenvy::from_path_iter(path) {
		Ok(iter) => {
			for item in iter {
				match item {
					Ok((key, value)) => {
						entries.insert(key.to_uppercase(), value);
					}
					Err(e) => warn!("Skipping malformed line in {}: {}", path.display(), e),
				}
			}
		}
		Err(e) => warn!("Failed to read {}: {}", path.display(), e),
	}

	entries
}
