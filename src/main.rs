// src/main.rs

mod config;
mod error;
mod gui;
mod models;
mod utils;

use anyhow::{Context, Result};
use config::settings::Settings;
use log::{debug, info, warn};
use std::sync::Arc;
use utils::api_client::AnalysisApiClient;

fn main() -> Result<()> {
	utils::logger::init();

	let settings = Arc::new(Settings::load());
	info!("Starting {}", settings.project_name);
	debug!("Loaded settings: {:?}", settings);

	if settings.has_default_nvd_api_key() {
		warn!("NVD_API_KEY is not set, the placeholder key is in use");
	}

	let client = AnalysisApiClient::new(&settings)
		.context("Failed to create analysis API client")?;
	info!("Analysis endpoint: {}", client.analyze_url());

	gui::app::run(settings, client)?;

	info!("Dashboard closed");
	Ok(())
}
