use env_logger::{Builder, Env};

/// wgpu and cosmic-text are chatty at `info`; keep the dashboard's own logs readable.
const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn,cosmic_text=warn,iced_wgpu=warn";

pub fn init() {
	Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
		.format_timestamp_millis()
		.format_module_path(true)
		.init();
}
