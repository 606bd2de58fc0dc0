use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use crate::schemas::AppState;

/// Resolved runtime configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Directory holding the CSV sources and the prediction backup folder
    pub data_dir: PathBuf,
    /// Address the HTTP server binds to
    pub bind_address: String,
}

/// Initialize application state from a resolved configuration.
pub fn initialize_app_state(config: AppConfig) -> Result<AppState> {
    if !config.data_dir.is_dir() {
        anyhow::bail!("data directory not found: {}", config.data_dir.display());
    }
    info!("Using data directory: {}", config.data_dir.display());

    Ok(AppState { config })
}
