//! Configuration loader for MindCare.
//!
//! Reads `mindcare.toml` from the data directory (`~/.mindcare/` by default)
//! and deserializes it into [`MindcareConfig`]. The default location falls
//! back to defaults when the file is missing or malformed; an explicitly
//! requested file must exist and parse.

use std::path::{Path, PathBuf};

use mindcare_types::config::MindcareConfig;
use mindcare_types::error::ConfigError;

/// File name looked up inside the data directory.
pub const CONFIG_FILE_NAME: &str = "mindcare.toml";

/// Resolve the data directory.
///
/// Priority: `MINDCARE_DATA_DIR`, then `~/.mindcare`, then `./.mindcare`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("MINDCARE_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".mindcare");
    }

    PathBuf::from(".mindcare")
}

/// Default config file path inside `data_dir`.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE_NAME)
}

/// Read and parse a config file, surfacing every failure.
pub async fn try_load_config(path: &Path) -> Result<MindcareConfig, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    toml::from_str::<MindcareConfig>(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Load `{data_dir}/mindcare.toml`, falling back to defaults.
///
/// - Missing file: defaults, logged at debug.
/// - Unreadable or malformed file: defaults, logged as a warning.
pub async fn load_config(data_dir: &Path) -> MindcareConfig {
    let path = config_path(data_dir);

    match tokio::fs::try_exists(&path).await {
        Ok(true) => {}
        Ok(false) => {
            tracing::debug!("No {CONFIG_FILE_NAME} found at {}, using defaults", path.display());
            return MindcareConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to stat {}: {err}, using defaults", path.display());
            return MindcareConfig::default();
        }
    }

    match try_load_config(&path).await {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("{err}, using defaults");
            MindcareConfig::default()
        }
    }
}
