//! Configuration loading from file system
//!
//! Reads `~/.browser-shell/config.json`. Every failure falls back to defaults.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use super::types::Config;
use crate::error::ShellError;

/// Default location of the config file, with `~` expanded.
pub fn default_config_path() -> PathBuf {
    PathBuf::from(shellexpand::tilde("~/.browser-shell/config.json").as_ref())
}

/// Load configuration from the default path.
pub fn load_config() -> Config {
    load_config_from(&default_config_path())
}

/// Load configuration from `path`.
///
/// Returns `Config::default()` if the file is missing, unreadable or invalid.
#[instrument(name = "load_config", skip_all, fields(path = %path.display()))]
pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        info!("Config file not found, using defaults");
        return Config::default();
    }

    match read_config(path) {
        Ok(config) => {
            info!("Successfully loaded config");
            config
        }
        Err(e) => {
            warn!(error = %e, "Failed to load config, using defaults");
            Config::default()
        }
    }
}

fn read_config(path: &Path) -> Result<Config, ShellError> {
    let contents = fs::read_to_string(path).map_err(|source| ShellError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str::<Config>(contents.trim())
        .map_err(|e| ShellError::Config(format!("{}: {}", path.display(), e)))
}
