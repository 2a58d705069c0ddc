//! Core TOML config loading: read from path or platform default.
//!
//! Nothing here logs. The binary loads config before its subscriber exists,
//! so callers get a [`LoadedConfig`] back and report where it came from.

use crate::schema::GuessrConfig;
use guessr_common::ConfigError;
use std::path::{Path, PathBuf};

use super::paths::{create_default_config, default_config_path};

/// Whether a config was read from disk or freshly written from the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOrigin {
    Existing,
    Created,
}

/// A config together with the file it was resolved against.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: GuessrConfig,
    pub path: PathBuf,
    pub origin: ConfigOrigin,
}

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
pub fn load_from_path(path: &Path) -> Result<GuessrConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Load `path`, writing the commented template there first if it is missing.
///
/// An existing file is never overwritten, even when it fails to parse.
pub fn load_or_create(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let (config, origin) = match load_from_path(path) {
        Ok(config) => (config, ConfigOrigin::Existing),
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(path)?;
            (GuessrConfig::default(), ConfigOrigin::Created)
        }
        Err(e) => return Err(e),
    };

    Ok(LoadedConfig {
        config,
        path: path.to_path_buf(),
        origin,
    })
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/guessr/config.toml`
/// On Linux: `~/.config/guessr/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<GuessrConfig, ConfigError> {
    let path = default_config_path()?;
    load_or_create(&path).map(|loaded| loaded.config)
}
