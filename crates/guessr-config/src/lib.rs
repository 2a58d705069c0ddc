//! guessr configuration system.
//!
//! TOML-based configuration selecting the game variant and log level.
//! All config sections use defaults so partial (or empty) files work.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use guessr_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;

pub use schema::{GameConfig, GuessrConfig, LogLevel, LoggingConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{ConfigOrigin, LoadedConfig};

use guessr_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path, creating a commented
/// default file there if none exists.
pub fn load_config() -> Result<GuessrConfig, ConfigError> {
    toml_loader::load_default()
}

/// Load config from `path` when given, else from the platform default.
///
/// An explicit path must exist; only the default location gets a template
/// written on first run.
pub fn load_config_from(path: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    match path {
        Some(p) => Ok(LoadedConfig {
            config: toml_loader::load_from_path(p)?,
            path: p.to_path_buf(),
            origin: ConfigOrigin::Existing,
        }),
        None => toml_loader::load_or_create(&toml_loader::default_config_path()?),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &GuessrConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
