//! System configuration types: logging.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing_subscriber::EnvFilter` directive covering every guessr crate.
    pub fn directive(self) -> &'static str {
        match self {
            Self::Debug => "guessr=debug",
            Self::Info => "guessr=info",
            Self::Warning => "guessr=warn",
            Self::Error => "guessr=error",
        }
    }
}

/// Logging configuration. Logs go to stderr; the default keeps them out of
/// the way of the game text on stdout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
