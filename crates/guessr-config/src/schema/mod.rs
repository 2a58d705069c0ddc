//! Configuration schema types for guessr.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod games;
mod system;

pub use games::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for guessr.
///
/// Everything is optional; an empty file plays the classic game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct GuessrConfig {
    pub game: GameConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
