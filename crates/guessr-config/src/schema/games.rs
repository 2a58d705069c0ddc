//! Game selection configuration types.

use guessr_game::GameVariant;
use serde::{Deserialize, Serialize};

/// Which game to play and how its secret is drawn.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// `classic` (unbounded) or `challenge` (8 tries).
    pub variant: GameVariant,
    /// Fixed RNG seed. Unset means a fresh random secret every game.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}
