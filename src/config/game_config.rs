// src/config/game_config.rs
//! Per-game settings handed over by the host when a new game starts.

use serde::{Deserialize, Serialize};

/// Settings for one deal.
///
/// The host may pass this as JSON (`{"seed": 42}`); every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed shuffle seed for a reproducible deal. `None` draws from the OS.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Parses a JSON config; an empty string means defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json)
    }
}
