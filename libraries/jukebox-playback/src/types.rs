//! Core types for playback management

use serde::{Deserialize, Serialize};
use std::fmt;

/// Player state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerState {
    /// Nothing playing
    #[default]
    Stopped,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PlayerState::Stopped => "STOPPED",
            PlayerState::Playing => "PLAYING",
            PlayerState::Paused => "PAUSED",
        };
        f.write_str(label)
    }
}

/// Configuration for the player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Seed for the shuffle RNG (default: seeded from entropy)
    pub shuffle_seed: Option<u64>,
}
