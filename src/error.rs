//! Error types for clickshot

use std::time::Duration;

use thiserror::Error;

/// Errors surfaced by the game core and its configuration layer
#[derive(Debug, Error)]
pub enum GameError {
    #[error("session duration must be positive, got {0:?}")]
    InvalidDuration(Duration),

    #[error("spawn period must be positive, got {0:?}")]
    InvalidSpawnPeriod(Duration),

    #[error("target cap must be at least 1")]
    InvalidTargetCap,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for clickshot operations
pub type Result<T> = std::result::Result<T, GameError>;
