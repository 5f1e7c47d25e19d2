//! Error types for the grid engine and its configuration

use std::io;

/// Errors surfaced by the grid engine
///
/// None of these are fatal: `GridFull` is the game-over signal and the
/// others describe input the engine refused without touching the grid.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No empty cell left to spawn into
    #[error("grid is full, no empty cell to spawn into")]
    GridFull,
    #[error("unrecognized direction: {0:?}")]
    InvalidDirection(String),
    /// Tile values must be 0 or a power of two >= 2
    #[error("invalid tile value: {0}")]
    InvalidTileValue(u32),
    #[error("invalid settings: {0}")]
    Settings(String),
}

/// Errors from reading or writing a settings file
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed settings json: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] EngineError),
}
