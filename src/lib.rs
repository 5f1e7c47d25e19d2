//! Slide Merge - a 4x4 sliding-tile merge puzzle (2048-style)
//!
//! Core modules:
//! - `sim`: Grid engine (line resolution, moves, spawning, game over)
//! - `platform`: Presentation adapter seam (renderer trait, input session)
//! - `settings`: Spawn difficulty and engine configuration
//! - `error`: Engine and settings error types

pub mod error;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::{EngineError, SettingsError};
pub use settings::{Difficulty, Settings};
pub use sim::{Direction, Engine, Grid, TurnOutcome};

/// Game configuration constants
pub mod consts {
    /// Grid edge length (the grid is GRID_SIZE x GRID_SIZE)
    pub const GRID_SIZE: usize = 4;

    /// Tiles placed before the first render
    pub const INITIAL_TILES: usize = 2;
    pub const INITIAL_TILE_VALUE: u32 = 2;

    /// Largest value accepted from a layout or a forced spawn. Sixteen tiles
    /// of this size sum to 2^31, so no sequence of merges can overflow `u32`.
    pub const MAX_TILE_VALUE: u32 = 1 << 27;

    /// Chance of a spawned tile being a 4
    pub const EASY_FOUR_PROBABILITY: f64 = 0.10;
    pub const HARD_FOUR_PROBABILITY: f64 = 0.25;
}
