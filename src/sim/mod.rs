//! Grid engine
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Seeded RNG only
//! - Lines are resolved functionally and written back wholesale
//! - Stable, row-major iteration order

pub mod cell;
pub mod direction;
pub mod engine;
pub mod grid;
pub mod line;

pub use cell::{Cell, Position, TileId, TileIds};
pub use direction::Direction;
pub use engine::{Engine, MoveOutcome, SpawnedTile, TurnOutcome};
pub use grid::Grid;
pub use line::{Line, ResolvedLine, line_values, resolve_line};
