//! Cells, tile identities and grid positions

use serde::{Deserialize, Serialize};

use crate::consts::MAX_TILE_VALUE;
use crate::error::EngineError;

/// Render identity of a tile
///
/// Handed out by the engine from a monotonically increasing counter, on spawn
/// and on merge. A renderer can key its visual elements on it to animate a
/// tile sliding across turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

/// Allocator for tile identities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileIds {
    next: u32,
}

impl Default for TileIds {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl TileIds {
    /// Allocate a fresh identity
    pub fn next_id(&mut self) -> TileId {
        let id = TileId(self.next);
        self.next += 1;
        id
    }
}

/// One grid slot
///
/// `id` is present exactly when `value > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub value: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TileId>,
}

impl Cell {
    /// An empty slot (value 0, no identity)
    pub const EMPTY: Cell = Cell { value: 0, id: None };

    /// A tile with the given value and identity
    pub fn tile(value: u32, id: TileId) -> Self {
        Self {
            value,
            id: Some(id),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value == 0
    }
}

/// Check that a value can sit on the grid (0 or a power of two in 2..=MAX_TILE_VALUE)
pub fn validate_value(value: u32) -> Result<u32, EngineError> {
    if value == 0 || ((2..=MAX_TILE_VALUE).contains(&value) && value.is_power_of_two()) {
        Ok(value)
    } else {
        Err(EngineError::InvalidTileValue(value))
    }
}

/// A grid coordinate, `x` left-to-right and `y` top-to-bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}
