//! Move directions and input-token mapping

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Direction of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }

    /// Map an input token (key code, word or letter) to a direction
    ///
    /// Accepts browser key codes (`ArrowUp`), words (`up`), WASD and vi keys.
    /// Unknown tokens yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_lowercase().as_str() {
            "arrowup" | "up" | "w" | "k" => Some(Direction::Up),
            "arrowdown" | "down" | "s" | "j" => Some(Direction::Down),
            "arrowleft" | "left" | "a" | "h" => Some(Direction::Left),
            "arrowright" | "right" | "d" | "l" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Whether lines compact toward their far end (right / bottom)
    pub fn toward_end(&self) -> bool {
        matches!(self, Direction::Down | Direction::Right)
    }

    /// Whether this move resolves rows (as opposed to columns)
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| EngineError::InvalidDirection(s.to_string()))
    }
}
