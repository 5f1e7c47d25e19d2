//! Presentation adapter seam
//!
//! The engine knows nothing about pixels or terminals. A front end implements
//! [`Renderer`] and drives the game through a [`Session`], which turns input
//! tokens into turns and forwards the resulting grid.

pub mod session;
pub mod text;

pub use session::{InputOutcome, Session};
pub use text::TextRenderer;

use crate::sim::Grid;

/// Draws engine state; implemented by front ends
pub trait Renderer {
    type Error;

    /// Draw the current grid
    fn render(&mut self, grid: &Grid) -> Result<(), Self::Error>;

    /// Called once when the game ends, with the final grid
    fn on_game_over(&mut self, grid: &Grid) -> Result<(), Self::Error>;
}
