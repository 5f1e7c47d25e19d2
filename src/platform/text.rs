//! Plain-text renderer for terminals and logs

use std::io::{self, Write};

use super::Renderer;
use crate::sim::Grid;

/// Writes the grid as aligned text to any writer
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    type Error = io::Error;

    fn render(&mut self, grid: &Grid) -> io::Result<()> {
        writeln!(self.out, "{grid}")?;
        self.out.flush()
    }

    fn on_game_over(&mut self, grid: &Grid) -> io::Result<()> {
        writeln!(self.out, "Game over! Largest tile: {}", grid.max_value())?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::TileIds;

    #[test]
    fn test_render_and_game_over_text() {
        let mut ids = TileIds::default();
        let grid = Grid::from_values([[2, 4, 0, 0], [0; 4], [0; 4], [0, 0, 0, 64]], &mut ids)
            .unwrap();
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.render(&grid).unwrap();
        renderer.on_game_over(&grid).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "   2    4    .    .");
        assert_eq!(lines[3], "   .    .    .   64");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "Game over! Largest tile: 64");
    }
}
