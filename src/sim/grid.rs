//! The 4x4 cell matrix
//!
//! Row-major, `cells[y][x]`. Exactly `GRID_SIZE * GRID_SIZE` cells are always
//! present; empty slots hold `Cell::EMPTY`.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::cell::{Cell, Position, TileIds, validate_value};
use super::line::Line;
use crate::consts::GRID_SIZE;
use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// All-empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from raw values, assigning a fresh identity to every tile
    pub fn from_values(
        values: [[u32; GRID_SIZE]; GRID_SIZE],
        ids: &mut TileIds,
    ) -> Result<Self, EngineError> {
        let mut grid = Self::new();
        for (y, row) in values.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                if validate_value(value)? > 0 {
                    grid.cells[y][x] = Cell::tile(value, ids.next_id());
                }
            }
        }
        Ok(grid)
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.y][pos.x]
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.y][pos.x] = cell;
    }

    pub fn rows(&self) -> &[[Cell; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    pub fn row(&self, y: usize) -> Line {
        self.cells[y]
    }

    pub fn set_row(&mut self, y: usize, line: Line) {
        self.cells[y] = line;
    }

    pub fn column(&self, x: usize) -> Line {
        std::array::from_fn(|y| self.cells[y][x])
    }

    pub fn set_column(&mut self, x: usize, line: Line) {
        for (y, cell) in line.into_iter().enumerate() {
            self.cells[y][x] = cell;
        }
    }

    /// Positions of all empty cells, row-major (y outer, x inner)
    pub fn empty_cells(&self) -> Vec<Position> {
        let mut empty = Vec::new();
        for (y, row) in self.cells.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if cell.is_empty() {
                    empty.push(Position::new(x, y));
                }
            }
        }
        empty
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }

    /// Values only, dropping identities
    pub fn values(&self) -> [[u32; GRID_SIZE]; GRID_SIZE] {
        self.cells.map(|row| row.map(|c| c.value))
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| !c.is_empty()).count()
    }

    pub fn max_value(&self) -> u32 {
        self.cells.iter().flatten().map(|c| c.value).max().unwrap_or(0)
    }

    /// Whether any two orthogonal neighbours hold the same non-zero value
    pub fn has_adjacent_pair(&self) -> bool {
        (0..GRID_SIZE).any(|i| {
            let row = self.row(i);
            let col = self.column(i);
            row.windows(2)
                .chain(col.windows(2))
                .any(|w| !w[0].is_empty() && w[0].value == w[1].value)
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_value().max(1).to_string().len().max(4);
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|c| {
                    if c.is_empty() {
                        format!("{:>width$}", ".")
                    } else {
                        format!("{:>width$}", c.value)
                    }
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
