//! Grid engine: moves, spawns and turns
//!
//! One `turn` is the atomic unit of play: resolve every line for the given
//! direction, then spawn a tile.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::cell::{Cell, Position, TileIds, validate_value};
use super::direction::Direction;
use super::grid::Grid;
use super::line::resolve_line;
use crate::consts::{GRID_SIZE, INITIAL_TILES, INITIAL_TILE_VALUE};
use crate::error::EngineError;
use crate::settings::Settings;

/// What a move did to the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Whether any cell value changed
    pub changed: bool,
    /// Number of pairwise merges across all lines
    pub merges: usize,
}

/// A freshly spawned tile and where it landed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnedTile {
    pub position: Position,
    pub cell: Cell,
}

/// Result of one full turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The move was applied and a tile spawned
    Moved {
        outcome: MoveOutcome,
        spawned: SpawnedTile,
    },
    /// Nothing moved, so nothing spawned
    Unchanged,
    /// No empty cell to spawn into, or no move left
    GameOver { outcome: MoveOutcome },
}

/// Shift every line of `grid` in `direction`, returning the merge count
fn shift_grid(grid: &mut Grid, direction: Direction, ids: &mut TileIds) -> usize {
    let toward_end = direction.toward_end();
    let mut merges = 0;
    for i in 0..GRID_SIZE {
        let resolved = if direction.is_horizontal() {
            let resolved = resolve_line(grid.row(i), toward_end, ids);
            grid.set_row(i, resolved.cells);
            resolved
        } else {
            let resolved = resolve_line(grid.column(i), toward_end, ids);
            grid.set_column(i, resolved.cells);
            resolved
        };
        merges += resolved.merges;
    }
    merges
}

/// Owns the grid, the identity allocator and the spawn RNG
#[derive(Debug, Clone)]
pub struct Engine {
    grid: Grid,
    ids: TileIds,
    rng: Pcg32,
    seed: u64,
    settings: Settings,
}

impl Engine {
    /// Start a game, seeding from `settings.seed` or from entropy
    pub fn new(settings: Settings) -> Result<Self, EngineError> {
        let seed = settings.seed.unwrap_or_else(rand::random);
        Self::with_seed(seed, settings)
    }

    /// Start a game with a fixed seed: empty grid plus two starting tiles
    pub fn with_seed(seed: u64, settings: Settings) -> Result<Self, EngineError> {
        let mut engine = Self::from_grid(Grid::new(), TileIds::default(), seed, settings)?;
        for _ in 0..INITIAL_TILES {
            engine.spawn_tile(Some(INITIAL_TILE_VALUE))?;
        }
        log::info!("New game (seed {seed})");
        Ok(engine)
    }

    /// Start from a given layout without spawning anything
    pub fn from_values(
        values: [[u32; GRID_SIZE]; GRID_SIZE],
        seed: u64,
        settings: Settings,
    ) -> Result<Self, EngineError> {
        let mut ids = TileIds::default();
        let grid = Grid::from_values(values, &mut ids)?;
        Self::from_grid(grid, ids, seed, settings)
    }

    fn from_grid(
        grid: Grid,
        ids: TileIds,
        seed: u64,
        settings: Settings,
    ) -> Result<Self, EngineError> {
        settings.validate()?;
        Ok(Self {
            grid,
            ids,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            settings,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn empty_cells(&self) -> Vec<Position> {
        self.grid.empty_cells()
    }

    /// Resolve every row (Left/Right) or column (Up/Down) toward `direction`
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let before = self.grid.values();
        let merges = shift_grid(&mut self.grid, direction, &mut self.ids);
        let changed = self.grid.values() != before;
        log::debug!("Move {direction}: changed={changed}, merges={merges}");
        MoveOutcome { changed, merges }
    }

    /// Apply a move named by an input token; unknown tokens leave the grid alone
    pub fn apply_key(&mut self, key: &str) -> Result<MoveOutcome, EngineError> {
        let direction: Direction = key.parse()?;
        Ok(self.apply_move(direction))
    }

    /// Place a tile on a uniformly random empty cell
    ///
    /// With `forced_value` the tile takes that value, otherwise it is a 4 with
    /// probability `settings.four_probability()` and a 2 otherwise. Returns
    /// `GridFull` (the game-over signal) without touching the grid when no cell
    /// is empty.
    pub fn spawn_tile(&mut self, forced_value: Option<u32>) -> Result<SpawnedTile, EngineError> {
        if let Some(value) = forced_value {
            if validate_value(value)? == 0 {
                return Err(EngineError::InvalidTileValue(value));
            }
        }
        self.place_tile(forced_value).ok_or(EngineError::GridFull)
    }

    fn place_tile(&mut self, forced_value: Option<u32>) -> Option<SpawnedTile> {
        let empty = self.grid.empty_cells();
        if empty.is_empty() {
            log::info!("Grid full, nothing to spawn");
            return None;
        }

        let position = empty[self.rng.random_range(0..empty.len())];
        let value = match forced_value {
            Some(value) => value,
            None if self.rng.random_bool(self.settings.four_probability()) => 4,
            None => 2,
        };
        let cell = Cell::tile(value, self.ids.next_id());
        self.grid.set(position, cell);
        log::debug!("Spawned {value} at ({}, {})", position.x, position.y);

        Some(SpawnedTile { position, cell })
    }

    /// Whether a move in `direction` would change the grid
    pub fn can_move(&self, direction: Direction) -> bool {
        let mut probe = self.grid;
        let mut ids = self.ids.clone();
        shift_grid(&mut probe, direction, &mut ids);
        probe.values() != self.grid.values()
    }

    /// Directions that would change the grid
    pub fn legal_moves(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.can_move(d))
            .collect()
    }

    /// Grid is full and no two neighbours can merge
    pub fn is_stuck(&self) -> bool {
        self.grid.is_full() && !self.grid.has_adjacent_pair()
    }

    /// Play one turn: move, then spawn
    ///
    /// A move that changes nothing does not spawn unless
    /// `settings.spawn_on_unchanged_move` is set.
    pub fn turn(&mut self, direction: Direction) -> TurnOutcome {
        let outcome = self.apply_move(direction);

        if !outcome.changed && !self.settings.spawn_on_unchanged_move {
            if self.is_stuck() {
                log::info!("Game over: no moves left");
                return TurnOutcome::GameOver { outcome };
            }
            return TurnOutcome::Unchanged;
        }

        match self.place_tile(None) {
            Some(spawned) => TurnOutcome::Moved { outcome, spawned },
            None => {
                log::info!("Game over: grid full");
                TurnOutcome::GameOver { outcome }
            }
        }
    }
}
