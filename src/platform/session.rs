//! Input-driven session: one input token, one complete turn

use super::Renderer;
use crate::sim::{Direction, Engine, SpawnedTile, TurnOutcome};

/// What a single input did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Token did not name a direction; nothing changed
    Ignored,
    /// Move changed nothing, no tile spawned
    Unchanged,
    Moved(SpawnedTile),
    GameOver,
}

/// Owns an engine and a renderer and runs turns for incoming input
pub struct Session<R: Renderer> {
    engine: Engine,
    renderer: R,
    over: bool,
}

impl<R: Renderer> Session<R> {
    pub fn new(engine: Engine, renderer: R) -> Self {
        Self {
            engine,
            renderer,
            over: false,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Draw the starting grid
    pub fn start(&mut self) -> Result<(), R::Error> {
        self.renderer.render(self.engine.grid())
    }

    /// Handle one input token (key code, word or letter)
    pub fn on_input(&mut self, token: &str) -> Result<InputOutcome, R::Error> {
        match Direction::from_key(token) {
            Some(direction) => self.on_direction(direction),
            None => {
                log::warn!("Ignoring unknown input {token:?}");
                Ok(InputOutcome::Ignored)
            }
        }
    }

    /// Run one turn in `direction` and forward the result to the renderer
    pub fn on_direction(&mut self, direction: Direction) -> Result<InputOutcome, R::Error> {
        if self.over {
            return Ok(InputOutcome::GameOver);
        }

        match self.engine.turn(direction) {
            TurnOutcome::Moved { spawned, .. } => {
                self.renderer.render(self.engine.grid())?;
                if self.engine.is_stuck() {
                    self.finish()?;
                    return Ok(InputOutcome::GameOver);
                }
                Ok(InputOutcome::Moved(spawned))
            }
            TurnOutcome::Unchanged => Ok(InputOutcome::Unchanged),
            TurnOutcome::GameOver { .. } => {
                self.renderer.render(self.engine.grid())?;
                self.finish()?;
                Ok(InputOutcome::GameOver)
            }
        }
    }

    fn finish(&mut self) -> Result<(), R::Error> {
        self.over = true;
        log::info!("Game over, largest tile {}", self.engine.grid().max_value());
        self.renderer.on_game_over(self.engine.grid())
    }
}
