//! Engine settings
//!
//! Persisted as JSON next to the binary, or wherever the caller points.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{EASY_FOUR_PROBABILITY, HARD_FOUR_PROBABILITY};
use crate::error::{EngineError, SettingsError};

/// Spawn difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" | "normal" => Some(Difficulty::Easy),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Probability that a spawned tile is a 4 rather than a 2
    pub fn four_probability(&self) -> f64 {
        match self {
            Difficulty::Easy => EASY_FOUR_PROBABILITY,
            Difficulty::Hard => HARD_FOUR_PROBABILITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,
    /// Override for the preset's chance of spawning a 4 (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub four_probability: Option<f64>,
    /// Spawn a tile even when a move left the grid unchanged
    pub spawn_on_unchanged_move: bool,
    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_preset(Difficulty::default())
    }
}

impl Settings {
    /// Create settings from a difficulty preset
    pub fn from_preset(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            four_probability: None,
            spawn_on_unchanged_move: false,
            seed: None,
        }
    }

    /// Apply a difficulty preset (drops any four-tile override)
    pub fn apply_preset(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.four_probability = None;
    }

    /// Effective chance of spawning a 4: the override, else the preset's
    pub fn four_probability(&self) -> f64 {
        self.four_probability
            .unwrap_or_else(|| self.difficulty.four_probability())
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let p = self.four_probability();
        if !(0.0..=1.0).contains(&p) {
            return Err(EngineError::Settings(format!(
                "four_probability must be within [0, 1], got {p}"
            )));
        }
        Ok(())
    }

    /// Load settings from a JSON file, falling back to defaults if it is missing
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            log::warn!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let json = fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
