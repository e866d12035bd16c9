//! Runtime game settings.
//!
//! Every field defaults to the constants in [`crate::config::game`] and
//! [`crate::config::viewport`]. A JSON file named by the `SNAKE_SETTINGS`
//! environment variable may override any subset of them.

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::game::{
    BASE_INTERVAL_MS, FOOD_REWARD, INITIAL_LENGTH, INTERVAL_STEP_MS, MIN_INTERVAL_MS, START_X,
    START_Y,
};
use crate::config::viewport::{CANVAS_BREAKPOINTS, DEFAULT_VIEWPORT_PX, MAX_CANVAS_PX, TILE_SIZE_PX};
use crate::game::grid::GridGeometry;
use crate::game::types::Position;

/// Environment variable holding the path of a JSON settings file.
pub const SETTINGS_ENV: &str = "SNAKE_SETTINGS";

/// Errors that can occur when loading settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the settings file from disk.
    #[error("failed to read settings file: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// The settings file is not valid JSON for [`GameSettings`].
    #[error("failed to parse settings JSON: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// The values parsed but break a constraint.
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// How the terminal view reports session events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Draw the board after every tick.
    #[default]
    Board,
    /// Print one JSON object per event.
    Json,
}

/// Tunable parameters for a game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub base_interval_ms: u64,
    pub min_interval_ms: u64,
    pub interval_step_ms: u64,
    pub food_reward: u32,
    pub initial_length: usize,
    pub start: Position,
    pub tile_px: u32,
    pub viewport_px: u32,
    /// Fixed seed for food placement; random when absent.
    pub rng_seed: Option<u64>,
    pub output: OutputMode,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            base_interval_ms: BASE_INTERVAL_MS,
            min_interval_ms: MIN_INTERVAL_MS,
            interval_step_ms: INTERVAL_STEP_MS,
            food_reward: FOOD_REWARD,
            initial_length: INITIAL_LENGTH,
            start: Position { x: START_X, y: START_Y },
            tile_px: TILE_SIZE_PX,
            viewport_px: DEFAULT_VIEWPORT_PX,
            rng_seed: None,
            output: OutputMode::Board,
        }
    }
}

impl GameSettings {
    /// Load settings from `SNAKE_SETTINGS` if it is set, defaults otherwise.
    pub fn load() -> Result<Self, ConfigError> {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// Read and validate a JSON settings file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&text)?;
        info!("[Config] Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse and validate settings from a JSON document.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check the constraints the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_interval_ms == 0 {
            return Err(ConfigError::Invalid("min_interval_ms must be at least 1".into()));
        }
        if self.base_interval_ms < self.min_interval_ms {
            return Err(ConfigError::Invalid(format!(
                "base_interval_ms ({}) is below min_interval_ms ({})",
                self.base_interval_ms, self.min_interval_ms
            )));
        }
        if self.initial_length < INITIAL_LENGTH {
            return Err(ConfigError::Invalid(format!(
                "initial_length must be at least {INITIAL_LENGTH}"
            )));
        }
        if self.tile_px == 0 {
            return Err(ConfigError::Invalid("tile_px must be at least 1".into()));
        }
        let smallest_grid = self.smallest_grid();
        if self.initial_length > smallest_grid as usize {
            return Err(ConfigError::Invalid(format!(
                "initial_length ({}) does not fit the smallest {smallest_grid}-cell grid",
                self.initial_length
            )));
        }
        Ok(())
    }

    /// Cells per side on the narrowest canvas any viewport can produce.
    fn smallest_grid(&self) -> i32 {
        let canvas_px = CANVAS_BREAKPOINTS
            .iter()
            .map(|(_, canvas)| *canvas)
            .fold(MAX_CANVAS_PX, u32::min);
        GridGeometry { canvas_px, tile_px: self.tile_px }.cells()
    }
}
