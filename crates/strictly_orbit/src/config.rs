//! Game configuration.

use super::rings::{RotationError, rings_for};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Board size and rotation settings for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side length of the square board (even, 2 to `MAX_BOARD_SIZE`).
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Ring positions each piece travels after every move. Negative values
    /// rotate counter-clockwise.
    #[serde(default = "default_rotation_steps")]
    rotation_steps: i64,
}

#[instrument]
fn default_board_size() -> usize {
    4
}

#[instrument]
fn default_rotation_steps() -> i64 {
    1
}

impl GameConfig {
    /// Creates a configuration. Call `validate` (or build a `GameState`) to
    /// check the board size.
    #[instrument]
    pub fn new(board_size: usize, rotation_steps: i64) -> Self {
        Self {
            board_size,
            rotation_steps,
        }
    }

    /// Returns a copy with a different board size.
    pub fn with_board_size(self, board_size: usize) -> Self {
        Self { board_size, ..self }
    }

    /// Returns a copy with a different step count.
    pub fn with_rotation_steps(self, rotation_steps: i64) -> Self {
        Self {
            rotation_steps,
            ..self
        }
    }

    /// Checks that the board size has a ring decomposition.
    pub fn validate(&self) -> Result<(), RotationError> {
        rings_for(self.board_size).map(|_| ())
    }

    /// Loads and validates configuration from a TOML file.
    ///
    /// Missing keys fall back to the defaults (4×4 board, one step).
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            board_size = config.board_size,
            rotation_steps = config.rotation_steps,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config
            .validate()
            .map_err(|e| ConfigError::new(format!("Invalid config: {}", e)))?;
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(default_board_size(), default_rotation_steps())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
