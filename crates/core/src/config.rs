//! Session configuration.
//!
//! Defaults come from the shared constants; a config is validated once when a
//! session is built and never changes for that session's lifetime.

use thiserror::Error;

use crate::types::{
    BASE_DELAY_MS, FAST_DELAY_MS, GRID_HEIGHT, GRID_WIDTH, MAX_FOODS, VICTORY_LENGTH,
};

/// Reasons a session cannot be constructed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    InvalidGrid { width: u16, height: u16 },

    #[error("fast delay {fast_ms}ms must be non-zero and not slower than base delay {base_ms}ms")]
    InvalidDelay { base_ms: u32, fast_ms: u32 },

    #[error("victory length must be at least 2, got {0}")]
    InvalidVictoryLength(usize),

    #[error("max foods must be at least 1")]
    InvalidMaxFoods,

    #[error("invalid layout: {0}")]
    InvalidLayout(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_width: u16,
    pub grid_height: u16,
    pub base_delay_ms: u32,
    pub fast_delay_ms: u32,
    pub max_foods: usize,
    pub victory_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            base_delay_ms: BASE_DELAY_MS,
            fast_delay_ms: FAST_DELAY_MS,
            max_foods: MAX_FOODS,
            victory_length: VICTORY_LENGTH,
        }
    }
}

impl GameConfig {
    /// Default pacing and limits on a custom grid.
    pub fn with_grid(width: u16, height: u16) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::InvalidGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.fast_delay_ms == 0 || self.fast_delay_ms > self.base_delay_ms {
            return Err(ConfigError::InvalidDelay {
                base_ms: self.base_delay_ms,
                fast_ms: self.fast_delay_ms,
            });
        }
        if self.victory_length < 2 {
            return Err(ConfigError::InvalidVictoryLength(self.victory_length));
        }
        if self.max_foods == 0 {
            return Err(ConfigError::InvalidMaxFoods);
        }
        Ok(())
    }

    pub fn cell_count(&self) -> usize {
        self.grid_width as usize * self.grid_height as usize
    }
}
