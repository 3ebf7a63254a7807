//! Engine configuration
//!
//! [`GameConfig`] is an immutable value built once and handed to
//! [`Session::new`](crate::session::Session::new). It is validated there;
//! the engine never recovers from a bad table at runtime.

use thiserror::Error;

use crate::shapes::{standard_catalog, Shape};
use crate::types::{
    GRID_HEIGHT, GRID_WIDTH, LEVEL_SPEEDS_MS, LEVEL_THRESHOLDS, SCORE_MULTIPLIERS,
};

/// Reasons a configuration or shape definition is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid must have at least one row and one column (got {width}x{height})")]
    EmptyGrid { width: u16, height: u16 },

    #[error("level threshold table is empty")]
    EmptyThresholds,

    #[error("level thresholds must be ascending (index {index} is lower than its predecessor)")]
    UnsortedThresholds { index: usize },

    #[error("level speed table is empty")]
    EmptySpeeds,

    #[error("level speed at index {index} is zero")]
    ZeroSpeed { index: usize },

    #[error("score multiplier at index {index} must be finite and non-negative")]
    InvalidMultiplier { index: usize },

    #[error("shape catalog is empty")]
    EmptyCatalog,

    #[error("shape catalog has {0} entries, at most 255 fit a color index")]
    CatalogTooLarge(usize),

    #[error("shape has no occupied cells")]
    EmptyShape,

    #[error("shape rows have different lengths")]
    RaggedShape,

    #[error("shape is {rows}x{cols}, larger than 4x4")]
    ShapeTooLarge { rows: usize, cols: usize },
}

/// Immutable engine configuration
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub grid_width: u16,
    pub grid_height: u16,
    /// Cumulative score needed for level `i + 1`; index 0 is the start level
    pub level_thresholds: Vec<u32>,
    /// Fall interval in ms for level `i + 1`, clamped to the last entry
    pub level_speeds_ms: Vec<u32>,
    /// Multiplier by lines cleared in one lock (0-4)
    pub score_multipliers: [f64; 5],
    /// Piece catalog; color index = position + 1
    pub shapes: Vec<Shape>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            level_thresholds: LEVEL_THRESHOLDS.to_vec(),
            level_speeds_ms: LEVEL_SPEEDS_MS.to_vec(),
            score_multipliers: SCORE_MULTIPLIERS,
            shapes: standard_catalog(),
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid dimensions
    pub fn with_grid(mut self, width: u16, height: u16) -> Self {
        self.grid_width = width;
        self.grid_height = height;
        self
    }

    /// Set the level threshold table
    pub fn with_level_thresholds(mut self, thresholds: Vec<u32>) -> Self {
        self.level_thresholds = thresholds;
        self
    }

    /// Set the per-level fall intervals
    pub fn with_level_speeds_ms(mut self, speeds: Vec<u32>) -> Self {
        self.level_speeds_ms = speeds;
        self
    }

    /// Set the line-clear multipliers
    pub fn with_score_multipliers(mut self, multipliers: [f64; 5]) -> Self {
        self.score_multipliers = multipliers;
        self
    }

    /// Replace the shape catalog
    pub fn with_shapes(mut self, shapes: Vec<Shape>) -> Self {
        self.shapes = shapes;
        self
    }

    /// Highest reachable level
    pub fn max_level(&self) -> u32 {
        self.level_thresholds.len() as u32
    }

    /// Check every table and dimension
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }

        if self.level_thresholds.is_empty() {
            return Err(ConfigError::EmptyThresholds);
        }
        if let Some(i) = self
            .level_thresholds
            .windows(2)
            .position(|w| w[1] < w[0])
        {
            return Err(ConfigError::UnsortedThresholds { index: i + 1 });
        }

        if self.level_speeds_ms.is_empty() {
            return Err(ConfigError::EmptySpeeds);
        }
        if let Some(index) = self.level_speeds_ms.iter().position(|&ms| ms == 0) {
            return Err(ConfigError::ZeroSpeed { index });
        }

        if let Some(index) = self
            .score_multipliers
            .iter()
            .position(|m| !m.is_finite() || *m < 0.0)
        {
            return Err(ConfigError::InvalidMultiplier { index });
        }

        if self.shapes.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if self.shapes.len() > u8::MAX as usize {
            return Err(ConfigError::CatalogTooLarge(self.shapes.len()));
        }
        if self.shapes.iter().any(|s| s.cell_count() == 0) {
            return Err(ConfigError::EmptyShape);
        }

        Ok(())
    }
}
