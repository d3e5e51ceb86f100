//! Engine configuration and the color palette contract.
//!
//! Configuration is read and validated once, before a [`Game`](crate::Game) is
//! built. Nothing in here is consulted again mid-game.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{
    PieceColor, BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_ARR_MS, DEFAULT_DAS_MS,
    DEFAULT_FALL_INTERVAL_MS,
};

const MIN_DIMENSION: u8 = 4;
const MAX_DIMENSION: u8 = 64;

/// Recognized engine options. Missing JSON fields fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub board_width: u8,
    pub board_height: u8,
    /// Gravity interval in milliseconds
    pub fall_interval_ms: u32,
    /// Auto-repeat initial delay in milliseconds
    pub das_ms: u32,
    /// Auto-repeat interval in milliseconds
    pub arr_ms: u32,
    /// Seed for the piece sequencer; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            fall_interval_ms: DEFAULT_FALL_INTERVAL_MS,
            das_ms: DEFAULT_DAS_MS,
            arr_ms: DEFAULT_ARR_MS,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = MIN_DIMENSION..=MAX_DIMENSION;
        if !dims.contains(&self.board_width) || !dims.contains(&self.board_height) {
            return Err(ConfigError::InvalidDimensions {
                width: self.board_width,
                height: self.board_height,
            });
        }
        if self.fall_interval_ms == 0 {
            return Err(ConfigError::InvalidTiming {
                field: "fall_interval_ms",
            });
        }
        if self.arr_ms == 0 {
            return Err(ConfigError::InvalidTiming { field: "arr_ms" });
        }
        Ok(())
    }
}

/// Maps every [`PieceColor`] to a host-side renderable (sprite, style, glyph...).
///
/// Construction fails fast when the host supplies fewer entries than there are
/// colors, so a short palette is caught at startup rather than at first draw.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette<T> {
    entries: Vec<T>,
}

impl<T> Palette<T> {
    pub fn new(entries: Vec<T>) -> Result<Self, ConfigError> {
        if entries.len() < PieceColor::COUNT {
            return Err(ConfigError::PaletteTooSmall {
                expected: PieceColor::COUNT,
                actual: entries.len(),
            });
        }
        Ok(Self { entries })
    }

    pub fn get(&self, color: PieceColor) -> &T {
        &self.entries[color.index()]
    }
}
