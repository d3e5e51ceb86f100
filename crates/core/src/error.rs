//! Engine error kinds.
//!
//! Movement and rotation rejections are not errors; they are reported as
//! [`MoveOutcome::Rejected`](crate::game::MoveOutcome::Rejected).

use thiserror::Error;

use crate::types::{PieceKind, Pos};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("rotation {rotation} is out of range for piece {kind:?} ({count} rotation states)")]
    InvalidRotation {
        kind: PieceKind,
        rotation: u8,
        count: u8,
    },

    #[error("cannot lock a mino onto occupied cell {pos}")]
    LockInvariantViolation { pos: Pos },

    #[error("cannot lock a mino outside the grid at {pos}")]
    LockOutOfBounds { pos: Pos },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board dimensions {width}x{height} are outside 4..=64")]
    InvalidDimensions { width: u8, height: u8 },

    #[error("timing value `{field}` must be greater than zero")]
    InvalidTiming { field: &'static str },

    #[error("palette must have {expected} entries, got {actual}")]
    PaletteTooSmall { expected: usize, actual: usize },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
}
