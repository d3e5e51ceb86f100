//! Read-only views of the game for hosts that render by polling.

use serde::Serialize;

use crate::game::GamePhase;
use crate::piece::ActivePiece;
use crate::types::{PieceColor, PieceKind, Pos, MINOS_PER_PIECE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: u8,
    pub anchor: Pos,
    pub cells: [Pos; MINOS_PER_PIECE],
}

impl From<&ActivePiece> for ActiveSnapshot {
    fn from(value: &ActivePiece) -> Self {
        Self {
            kind: value.kind(),
            rotation: value.rotation(),
            anchor: value.anchor(),
            cells: value.cells(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major, bottom row first; `None` for empty cells
    pub cells: Vec<Option<PieceColor>>,
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    pub phase: GamePhase,
    pub paused: bool,
    pub lines_cleared: u32,
    pub pieces_locked: u32,
}

impl GameSnapshot {
    /// Locked color at (col, row), `None` when empty or outside
    pub fn cell(&self, pos: Pos) -> Option<PieceColor> {
        if pos.col < 0 || pos.row < 0 || pos.col >= self.width as i16 || pos.row >= self.height as i16 {
            return None;
        }
        self.cells[pos.row as usize * self.width as usize + pos.col as usize]
    }

    pub fn playable(&self) -> bool {
        self.phase != GamePhase::GameOver && !self.paused
    }
}
