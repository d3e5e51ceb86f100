//! Notifications for the presentation layer.
//!
//! The engine emits events synchronously while it mutates state; hosts consume
//! them at their own pace (sprite creation, fade-out animations, sounds). The
//! engine never waits on a consumer.

use serde::Serialize;

use crate::types::{MinoId, PieceColor, PieceKind, Pos, MINOS_PER_PIECE};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// A new active piece entered play at `anchor`.
    PieceSpawned { kind: PieceKind, anchor: Pos },
    /// The lookahead piece changed.
    PreviewChanged { kind: PieceKind },
    /// A mino was committed to the grid.
    MinoCreated {
        id: MinoId,
        pos: Pos,
        color: PieceColor,
    },
    /// A committed mino slid down during a row collapse.
    MinoMoved { id: MinoId, from: Pos, to: Pos },
    /// Minos removed by one lock-triggered line-clear scan, batched.
    MinosRemoved { ids: Vec<MinoId> },
    /// Row slots cleared during one scan, bottom first, in removal order.
    LinesCleared { rows: Vec<i16> },
    /// The active piece was locked into the grid.
    PieceLocked {
        kind: PieceKind,
        cells: [Pos; MINOS_PER_PIECE],
    },
    Paused { paused: bool },
    GameOver,
    Restarted,
}

/// Receiver of [`GameEvent`]s.
pub trait EventSink {
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}
