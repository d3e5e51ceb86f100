//! Piece sequencer - decides which piece comes next
//!
//! Keeps the piece in play (`current`) and one piece of lookahead
//! (`next`). The default rule draws every kind independently and uniformly;
//! there is no bag, so droughts and repeats are possible.

use rand::prelude::*;

use crate::events::{EventSink, GameEvent};
use crate::piece::ActivePiece;
use crate::types::{PieceKind, Pos, SPAWN_POSITION};

/// Where piece kinds come from
#[derive(Debug, Clone)]
pub enum PieceRule {
    /// Independent uniform draws over the seven kinds
    Uniform(StdRng),
    /// Repeat a fixed list forever (replays, tests)
    Cycle { kinds: Vec<PieceKind>, index: usize },
}

impl PieceRule {
    pub fn uniform(seed: u64) -> Self {
        PieceRule::Uniform(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        PieceRule::Uniform(StdRng::from_entropy())
    }

    /// Cycle through `kinds`; an empty list falls back to `[O]`
    pub fn cycle(kinds: impl IntoIterator<Item = PieceKind>) -> Self {
        let mut kinds: Vec<PieceKind> = kinds.into_iter().collect();
        if kinds.is_empty() {
            kinds.push(PieceKind::O);
        }
        PieceRule::Cycle { kinds, index: 0 }
    }

    pub fn draw(&mut self) -> PieceKind {
        match self {
            PieceRule::Uniform(rng) => PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())],
            PieceRule::Cycle { kinds, index } => {
                let kind = kinds[*index % kinds.len()];
                *index = (*index + 1) % kinds.len();
                kind
            }
        }
    }
}

/// Spawn anchor for a `width x height` board: one row above the field, left
/// of center, and far enough from the right wall for a horizontal I.
///
/// Gives (4, 20) on the default board.
pub fn spawn_anchor_for(width: u8, height: u8) -> Pos {
    let col = (width as i16 / 2 - 1).min(width as i16 - 4).max(0);
    Pos::new(col, height as i16)
}

#[derive(Debug, Clone)]
pub struct PieceSequencer {
    rule: PieceRule,
    current: Option<PieceKind>,
    next: PieceKind,
    spawn_anchor: Pos,
}

impl PieceSequencer {
    pub fn new(rule: PieceRule) -> Self {
        Self::with_spawn_anchor(rule, SPAWN_POSITION)
    }

    pub fn with_spawn_anchor(mut rule: PieceRule, spawn_anchor: Pos) -> Self {
        let next = rule.draw();
        Self {
            rule,
            current: None,
            next,
            spawn_anchor,
        }
    }

    /// Kind of the piece most recently put into play
    pub fn current(&self) -> Option<PieceKind> {
        self.current
    }

    /// Lookahead kind shown in the preview
    pub fn next(&self) -> PieceKind {
        self.next
    }

    pub fn spawn_anchor(&self) -> Pos {
        self.spawn_anchor
    }

    /// Promote `next` to `current`, draw a new lookahead and put `current`
    /// into play at the spawn anchor.
    pub fn generate(&mut self, sink: &mut impl EventSink) -> ActivePiece {
        let kind = self.next;
        self.current = Some(kind);
        self.next = self.rule.draw();

        sink.emit(GameEvent::PieceSpawned {
            kind,
            anchor: self.spawn_anchor,
        });
        sink.emit(GameEvent::PreviewChanged { kind: self.next });

        ActivePiece::new(kind, self.spawn_anchor)
    }
}
