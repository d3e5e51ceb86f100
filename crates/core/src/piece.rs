//! Active piece - the falling tetromino and its movement rules
//!
//! A piece never writes to the board. A downward move that hits something
//! reports [`MoveCheck::Landed`] and leaves locking to the caller.

use crate::board::Board;
use crate::error::EngineError;
use crate::shapes::{extremes, leading_edge, rotation_count, shape_of, PieceShape};
use crate::types::{Direction, PieceKind, Pos, MINOS_PER_PIECE};

/// Result of a single move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCheck {
    /// The anchor advanced one cell.
    Moved,
    /// The move was out of bounds or blocked; nothing changed.
    Rejected,
    /// A downward move hit the floor or the stack; the piece must lock where it is.
    Landed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    kind: PieceKind,
    rotation: u8,
    anchor: Pos,
}

impl ActivePiece {
    /// Create a piece in its first rotation state
    pub fn new(kind: PieceKind, anchor: Pos) -> Self {
        Self {
            kind,
            rotation: 0,
            anchor,
        }
    }

    pub fn with_rotation(kind: PieceKind, rotation: u8, anchor: Pos) -> Result<Self, EngineError> {
        shape_of(kind, rotation)?;
        Ok(Self {
            kind,
            rotation,
            anchor,
        })
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn anchor(&self) -> Pos {
        self.anchor
    }

    /// Mino offsets of the current rotation
    pub fn shape(&self) -> &'static PieceShape {
        Self::shape_for(self.kind, self.rotation)
    }

    // `rotation` is kept below `rotation_count(kind)` by every constructor and by
    // `attempt_rotate`, so the lookup cannot miss.
    fn shape_for(kind: PieceKind, rotation: u8) -> &'static PieceShape {
        match shape_of(kind, rotation) {
            Ok(shape) => shape,
            Err(err) => unreachable!("{err}"),
        }
    }

    /// Absolute board cells of the piece
    pub fn cells(&self) -> [Pos; MINOS_PER_PIECE] {
        self.shape().map(|mino| mino + self.anchor)
    }

    /// Absolute cells the piece would cover at another rotation and anchor
    pub fn cells_at(&self, rotation: u8, anchor: Pos) -> Result<[Pos; MINOS_PER_PIECE], EngineError> {
        Ok(shape_of(self.kind, rotation)?.map(|mino| mino + anchor))
    }

    /// Try to shift the piece one cell.
    ///
    /// Downward contact is checked on the leading edge (lowest mino per column)
    /// before any bounds check, so stepping below row 0 lands on the floor
    /// instead of being rejected.
    pub fn attempt_move(&mut self, direction: Direction, board: &Board) -> MoveCheck {
        let desired = self.anchor + direction.delta();
        let shape = self.shape();
        let borders = extremes(shape);
        let edge = leading_edge(shape, direction);
        let hits = |minos: &[Pos]| minos.iter().any(|&mino| board.is_occupied(mino + desired));

        match direction {
            Direction::Left => {
                if !board.is_inside(borders.left + desired) {
                    return MoveCheck::Rejected;
                }
            }
            Direction::Right => {
                if !board.is_inside(borders.right + desired) {
                    return MoveCheck::Rejected;
                }
            }
            Direction::Down => {
                if hits(edge.as_slice()) {
                    return MoveCheck::Landed;
                }
                if !board.is_inside(borders.bottom + desired) {
                    return MoveCheck::Rejected;
                }
            }
        }

        if hits(&shape[..]) || hits(edge.as_slice()) {
            return MoveCheck::Rejected;
        }

        self.anchor = desired;
        MoveCheck::Moved
    }

    /// Try to advance to the next rotation state in place.
    ///
    /// The rotated shape's extreme minos must be inside the board and none of
    /// its minos may overlap the stack. No alternative offsets are tried.
    pub fn attempt_rotate(&mut self, board: &Board) -> bool {
        let desired = (self.rotation + 1) % rotation_count(self.kind);
        let shape = Self::shape_for(self.kind, desired);
        let borders = extremes(shape);

        let in_bounds = [borders.left, borders.right, borders.bottom]
            .iter()
            .all(|&mino| board.is_inside(mino + self.anchor));
        if !in_bounds {
            return false;
        }

        if shape.iter().any(|&mino| board.is_occupied(mino + self.anchor)) {
            return false;
        }

        self.rotation = desired;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceColor;

    #[test]
    fn test_cells_follow_anchor() {
        let piece = ActivePiece::new(PieceKind::O, Pos::new(4, 20));
        assert_eq!(
            piece.cells(),
            [Pos::new(4, 20), Pos::new(5, 20), Pos::new(4, 21), Pos::new(5, 21)]
        );
    }

    #[test]
    fn test_with_rotation_validates_index() {
        assert!(ActivePiece::with_rotation(PieceKind::T, 3, Pos::new(0, 0)).is_ok());
        assert!(matches!(
            ActivePiece::with_rotation(PieceKind::I, 2, Pos::new(0, 0)),
            Err(EngineError::InvalidRotation { count: 2, .. })
        ));
    }

    #[test]
    fn test_down_onto_floor_lands() {
        let board = Board::new();
        let mut piece = ActivePiece::new(PieceKind::I, Pos::new(3, 0));
        assert_eq!(piece.attempt_move(Direction::Down, &board), MoveCheck::Landed);
        assert_eq!(piece.anchor(), Pos::new(3, 0));
    }

    #[test]
    fn test_side_move_blocked_by_overhang() {
        // Z spawn state: (0,1) (1,1) (1,0) (2,0). A block left of the lower row
        // stops a left move even though the upper row is clear.
        let mut board = Board::new();
        board.set(Pos::new(4, 5), Some(PieceColor::Gray));
        let mut piece = ActivePiece::new(PieceKind::Z, Pos::new(4, 5));
        assert_eq!(piece.attempt_move(Direction::Left, &board), MoveCheck::Rejected);
        assert_eq!(piece.anchor(), Pos::new(4, 5));
    }

    #[test]
    fn test_rotation_cycles_through_states() {
        let board = Board::new();
        let mut piece = ActivePiece::new(PieceKind::T, Pos::new(4, 5));
        for expected in [1, 2, 3, 0] {
            assert!(piece.attempt_rotate(&board));
            assert_eq!(piece.rotation(), expected);
        }
    }
}
