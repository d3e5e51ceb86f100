//! Shapes module - tetromino rotation tables and border geometry
//!
//! Each piece kind has a fixed, ordered list of rotation states; each state is
//! four mino offsets relative to the piece anchor (column right, row up).
//! Rotation simply advances to the next state in the list: there is no
//! rotation center and no wall kick table.

use arrayvec::ArrayVec;

use crate::error::EngineError;
use crate::types::{Direction, PieceKind, Pos, MINOS_PER_PIECE};

/// Shape of a piece - 4 mino offsets from the piece anchor
pub type PieceShape = [Pos; MINOS_PER_PIECE];

const fn p(col: i16, row: i16) -> Pos {
    Pos::new(col, row)
}

const O_ROTATIONS: &[PieceShape] = &[[p(0, 0), p(1, 0), p(0, 1), p(1, 1)]];

const S_ROTATIONS: &[PieceShape] = &[
    [p(0, 0), p(1, 0), p(1, 1), p(2, 1)],
    [p(1, 0), p(1, 1), p(0, 1), p(0, 2)],
];

const Z_ROTATIONS: &[PieceShape] = &[
    [p(0, 1), p(1, 1), p(1, 0), p(2, 0)],
    [p(0, 0), p(0, 1), p(1, 1), p(1, 2)],
];

const T_ROTATIONS: &[PieceShape] = &[
    [p(0, 0), p(1, 0), p(2, 0), p(1, 1)],
    [p(1, 0), p(1, 1), p(1, 2), p(0, 1)],
    [p(0, 1), p(1, 1), p(2, 1), p(1, 0)],
    [p(1, 0), p(1, 1), p(1, 2), p(2, 1)],
];

const L_ROTATIONS: &[PieceShape] = &[
    [p(0, 0), p(0, 1), p(1, 1), p(2, 1)],
    [p(0, 0), p(1, 0), p(0, 1), p(0, 2)],
    [p(0, 0), p(1, 0), p(2, 0), p(2, 1)],
    [p(2, 0), p(2, 1), p(2, 2), p(1, 2)],
];

const J_ROTATIONS: &[PieceShape] = &[
    [p(0, 1), p(1, 1), p(2, 1), p(2, 0)],
    [p(0, 0), p(0, 1), p(0, 2), p(1, 2)],
    [p(0, 0), p(1, 0), p(2, 0), p(0, 1)],
    [p(0, 0), p(1, 0), p(1, 1), p(1, 2)],
];

const I_ROTATIONS: &[PieceShape] = &[
    [p(0, 0), p(1, 0), p(2, 0), p(3, 0)],
    [p(0, 0), p(0, 1), p(0, 2), p(0, 3)],
];

fn rotations(kind: PieceKind) -> &'static [PieceShape] {
    match kind {
        PieceKind::O => O_ROTATIONS,
        PieceKind::S => S_ROTATIONS,
        PieceKind::Z => Z_ROTATIONS,
        PieceKind::T => T_ROTATIONS,
        PieceKind::L => L_ROTATIONS,
        PieceKind::J => J_ROTATIONS,
        PieceKind::I => I_ROTATIONS,
    }
}

/// Number of distinct rotation states: O=1, S/Z/I=2, T/L/J=4
pub fn rotation_count(kind: PieceKind) -> u8 {
    rotations(kind).len() as u8
}

/// Get the mino offsets for a piece kind and rotation index
pub fn shape_of(kind: PieceKind, rotation: u8) -> Result<&'static PieceShape, EngineError> {
    rotations(kind)
        .get(rotation as usize)
        .ok_or(EngineError::InvalidRotation {
            kind,
            rotation,
            count: rotation_count(kind),
        })
}

/// The single extreme minos of a shape, used for bounds screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extremes {
    pub left: Pos,
    pub right: Pos,
    pub bottom: Pos,
}

/// Find the leftmost, rightmost and bottommost mino.
///
/// Ties go to the first mino in table order.
pub fn extremes(shape: &PieceShape) -> Extremes {
    let mut out = Extremes {
        left: shape[0],
        right: shape[0],
        bottom: shape[0],
    };
    for &mino in &shape[1..] {
        if mino.col < out.left.col {
            out.left = mino;
        }
        if mino.col > out.right.col {
            out.right = mino;
        }
        if mino.row < out.bottom.row {
            out.bottom = mino;
        }
    }
    out
}

/// Minos on the leading edge of a move: the leftmost mino of each row (Left),
/// the rightmost of each row (Right) or the lowest of each column (Down).
///
/// A shape spans at most four rows and columns, so each row/column gets one
/// optional slot. The result is ordered by slot index.
pub fn leading_edge(shape: &PieceShape, direction: Direction) -> ArrayVec<Pos, MINOS_PER_PIECE> {
    let mut slots: [Option<Pos>; MINOS_PER_PIECE] = [None; MINOS_PER_PIECE];

    for &mino in shape {
        let slot = match direction {
            Direction::Left | Direction::Right => mino.row,
            Direction::Down => mino.col,
        };
        debug_assert!((0..MINOS_PER_PIECE as i16).contains(&slot));
        let entry = &mut slots[slot as usize];
        match *entry {
            Some(old) if !further_along(direction, mino, old) => {}
            _ => *entry = Some(mino),
        }
    }

    slots.into_iter().flatten().collect()
}

fn further_along(direction: Direction, candidate: Pos, current: Pos) -> bool {
    match direction {
        Direction::Left => candidate.col < current.col,
        Direction::Right => candidate.col > current.col,
        Direction::Down => candidate.row < current.row,
    }
}
