//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are plain data, usable from the core rules, the input layer and
//! any presentation host.
//!
//! # Board Coordinates
//!
//! - **Column**: 0 on the left, `width - 1` on the right
//! - **Row**: 0 is the bottom row; rows grow upward
//! - **Row -1**: the floor sentinel, always treated as occupied
//! - **Spawn anchor**: (4, 20), one row above the visible field
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Host frame interval (~60 FPS) |
//! | `DEFAULT_FALL_INTERVAL_MS` | 1000 | One gravity step per second |
//! | `DEFAULT_DAS_MS` | 200 | Hold time before the first auto-repeat |
//! | `DEFAULT_ARR_MS` | 20 | Interval between later auto-repeats |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Direction, GameAction, PieceColor, PieceKind, Pos};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(kind.color(), PieceColor::Purple);
//!
//! let below = Pos::new(4, 0) + Direction::Down.delta();
//! assert_eq!(below, Pos::new(4, -1));
//!
//! assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
//! ```

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Anchor of a freshly spawned piece: column 4, one row above the field
pub const SPAWN_POSITION: Pos = Pos::new(4, BOARD_HEIGHT as i16);

/// Row index of the implicit floor below row 0
pub const FLOOR_ROW: i16 = -1;

/// Number of minos in every piece
pub const MINOS_PER_PIECE: usize = 4;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval (one row per second)
pub const DEFAULT_FALL_INTERVAL_MS: u32 = 1000;

/// Delay before a held direction starts repeating
pub const DEFAULT_DAS_MS: u32 = 200;

/// Interval between repeats once auto-repeat is running (DAS / 10)
pub const DEFAULT_ARR_MS: u32 = 20;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(DEFAULT_FALL_INTERVAL_MS, 1000);
        assert_eq!(DEFAULT_DAS_MS, 200);
        assert_eq!(DEFAULT_ARR_MS, DEFAULT_DAS_MS / 10);
    }

    #[test]
    fn kind_and_color_are_bijective() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(kind.color().index(), i);
            assert_eq!(PieceColor::ALL[i], kind.color());
        }
        assert_eq!(PieceColor::COUNT, PieceKind::ALL.len() + 1);
        assert_eq!(PieceColor::ALL[PieceColor::COUNT - 1], PieceColor::Gray);
    }

    #[test]
    fn direction_deltas_are_unit_vectors() {
        assert_eq!(Direction::Left.delta(), Pos::new(-1, 0));
        assert_eq!(Direction::Right.delta(), Pos::new(1, 0));
        assert_eq!(Direction::Down.delta(), Pos::new(0, -1));
    }

    #[test]
    fn spawn_is_above_visible_field() {
        assert_eq!(SPAWN_POSITION, Pos::new(4, 20));
        assert!(SPAWN_POSITION.row >= BOARD_HEIGHT as i16);
    }
}

/// A grid coordinate or a relative mino offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pos {
    pub col: i16,
    pub row: i16,
}

impl Pos {
    pub const fn new(col: i16, row: i16) -> Self {
        Self { col, row }
    }
}

impl Add for Pos {
    type Output = Pos;

    fn add(self, rhs: Pos) -> Pos {
        Pos::new(self.col + rhs.col, self.row + rhs.row)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// The seven tetromino piece kinds
///
/// Declaration order is significant: it is the index into color palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    O,
    S,
    Z,
    T,
    L,
    J,
    I,
}

impl PieceKind {
    /// Every kind, in palette order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::I,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Color used for this kind's minos once locked
    pub fn color(self) -> PieceColor {
        match self {
            PieceKind::O => PieceColor::Yellow,
            PieceKind::S => PieceColor::Green,
            PieceKind::Z => PieceColor::Red,
            PieceKind::T => PieceColor::Purple,
            PieceKind::L => PieceColor::Orange,
            PieceKind::J => PieceColor::Blue,
            PieceKind::I => PieceColor::Cyan,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "i" => Some(PieceKind::I),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::I => "i",
        }
    }
}

/// Mino colors: one per piece kind, plus `Gray` for emptied cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    Yellow,
    Green,
    Red,
    Purple,
    Orange,
    Blue,
    Cyan,
    Gray,
}

impl PieceColor {
    /// Number of color variants a palette must cover
    pub const COUNT: usize = 8;

    pub const ALL: [PieceColor; PieceColor::COUNT] = [
        PieceColor::Yellow,
        PieceColor::Green,
        PieceColor::Red,
        PieceColor::Purple,
        PieceColor::Orange,
        PieceColor::Blue,
        PieceColor::Cyan,
        PieceColor::Gray,
    ];

    /// The reserved color of a cell that holds no mino
    pub const CLEARED: PieceColor = PieceColor::Gray;

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Movement directions a piece can attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Unit offset of one step in this direction
    pub fn delta(self) -> Pos {
        match self {
            Direction::Left => Pos::new(-1, 0),
            Direction::Right => Pos::new(1, 0),
            Direction::Down => Pos::new(0, -1),
        }
    }
}

/// Commands a host can feed the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it on contact
    MoveDown,
    /// Advance to the next rotation state, without wall kicks
    Rotate,
    /// Toggle pause state
    Pause,
    /// Start over on an empty board
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveDown"), Some(GameAction::MoveDown));
    /// assert_eq!(GameAction::from_str("ROTATE"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "movedown" => Some(GameAction::MoveDown),
            "rotate" => Some(GameAction::Rotate),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::MoveDown => "moveDown",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }

    /// The movement direction this action requests, if any
    pub fn direction(self) -> Option<Direction> {
        match self {
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::MoveDown => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Opaque handle of a locked mino, stable while the mino stays on the board.
///
/// Presentation layers key their sprites by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MinoId(pub u32);
