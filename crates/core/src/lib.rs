//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds every rule of the falling-block game: the shape table, the
//! grid, piece movement and rotation, piece sequencing, and the coordinator
//! that ties them together. It performs no rendering and no terminal I/O;
//! presentation layers observe it through [`GameEvent`]s or poll a
//! [`GameSnapshot`].
//!
//! # Module Structure
//!
//! - [`shapes`]: static rotation tables and border helpers
//! - [`board`]: 10x20 grid with the floor sentinel and line clearing
//! - [`piece`]: the falling piece, its moves and in-place rotation
//! - [`sequencer`]: current / next piece selection
//! - [`game`]: the coordinator state machine
//! - [`events`]: notifications for the presentation layer
//! - [`config`]: startup configuration and the color palette
//!
//! # Game Rules
//!
//! - Row 0 is the bottom row. Pieces spawn with their anchor at (4, 20), just
//!   above the visible field, and fall one row per gravity interval.
//! - A piece locks the moment a downward step would touch the stack or the
//!   floor. There is no lock delay and no hard drop.
//! - Rotation is clockwise-only and in place. There are no wall kicks.
//! - Full rows are removed bottom-up and the rows above shift down by one.
//!
//! # Example
//!
//! ```
//! use blockfall_core::{EngineConfig, Game, MoveOutcome};
//! use blockfall_core::types::GameAction;
//!
//! let config = EngineConfig { seed: Some(12345), ..EngineConfig::default() };
//! let mut game = Game::new(&config).unwrap();
//! game.start();
//!
//! // The piece starts above the field; a gravity step brings it in.
//! assert_eq!(game.gravity_tick(), MoveOutcome::Moved);
//! game.apply_action(GameAction::MoveRight);
//!
//! for event in game.drain_events() {
//!     println!("{event:?}");
//! }
//! ```
//!
//! # Timing
//!
//! Call [`Game::tick`](game::Game::tick) every frame with the elapsed time in
//! milliseconds. The default fall interval is 1000ms.

pub mod board;
pub mod config;
pub mod error;
pub mod events;
pub mod game;
pub mod piece;
pub mod sequencer;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, LineClear, Mino};
pub use config::{EngineConfig, Palette};
pub use error::{ConfigError, EngineError};
pub use events::{EventSink, GameEvent, NullSink};
pub use game::{Game, GamePhase, MoveOutcome};
pub use piece::{ActivePiece, MoveCheck};
pub use sequencer::{spawn_anchor_for, PieceRule, PieceSequencer};
pub use shapes::{extremes, leading_edge, rotation_count, shape_of, Extremes, PieceShape};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
