//! Terminal input module (engine-facing).
//!
//! This crate is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and provides the auto-repeat policy
//! for held movement keys, including terminals without key-release events.

pub mod map;
pub mod repeat;

pub use blockfall_types as types;

pub use map::{handle_key_event, key_direction, should_quit};
pub use repeat::AutoRepeat;
