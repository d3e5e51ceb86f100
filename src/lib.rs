//! Blockfall (workspace facade crate).
//!
//! Re-exports the engine under `blockfall::{core,input,types}`; the
//! implementation lives in dedicated crates under `crates/`. [`sim`] holds the
//! scripted controller behind the `blockfall-sim` binary.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_types as types;

pub mod sim;
