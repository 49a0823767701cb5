//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Command`] values for the
//! session, plus quit detection for the game loop. No timing or key-repeat
//! logic lives here: each press is one command.

pub mod map;

pub use blockfall_types as types;

pub use map::{is_actionable, map_key, should_quit};
