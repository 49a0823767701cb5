//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management. It has no
//! dependencies on UI, terminal, or timing, which makes it:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: every rule is reachable from plain function calls
//! - **Portable**: the host decides how to render and when to tick
//!
//! # Module Structure
//!
//! - [`shapes`]: static rotation-state table for the seven kinds
//! - [`piece`]: the active piece as an immutable value
//! - [`board`]: 10x20 grid with collision detection and line clearing
//! - [`rng`]: seedable 7-bag randomizer
//! - [`scoring`]: score, level and gravity interval policy
//! - [`session`]: the playthrough state machine
//! - [`snapshot`]: copyable read-only view for renderers
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: every bag of 7 holds each kind once
//! - **Rotation**: clockwise with horizontal kicks of -1, +1, -2, +2 columns
//! - **Locking**: immediate when gravity cannot move the piece, or on hard drop
//! - **Scoring**: 100/300/500/800 for 1-4 rows in one lock
//! - **Levels**: one level per 10 lines, gravity 700ms at level 1, 60ms
//!   faster per level, never below 100ms
//!
//! # Example
//!
//! ```
//! use blockfall_core::Session;
//! use blockfall_core::types::Command;
//!
//! let mut session = Session::new(Some(12345));
//!
//! session.on_command(Command::MoveRight);
//! session.on_command(Command::RotateCw);
//! session.on_command(Command::HardDrop);
//! session.on_tick();
//!
//! assert_eq!(session.pieces_locked(), 1);
//! assert!(!session.is_game_over());
//! ```

pub mod board;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use piece::Piece;
pub use rng::PieceQueue;
pub use scoring::{apply_lock, drop_interval_ms, level_for_lines, line_clear_score, Progress};
pub use session::{LockEvent, Phase, Session};
pub use shapes::{get_shape, rotation_count, spawn_shape, PieceShape};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
