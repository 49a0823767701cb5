//! Terminal rendering for the game.
//!
//! A small, game-oriented rendering layer: snapshots are drawn into a plain
//! framebuffer ([`GameView`]) which is then flushed to the terminal with
//! crossterm ([`TerminalRenderer`]). Only the renderer does I/O.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, for_each_changed_run, TerminalRenderer};
