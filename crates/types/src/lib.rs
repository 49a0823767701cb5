//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data with no external dependencies, so they can be used
//! by the engine, the terminal renderer and the input mapper alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn anchor**: (3, 0), horizontally centered on the top row
//!
//! # Speed and Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_DROP_MS` | 700 | Gravity interval at level 1 |
//! | `DROP_STEP_MS` | 60 | Interval reduction per level |
//! | `DROP_INTERVAL_MIN_MS` | 100 | Fastest gravity interval |
//! | `LINES_PER_LEVEL` | 10 | Lines needed to advance one level |
//! | `LINE_SCORES` | 0/100/300/500/800 | Points per lock for 0-4 cleared rows |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, PieceKind, RotateDir, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! assert_eq!(RotateDir::Cw.step(), 1);
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Anchor of a freshly spawned piece: horizontally centered, top row.
pub const SPAWN_POSITION: (i8, i8) = (BOARD_WIDTH as i8 / 2 - 2, 0);

/// Gravity interval at level 1 (milliseconds per row)
pub const BASE_DROP_MS: u32 = 700;

/// Gravity speed-up per level (milliseconds)
pub const DROP_STEP_MS: u32 = 60;

/// Absolute minimum drop interval (100ms)
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Cleared lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points awarded for clearing N rows with a single lock (index = N).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// Horizontal offsets tried, in order, when a rotation is blocked.
pub const WALL_KICKS: [i8; 4] = [-1, 1, -2, 2];

/// The seven piece kinds
///
/// Declared in catalog order; [`PieceKind::ALL`] is the order the bag
/// randomizer starts from before shuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

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
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Uppercase letter, as shown in the side panel.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }

    /// Position in [`PieceKind::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Snapshot cell encoding: 1..=7 in catalog order (0 means empty).
    pub fn as_u8(&self) -> u8 {
        self.index() as u8 + 1
    }

    /// Inverse of [`PieceKind::as_u8`]; `None` for 0 and unknown values.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            1..=7 => Some(Self::ALL[(v - 1) as usize]),
            _ => None,
        }
    }
}

/// Rotation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotateDir {
    /// Clockwise, advances the rotation index by one
    Cw,
    /// Counter-clockwise, steps the rotation index back by one
    Ccw,
}

impl RotateDir {
    /// Signed step applied to a rotation index.
    pub fn step(&self) -> i8 {
        match self {
            RotateDir::Cw => 1,
            RotateDir::Ccw => -1,
        }
    }
}

/// Player commands accepted by a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Rotate clockwise, with horizontal wall kicks
    RotateCw,
    /// Drop to the lowest valid position and lock immediately
    HardDrop,
}

impl Command {
    /// Parse a command from its camelCase name (case-insensitive).
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("ROTATECW"), Some(Command::RotateCw));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MoveLeft),
            "moveright" => Some(Command::MoveRight),
            "softdrop" => Some(Command::SoftDrop),
            "rotatecw" => Some(Command::RotateCw),
            "harddrop" => Some(Command::HardDrop),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::RotateCw => "rotateCw",
            Command::HardDrop => "hardDrop",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;
