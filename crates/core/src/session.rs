//! Session module - one playthrough of the game
//!
//! Ties together the board, the active piece, the bag queue and the scoring
//! policy. The host drives it with discrete events: [`Session::on_tick`] for
//! gravity and [`Session::on_command`] for player input. Each call runs to
//! completion; timing is the host's job, the session only reports the current
//! gravity interval.

use tracing::{debug, info};

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::PieceQueue;
use crate::scoring::{apply_lock, Progress};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, PieceKind, RotateDir, WALL_KICKS};

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Playing,
    /// Terminal: the last spawned piece did not fit.
    GameOver,
}

/// Outcome of one lock-and-advance step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// Kind of the piece that was locked
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub score_delta: u32,
    /// Level after the lock
    pub level: u32,
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    active: Piece,
    next: PieceKind,
    queue: PieceQueue,
    progress: Progress,
    phase: Phase,
    pieces_locked: u32,
    seed: Option<u64>,
    last_event: Option<LockEvent>,
}

impl Session {
    /// Start a new game on an empty board.
    ///
    /// The first two kinds are drawn immediately: one becomes the active
    /// piece, the other the lookahead. `None` seeds from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let mut queue = PieceQueue::new(seed);
        let first = queue.next();
        let next = queue.next();
        debug!(?seed, ?first, ?next, "session started");

        Self {
            board: Board::new(),
            active: Piece::spawn(first),
            next,
            queue,
            progress: Progress::default(),
            phase: Phase::Playing,
            pieces_locked: 0,
            seed,
            last_event: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Piece {
        self.active
    }

    pub fn next_kind(&self) -> PieceKind {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.progress.score
    }

    pub fn lines(&self) -> u32 {
        self.progress.lines
    }

    pub fn level(&self) -> u32 {
        self.progress.level
    }

    /// Current gravity interval; the host should call `on_tick` this often.
    pub fn drop_interval_ms(&self) -> u32 {
        self.progress.drop_interval_ms
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Seed the session was created with, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Gravity: move the piece down one row, locking it if it cannot move.
    ///
    /// Returns false only when the game is already over.
    pub fn on_tick(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }
        if !self.try_move(0, 1) {
            self.lock_and_advance();
        }
        true
    }

    /// Apply a player command. Returns whether the state changed.
    pub fn on_command(&mut self, command: Command) -> bool {
        if self.is_game_over() {
            return false;
        }
        match command {
            Command::MoveLeft => self.try_move(-1, 0),
            Command::MoveRight => self.try_move(1, 0),
            Command::SoftDrop => self.try_move(0, 1),
            Command::RotateCw => self.try_rotate(RotateDir::Cw),
            Command::HardDrop => {
                self.hard_drop();
                true
            }
        }
    }

    /// Translate the active piece if the target position is free.
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.is_game_over() {
            return false;
        }
        let moved = self.active.moved(dx, dy);
        if !self.board.is_valid_position(&moved) {
            return false;
        }
        self.active = moved;
        true
    }

    /// Rotate the active piece, trying horizontal kicks when blocked.
    ///
    /// The kick list is the same for every kind: the unshifted rotation
    /// first, then -1, +1, -2, +2 columns. The first fit wins.
    pub fn try_rotate(&mut self, dir: RotateDir) -> bool {
        if self.is_game_over() {
            return false;
        }
        let rotated = self.active.rotated(dir);
        let fit = std::iter::once(0)
            .chain(WALL_KICKS)
            .map(|dx| rotated.moved(dx, 0))
            .find(|candidate| self.board.is_valid_position(candidate));

        match fit {
            Some(piece) => {
                self.active = piece;
                true
            }
            None => false,
        }
    }

    /// Lowest position the active piece can fall to from where it is.
    pub(crate) fn drop_target(&self) -> Piece {
        let mut dropped = self.active;
        loop {
            let candidate = dropped.moved(0, 1);
            if !self.board.is_valid_position(&candidate) {
                return dropped;
            }
            dropped = candidate;
        }
    }

    /// Drop to the lowest valid position and lock. Returns rows fallen.
    pub fn hard_drop(&mut self) -> u32 {
        if self.is_game_over() {
            return 0;
        }
        let target = self.drop_target();
        let distance = (target.y() - self.active.y()) as u32;
        self.active = target;
        self.lock_and_advance();
        distance
    }

    /// Lock, clear, score, spawn the lookahead kind, draw a new lookahead,
    /// and end the game if the spawned piece does not fit.
    fn lock_and_advance(&mut self) {
        let locked = self.active;
        self.board.lock(&locked);
        let cleared = self.board.clear_full_rows();

        let before = self.progress;
        self.progress = apply_lock(before, cleared);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        if cleared > 0 {
            debug!(
                cleared,
                score = self.progress.score,
                lines = self.progress.lines,
                "rows cleared"
            );
        }
        if self.progress.level > before.level {
            info!(
                level = self.progress.level,
                drop_interval_ms = self.progress.drop_interval_ms,
                "level up"
            );
        }

        self.active = Piece::spawn(self.next);
        self.next = self.queue.next();

        let game_over = !self.board.is_valid_position(&self.active);
        if game_over {
            self.phase = Phase::GameOver;
            info!(
                score = self.progress.score,
                lines = self.progress.lines,
                level = self.progress.level,
                pieces = self.pieces_locked,
                "game over"
            );
        }

        self.last_event = Some(LockEvent {
            kind: locked.kind(),
            lines_cleared: cleared as u32,
            score_delta: self.progress.score - before.score,
            level: self.progress.level,
            game_over,
        });
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = Some(ActiveSnapshot::from(self.active));
        out.next = self.next;
        out.score = self.progress.score;
        out.lines = self.progress.lines;
        out.level = self.progress.level;
        out.drop_interval_ms = self.progress.drop_interval_ms;
        out.pieces_locked = self.pieces_locked;
        out.phase = self.phase;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Some(1))
    }
}
