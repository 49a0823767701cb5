//! Piece module - the active falling piece as an immutable value
//!
//! Every transform returns a new [`Piece`]; nothing here checks legality.
//! Callers validate candidates against the [`Board`](crate::Board).

use crate::shapes::{get_shape, rotation_count, PieceShape};
use crate::types::{PieceKind, RotateDir, SPAWN_POSITION};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    rotation: u8,
    x: i8,
    y: i8,
}

impl Piece {
    /// Create a piece at an explicit anchor and rotation index.
    ///
    /// # Panics
    ///
    /// Panics if `rotation` is not a valid state index for `kind`.
    pub fn new(kind: PieceKind, rotation: u8, x: i8, y: i8) -> Self {
        assert!(
            rotation < rotation_count(kind),
            "rotation {} out of range for {:?}",
            rotation,
            kind
        );
        Self {
            kind,
            rotation,
            x,
            y,
        }
    }

    /// Create a new piece at the spawn position with rotation 0
    pub fn spawn(kind: PieceKind) -> Self {
        let (x, y) = SPAWN_POSITION;
        Self::new(kind, 0, x, y)
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn rotation(&self) -> u8 {
        self.rotation
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    /// Anchor position as (x, y)
    pub fn position(&self) -> (i8, i8) {
        (self.x, self.y)
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute board coordinates of the four minos
    ///
    /// Coordinates saturate at the `i8` range, which is far outside the board.
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape()
            .map(|(dx, dy)| (self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }

    /// Copy of this piece with the anchor shifted by (dx, dy)
    ///
    /// Never fails; the anchor saturates at the `i8` range.
    pub fn moved(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// Copy of this piece one rotation state further in `dir`
    pub fn rotated(&self, dir: RotateDir) -> Self {
        let count = rotation_count(self.kind) as i8;
        let rotation = (self.rotation as i8 + dir.step()).rem_euclid(count) as u8;
        Self { rotation, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_uses_centered_anchor_and_first_state() {
        let piece = Piece::spawn(PieceKind::T);
        assert_eq!(piece.kind(), PieceKind::T);
        assert_eq!(piece.rotation(), 0);
        assert_eq!(piece.position(), (3, 0));
    }

    #[test]
    fn cells_translate_offsets_by_anchor() {
        let piece = Piece::spawn(PieceKind::I);
        assert_eq!(piece.cells(), [(3, 1), (4, 1), (5, 1), (6, 1)]);
    }

    #[test]
    fn moved_leaves_original_untouched() {
        let piece = Piece::spawn(PieceKind::O);
        let shifted = piece.moved(-2, 5);
        assert_eq!(piece.position(), (3, 0));
        assert_eq!(shifted.position(), (1, 5));
        assert_eq!(shifted.rotation(), piece.rotation());
    }

    #[test]
    fn moved_saturates_instead_of_overflowing() {
        let piece = Piece::new(PieceKind::I, 0, 120, 0).moved(10, 0);
        assert_eq!(piece.x(), i8::MAX);
        assert!(piece.cells().iter().all(|&(x, _)| x == i8::MAX));

        let piece = Piece::spawn(PieceKind::T).moved(0, 127).moved(0, 127);
        assert_eq!(piece.y(), i8::MAX);
        assert!(piece.cells().iter().all(|&(_, y)| y > 100));
    }

    #[test]
    fn counter_clockwise_wraps_to_last_state() {
        let piece = Piece::spawn(PieceKind::J).rotated(RotateDir::Ccw);
        assert_eq!(piece.rotation(), 3);

        let piece = Piece::spawn(PieceKind::S).rotated(RotateDir::Ccw);
        assert_eq!(piece.rotation(), 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn new_rejects_rotation_beyond_kind_states() {
        Piece::new(PieceKind::I, 2, 0, 0);
    }
}
