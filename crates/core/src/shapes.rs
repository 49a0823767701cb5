//! Shape catalog - rotation states for every piece kind
//!
//! Each kind owns an ordered list of rotation states; each state is exactly
//! four (x, y) offsets from the piece anchor, y growing downward.
//! O has a single state, I/S/Z two, J/L/T four.

use crate::types::PieceKind;

/// Offset of a single mino relative to piece origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece origin
pub type PieceShape = [MinoOffset; 4];

const I_STATES: [PieceShape; 2] = [
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    [(2, 0), (2, 1), (2, 2), (2, 3)],
];

const J_STATES: [PieceShape; 4] = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
];

const L_STATES: [PieceShape; 4] = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 1), (0, 2)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

const O_STATES: [PieceShape; 1] = [[(1, 0), (2, 0), (1, 1), (2, 1)]];

const S_STATES: [PieceShape; 2] = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
];

const T_STATES: [PieceShape; 4] = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (1, 2)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

const Z_STATES: [PieceShape; 2] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(2, 0), (1, 1), (2, 1), (1, 2)],
];

/// All rotation states of `kind`, in clockwise order.
pub fn rotation_states(kind: PieceKind) -> &'static [PieceShape] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::Z => &Z_STATES,
    }
}

/// Number of distinct rotation states for `kind`.
pub fn rotation_count(kind: PieceKind) -> u8 {
    rotation_states(kind).len() as u8
}

/// Get the shape (mino offsets) for a piece kind and rotation index.
///
/// # Panics
///
/// Panics if `rotation` is not a valid state index for `kind`.
pub fn get_shape(kind: PieceKind, rotation: u8) -> PieceShape {
    let states = rotation_states(kind);
    assert!(
        (rotation as usize) < states.len(),
        "rotation {} out of range for {:?} ({} states)",
        rotation,
        kind,
        states.len()
    );
    states[rotation as usize]
}

/// Shape of a freshly spawned piece (rotation 0).
pub fn spawn_shape(kind: PieceKind) -> PieceShape {
    rotation_states(kind)[0]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_counts_match_kind_symmetry() {
        assert_eq!(rotation_count(PieceKind::O), 1);
        assert_eq!(rotation_count(PieceKind::I), 2);
        assert_eq!(rotation_count(PieceKind::S), 2);
        assert_eq!(rotation_count(PieceKind::Z), 2);
        assert_eq!(rotation_count(PieceKind::J), 4);
        assert_eq!(rotation_count(PieceKind::L), 4);
        assert_eq!(rotation_count(PieceKind::T), 4);
    }

    #[test]
    fn every_state_has_four_distinct_minos() {
        for kind in PieceKind::ALL {
            for shape in rotation_states(kind) {
                for (i, a) in shape.iter().enumerate() {
                    for b in &shape[i + 1..] {
                        assert_ne!(a, b, "{:?} has a duplicated mino", kind);
                    }
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn get_shape_rejects_unknown_rotation() {
        get_shape(PieceKind::O, 1);
    }
}
