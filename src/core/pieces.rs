//! Pieces module - tetromino shape catalog
//!
//! Each kind has a fixed list of rotation states. A rotation state is 4 cell
//! offsets inside a 4x4 frame, relative to the piece anchor (frame top-left).
//! The symmetric O piece has a single state; I, S and Z have two; T, J and L
//! have four.

use crate::types::PieceKind;

/// Offset of a single cell relative to the piece anchor
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from the piece anchor
pub type PieceShape = [CellOffset; 4];

const I_SHAPES: [PieceShape; 2] = [
    [(1, 0), (1, 1), (1, 2), (1, 3)],
    [(0, 2), (1, 2), (2, 2), (3, 2)],
];

const O_SHAPES: [PieceShape; 1] = [[(1, 1), (2, 1), (1, 2), (2, 2)]];

const T_SHAPES: [PieceShape; 4] = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (1, 2)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

const S_SHAPES: [PieceShape; 2] = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
];

const Z_SHAPES: [PieceShape; 2] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(2, 0), (1, 1), (2, 1), (1, 2)],
];

const J_SHAPES: [PieceShape; 4] = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

const L_SHAPES: [PieceShape; 4] = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (0, 2)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

fn rotations(kind: PieceKind) -> &'static [PieceShape] {
    match kind {
        PieceKind::I => &I_SHAPES,
        PieceKind::O => &O_SHAPES,
        PieceKind::T => &T_SHAPES,
        PieceKind::S => &S_SHAPES,
        PieceKind::Z => &Z_SHAPES,
        PieceKind::J => &J_SHAPES,
        PieceKind::L => &L_SHAPES,
    }
}

/// Number of rotation states for a piece kind.
pub fn rotation_count(kind: PieceKind) -> u8 {
    rotations(kind).len() as u8
}

/// Get the shape (cell offsets) for a piece kind and rotation index.
///
/// Rotation indices wrap, so any `u8` is a valid argument.
pub fn shape(kind: PieceKind, rotation: u8) -> PieceShape {
    let states = rotations(kind);
    states[rotation as usize % states.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_counts_match_catalog() {
        assert_eq!(rotation_count(PieceKind::I), 2);
        assert_eq!(rotation_count(PieceKind::O), 1);
        assert_eq!(rotation_count(PieceKind::T), 4);
        assert_eq!(rotation_count(PieceKind::S), 2);
        assert_eq!(rotation_count(PieceKind::Z), 2);
        assert_eq!(rotation_count(PieceKind::J), 4);
        assert_eq!(rotation_count(PieceKind::L), 4);
    }

    #[test]
    fn all_shapes_fit_the_4x4_frame() {
        for kind in PieceKind::ALL {
            for rot in 0..rotation_count(kind) {
                for (dx, dy) in shape(kind, rot) {
                    assert!((0..4).contains(&dx), "{:?}/{} dx={}", kind, rot, dx);
                    assert!((0..4).contains(&dy), "{:?}/{} dy={}", kind, rot, dy);
                }
            }
        }
    }

    #[test]
    fn rotation_index_wraps() {
        assert_eq!(shape(PieceKind::T, 0), shape(PieceKind::T, 4));
        assert_eq!(shape(PieceKind::O, 0), shape(PieceKind::O, 3));
    }
}
