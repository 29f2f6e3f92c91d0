//! Pieces module - the tetromino catalog
//!
//! Every (kind, rotation) pair maps to four offsets relative to the piece anchor.
//! Offsets use the grid's orientation: positive `dy` points up.
//! Rotation happens in place around the anchor; there is no wall-kick table.

use crate::types::{PieceKind, Rotation};

/// Offset of a single mino relative to the piece anchor
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the anchor
pub type PieceShape = [MinoOffset; 4];

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn offsets(kind: PieceKind, rotation: Rotation) -> PieceShape {
    CATALOG[kind.index()][rotation.index()]
}

/// Offsets indexed by `[kind][rotation]`, kinds in [`PieceKind::ALL`] order.
static CATALOG: [[PieceShape; 4]; 7] = [
    // I: horizontal bar, vertical bar through the anchor
    [
        [(-2, 0), (-1, 0), (0, 0), (1, 0)],
        [(0, 1), (0, 0), (0, -1), (0, -2)],
        [(-1, 0), (0, 0), (1, 0), (2, 0)],
        [(0, 2), (0, 1), (0, 0), (0, -1)],
    ],
    // O: identical in all four states
    [
        [(0, 0), (1, 0), (0, 1), (1, 1)],
        [(0, 0), (1, 0), (0, 1), (1, 1)],
        [(0, 0), (1, 0), (0, 1), (1, 1)],
        [(0, 0), (1, 0), (0, 1), (1, 1)],
    ],
    // T
    [
        [(-1, 0), (0, 0), (1, 0), (0, 1)],
        [(0, 1), (0, 0), (0, -1), (1, 0)],
        [(-1, 0), (0, 0), (1, 0), (0, -1)],
        [(0, 1), (0, 0), (0, -1), (-1, 0)],
    ],
    // S
    [
        [(-1, 0), (0, 0), (0, 1), (1, 1)],
        [(0, 1), (0, 0), (1, 0), (1, -1)],
        [(-1, -1), (0, -1), (0, 0), (1, 0)],
        [(-1, 1), (-1, 0), (0, 0), (0, -1)],
    ],
    // Z
    [
        [(-1, 1), (0, 1), (0, 0), (1, 0)],
        [(1, 1), (1, 0), (0, 0), (0, -1)],
        [(-1, 0), (0, 0), (0, -1), (1, -1)],
        [(0, 1), (0, 0), (-1, 0), (-1, -1)],
    ],
    // J
    [
        [(-1, 1), (-1, 0), (0, 0), (1, 0)],
        [(1, 1), (0, 1), (0, 0), (0, -1)],
        [(-1, 0), (0, 0), (1, 0), (1, -1)],
        [(0, 1), (0, 0), (0, -1), (-1, -1)],
    ],
    // L
    [
        [(1, 1), (-1, 0), (0, 0), (1, 0)],
        [(0, 1), (0, 0), (0, -1), (1, -1)],
        [(-1, -1), (-1, 0), (0, 0), (1, 0)],
        [(-1, 1), (0, 1), (0, 0), (0, -1)],
    ],
];

#[cfg(test)]
mod tests {
    use super::*;

    const ROTATIONS: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    #[test]
    fn every_entry_has_four_distinct_offsets() {
        for kind in PieceKind::ALL {
            for rotation in ROTATIONS {
                let shape = offsets(kind, rotation);
                for i in 0..4 {
                    for j in (i + 1)..4 {
                        assert_ne!(shape[i], shape[j], "{:?} {:?}", kind, rotation);
                    }
                }
            }
        }
    }

    #[test]
    fn square_is_rotation_invariant() {
        let north = offsets(PieceKind::O, Rotation::North);
        for rotation in ROTATIONS {
            assert_eq!(offsets(PieceKind::O, rotation), north);
        }
    }

    #[test]
    fn spawn_shapes_fit_below_the_top_row() {
        // Spawn anchor sits one row below the top, so north shapes may reach at most dy = 1.
        for kind in PieceKind::ALL {
            let shape = offsets(kind, Rotation::North);
            assert!(shape.iter().all(|&(_, dy)| (0..=1).contains(&dy)));
        }
    }

    #[test]
    fn i_piece_lies_flat_then_stands() {
        assert_eq!(
            offsets(PieceKind::I, Rotation::North),
            [(-2, 0), (-1, 0), (0, 0), (1, 0)]
        );
        assert!(offsets(PieceKind::I, Rotation::East)
            .iter()
            .all(|&(dx, _)| dx == 0));
    }
}
