//! Tetromino definitions and shapes
//!
//! All 7 standard tetrominoes with their rotation states, spawn offsets
//! and stable numeric ids.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// The 7 tetromino types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TetrominoType {
    I, // long bar
    J,
    L,
    O, // square
    S,
    T,
    Z,
}

const fn p(row: i32, col: i32) -> Position {
    Position::new(row, col)
}

// Tile offsets per rotation state, relative to the piece origin.
// I rotates in a 4x4 box, O sits in a 2x2 box, the rest use 3x3.
const I_TILES: [[Position; 4]; 4] = [
    [p(1, 0), p(1, 1), p(1, 2), p(1, 3)],
    [p(0, 2), p(1, 2), p(2, 2), p(3, 2)],
    [p(2, 0), p(2, 1), p(2, 2), p(2, 3)],
    [p(0, 1), p(1, 1), p(2, 1), p(3, 1)],
];

const J_TILES: [[Position; 4]; 4] = [
    [p(0, 0), p(1, 0), p(1, 1), p(1, 2)],
    [p(0, 1), p(0, 2), p(1, 1), p(2, 1)],
    [p(1, 0), p(1, 1), p(1, 2), p(2, 2)],
    [p(0, 1), p(1, 1), p(2, 0), p(2, 1)],
];

const L_TILES: [[Position; 4]; 4] = [
    [p(0, 2), p(1, 0), p(1, 1), p(1, 2)],
    [p(0, 1), p(1, 1), p(2, 1), p(2, 2)],
    [p(1, 0), p(1, 1), p(1, 2), p(2, 0)],
    [p(0, 0), p(0, 1), p(1, 1), p(2, 1)],
];

// O occupies the same cells in every orientation, so a single state suffices;
// rotating it is a legal no-op.
const O_TILES: [[Position; 4]; 1] = [[p(0, 0), p(0, 1), p(1, 0), p(1, 1)]];

const S_TILES: [[Position; 4]; 4] = [
    [p(0, 1), p(0, 2), p(1, 0), p(1, 1)],
    [p(0, 1), p(1, 1), p(1, 2), p(2, 2)],
    [p(1, 1), p(1, 2), p(2, 0), p(2, 1)],
    [p(0, 0), p(1, 0), p(1, 1), p(2, 1)],
];

const T_TILES: [[Position; 4]; 4] = [
    [p(0, 1), p(1, 0), p(1, 1), p(1, 2)],
    [p(0, 1), p(1, 1), p(1, 2), p(2, 1)],
    [p(1, 0), p(1, 1), p(1, 2), p(2, 1)],
    [p(0, 1), p(1, 0), p(1, 1), p(2, 1)],
];

const Z_TILES: [[Position; 4]; 4] = [
    [p(0, 0), p(0, 1), p(1, 1), p(1, 2)],
    [p(0, 2), p(1, 1), p(1, 2), p(2, 1)],
    [p(1, 0), p(1, 1), p(2, 1), p(2, 2)],
    [p(0, 1), p(1, 0), p(1, 1), p(2, 0)],
];

impl TetrominoType {
    /// Stable numeric id, 1..=7. Written into board cells on lock and usable
    /// by the presentation layer as a sprite/color index (0 is the empty cell).
    pub fn id(&self) -> u8 {
        match self {
            TetrominoType::I => 1,
            TetrominoType::J => 2,
            TetrominoType::L => 3,
            TetrominoType::O => 4,
            TetrominoType::S => 5,
            TetrominoType::T => 6,
            TetrominoType::Z => 7,
        }
    }

    /// All tetromino types in id order, for bag randomization
    pub fn all() -> [TetrominoType; 7] {
        [
            TetrominoType::I,
            TetrominoType::J,
            TetrominoType::L,
            TetrominoType::O,
            TetrominoType::S,
            TetrominoType::T,
            TetrominoType::Z,
        ]
    }

    /// Tile offsets for every rotation state of this tetromino
    pub fn rotations(&self) -> &'static [[Position; 4]] {
        match self {
            TetrominoType::I => &I_TILES,
            TetrominoType::J => &J_TILES,
            TetrominoType::L => &L_TILES,
            TetrominoType::O => &O_TILES,
            TetrominoType::S => &S_TILES,
            TetrominoType::T => &T_TILES,
            TetrominoType::Z => &Z_TILES,
        }
    }

    /// Spawn offset: top of the buffer rows, centered over the middle columns
    pub fn spawn_offset(&self) -> Position {
        match self {
            TetrominoType::I => p(-1, 3),
            TetrominoType::O => p(0, 4),
            _ => p(0, 3),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique_and_in_range() {
        let ids: HashSet<u8> = TetrominoType::all().iter().map(|t| t.id()).collect();
        assert_eq!(ids.len(), 7);
        assert!(ids.iter().all(|&id| (1..=7).contains(&id)));
    }

    #[test]
    fn test_every_rotation_has_four_tiles() {
        for kind in TetrominoType::all() {
            assert!(!kind.rotations().is_empty());
            for state in kind.rotations() {
                assert_eq!(state.len(), 4);
            }
        }
    }

    #[test]
    fn test_spawn_tiles_sit_in_buffer_columns() {
        // Every kind spawns within rows 0..2 and columns 3..=6
        for kind in TetrominoType::all() {
            let offset = kind.spawn_offset();
            for tile in &kind.rotations()[0] {
                let pos = *tile + offset;
                assert!((0..2).contains(&pos.row), "{kind:?} spawns at row {}", pos.row);
                assert!((3..=6).contains(&pos.col), "{kind:?} spawns at col {}", pos.col);
            }
        }
    }
}
