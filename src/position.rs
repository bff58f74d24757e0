//! Grid coordinates and piece-local tile offsets

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// A (row, column) pair, used both as a board coordinate and as a tile
/// offset relative to a piece's origin.
///
/// Rows increase downward, columns increase rightward. Row 0 is the top of
/// the spawn buffer, not the top of the visible playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.row + rhs.row, self.col + rhs.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_offsets() {
        let tile = Position::new(1, 2);
        let offset = Position::new(3, 4);
        assert_eq!(tile + offset, Position::new(4, 6));
    }
}
