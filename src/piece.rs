//! Active falling piece logic
//!
//! A piece is pure geometry: a tetromino kind plus a rotation index and a
//! board-space offset. It has no knowledge of the board; callers rotate and
//! move it unconditionally and are responsible for checking the resulting
//! footprint and reverting illegal changes.

use crate::position::Position;
use crate::tetromino::TetrominoType;

/// An active falling piece
#[derive(Debug, Clone)]
pub struct Piece {
    kind: TetrominoType,
    /// Index into the kind's rotation table, always in range
    rotation_index: usize,
    /// Placement of the piece origin in board coordinates
    offset: Position,
}

impl Piece {
    /// Create a piece at its spawn offset, in its spawn rotation
    pub fn new(kind: TetrominoType) -> Self {
        Self {
            kind,
            rotation_index: 0,
            offset: kind.spawn_offset(),
        }
    }

    pub fn kind(&self) -> TetrominoType {
        self.kind
    }

    /// Numeric id of the underlying tetromino kind
    pub fn id(&self) -> u8 {
        self.kind.id()
    }

    /// Board positions of all 4 tiles in the current rotation and offset.
    ///
    /// Recomputed on every call, so the iterator can be restarted freely.
    pub fn tile_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let offset = self.offset;
        self.kind.rotations()[self.rotation_index]
            .iter()
            .map(move |&tile| tile + offset)
    }

    /// Advance to the next rotation state, wrapping around
    pub fn rotate_cw(&mut self) {
        self.rotation_index = (self.rotation_index + 1) % self.kind.rotations().len();
    }

    /// Retreat to the previous rotation state, wrapping around
    pub fn rotate_ccw(&mut self) {
        let states = self.kind.rotations().len();
        self.rotation_index = (self.rotation_index + states - 1) % states;
    }

    /// Shift the piece by the given number of rows and columns
    pub fn move_by(&mut self, rows: i32, cols: i32) {
        self.offset.row += rows;
        self.offset.col += cols;
    }

    /// Restore the spawn rotation and spawn offset
    pub fn reset(&mut self) {
        self.rotation_index = 0;
        self.offset = self.kind.spawn_offset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiles(piece: &Piece) -> Vec<Position> {
        piece.tile_positions().collect()
    }

    #[test]
    fn test_rotation_closure_cw() {
        for kind in TetrominoType::all() {
            let mut piece = Piece::new(kind);
            let spawn = tiles(&piece);
            for _ in 0..kind.rotations().len() {
                piece.rotate_cw();
            }
            assert_eq!(tiles(&piece), spawn, "{kind:?} did not return to spawn state");
        }
    }

    #[test]
    fn test_rotation_closure_ccw() {
        for kind in TetrominoType::all() {
            let mut piece = Piece::new(kind);
            let spawn = tiles(&piece);
            for _ in 0..kind.rotations().len() {
                piece.rotate_ccw();
            }
            assert_eq!(tiles(&piece), spawn, "{kind:?} did not return to spawn state");
        }
    }

    #[test]
    fn test_rotate_cw_then_ccw_is_identity() {
        let mut piece = Piece::new(TetrominoType::T);
        let spawn = tiles(&piece);
        piece.rotate_cw();
        piece.rotate_ccw();
        assert_eq!(tiles(&piece), spawn);
    }

    #[test]
    fn test_move_shifts_every_tile() {
        let mut piece = Piece::new(TetrominoType::L);
        let before = tiles(&piece);
        piece.move_by(3, -2);
        let after = tiles(&piece);
        for (a, b) in before.iter().zip(&after) {
            assert_eq!(b.row, a.row + 3);
            assert_eq!(b.col, a.col - 2);
        }
    }

    #[test]
    fn test_reset_restores_spawn_state() {
        let mut piece = Piece::new(TetrominoType::S);
        let spawn = tiles(&piece);
        piece.move_by(5, 1);
        piece.rotate_cw();
        piece.reset();
        assert_eq!(tiles(&piece), spawn);
    }

    #[test]
    fn test_tile_positions_is_restartable() {
        let piece = Piece::new(TetrominoType::J);
        assert_eq!(tiles(&piece), tiles(&piece));
    }
}
