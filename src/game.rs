//! Core game state and action handling
//!
//! Ties the board, the active piece, the bag and the score together into the
//! player-facing action machine. Every action is an atomic, rule-checked
//! transition: it succeeds, reverts to the prior state, or ends the game.
//! Once game over is reached the state is terminal and all actions are
//! no-ops; construct a fresh [`Game`] to play again.

use crate::bag::Bag;
use crate::board::Board;
use crate::piece::Piece;
use crate::position::Position;
use crate::score::{Score, ScoreTable};
use crate::tetromino::TetrominoType;
use serde::{Deserialize, Serialize};

/// Input actions the game can process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCW,
    RotateCCW,
    Hold,
}

/// Result of a downward step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The piece descended one row
    Moved,
    /// The piece could not descend and was locked into the board
    Locked { rows_cleared: usize },
}

/// The main game struct
///
/// The engine is single-threaded and synchronous: no call suspends or
/// blocks, and pacing (how often gravity calls [`Game::move_down`]) belongs
/// to the host. A host delivering input and timer ticks from different
/// contexts must serialize its calls.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    /// Current falling piece
    current: Piece,
    /// Held piece; this slot and `current` trade ownership on a hold swap
    held: Option<Piece>,
    bag: Bag,
    score: Score,
    game_over: bool,
    /// Whether hold has been used since the last lock
    hold_used: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a new game with a random piece sequence
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Create a new game with a fixed bag seed, for deterministic runs
    pub fn with_seed(seed: u64) -> Self {
        Self::with_seed_and_table(seed, ScoreTable::default())
    }

    /// Create a new game with a fixed bag seed and custom scoring values
    pub fn with_seed_and_table(seed: u64, table: ScoreTable) -> Self {
        let mut bag = Bag::with_seed(seed);
        let current = Piece::new(bag.next());
        Self {
            board: Board::new(),
            current,
            held: None,
            bag,
            score: Score::with_table(table),
            game_over: false,
            hold_used: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    /// Kind of the held piece, if any
    pub fn held(&self) -> Option<TetrominoType> {
        self.held.as_ref().map(|piece| piece.kind())
    }

    /// Kind of the next piece, without consuming it
    pub fn peek_next(&self) -> TetrominoType {
        self.bag.peek()
    }

    /// Upcoming piece kinds, next first
    pub fn preview(&self, count: usize) -> &[TetrominoType] {
        self.bag.preview(count)
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Try to move the current piece one column left
    pub fn move_left(&mut self) -> bool {
        self.try_shift(0, -1)
    }

    /// Try to move the current piece one column right
    pub fn move_right(&mut self) -> bool {
        self.try_shift(0, 1)
    }

    /// Try to rotate the current piece clockwise.
    ///
    /// A rotation that collides is rotated straight back; there is no kick
    /// search, so a rotation that would only fit after a nudge simply fails.
    pub fn rotate_cw(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.current.rotate_cw();
        if self.fits(&self.current) {
            true
        } else {
            self.current.rotate_ccw();
            false
        }
    }

    /// Try to rotate the current piece counter-clockwise
    pub fn rotate_ccw(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.current.rotate_ccw();
        if self.fits(&self.current) {
            true
        } else {
            self.current.rotate_cw();
            false
        }
    }

    /// Move the current piece down one row, locking it if it cannot descend.
    ///
    /// Serves both the gravity tick and the player's soft drop. Returns
    /// `None` once the game is over.
    pub fn move_down(&mut self) -> Option<MoveOutcome> {
        if self.game_over {
            return None;
        }
        self.current.move_by(1, 0);
        if self.fits(&self.current) {
            Some(MoveOutcome::Moved)
        } else {
            self.current.move_by(-1, 0);
            let rows_cleared = self.lock_current();
            Some(MoveOutcome::Locked { rows_cleared })
        }
    }

    /// Drop the current piece to its resting position and lock it
    pub fn hard_drop(&mut self) -> Option<MoveOutcome> {
        if self.game_over {
            return None;
        }
        let distance = self.drop_distance();
        self.current.move_by(distance, 0);
        self.score.add_hard_drop(distance as u32);
        let rows_cleared = self.lock_current();
        Some(MoveOutcome::Locked { rows_cleared })
    }

    /// How far the current piece can fall before it rests.
    ///
    /// Used by [`Game::hard_drop`] and by hosts rendering a ghost piece.
    pub fn drop_distance(&self) -> i32 {
        let mut distance = 0;
        while self
            .current
            .tile_positions()
            .all(|pos| self.board.is_empty(Position::new(pos.row + distance + 1, pos.col)))
        {
            distance += 1;
        }
        distance
    }

    /// Set the current piece aside, swapping in the held piece or the next
    /// from the bag.
    ///
    /// Allowed at most once per piece in play: the flag is cleared only when
    /// a piece locks, so hold cannot stall the game indefinitely. Both
    /// pieces restart from their spawn state after the swap.
    pub fn hold(&mut self) -> bool {
        if self.game_over || self.hold_used {
            return false;
        }

        let replacement = match self.held.take() {
            Some(mut held) => {
                held.reset();
                held
            }
            None => Piece::new(self.bag.next()),
        };
        let mut stored = std::mem::replace(&mut self.current, replacement);
        stored.reset();
        self.held = Some(stored);
        self.hold_used = true;

        // Same terminal rule as a blocked lock-spawn
        if !self.fits(&self.current) {
            self.game_over = true;
            tracing::info!(
                points = self.score.points,
                lines = self.score.lines,
                "game over: hold swap blocked"
            );
        }
        true
    }

    /// Process a host input action; no-op once the game is over
    pub fn process_action(&mut self, action: Action) {
        match action {
            Action::MoveLeft => {
                self.move_left();
            }
            Action::MoveRight => {
                self.move_right();
            }
            Action::SoftDrop => {
                self.move_down();
            }
            Action::HardDrop => {
                self.hard_drop();
            }
            Action::RotateCW => {
                self.rotate_cw();
            }
            Action::RotateCCW => {
                self.rotate_ccw();
            }
            Action::Hold => {
                self.hold();
            }
        }
    }

    fn fits(&self, piece: &Piece) -> bool {
        piece.tile_positions().all(|pos| self.board.is_empty(pos))
    }

    fn try_shift(&mut self, rows: i32, cols: i32) -> bool {
        if self.game_over {
            return false;
        }
        self.current.move_by(rows, cols);
        if self.fits(&self.current) {
            true
        } else {
            self.current.move_by(-rows, -cols);
            false
        }
    }

    /// Commit the current piece to the board, clear rows, score, and spawn
    /// the next piece; ends the game if the spawn position is blocked.
    fn lock_current(&mut self) -> usize {
        self.board.lock(&self.current);
        let rows_cleared = self.board.clear_full_rows();
        if rows_cleared > 0 {
            let gained = self.score.add_clear(rows_cleared);
            tracing::debug!(
                rows_cleared,
                gained,
                total = self.score.points,
                "rows cleared"
            );
        }
        self.hold_used = false;

        self.current = Piece::new(self.bag.next());
        if !self.fits(&self.current) {
            self.game_over = true;
            tracing::info!(
                points = self.score.points,
                lines = self.score.lines,
                "game over: spawn blocked"
            );
        }
        rows_cleared
    }
}
