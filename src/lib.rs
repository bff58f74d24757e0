//! A falling-block puzzle game engine
//!
//! The playfield, the pieces and the rules - nothing else. Rendering, input
//! mapping and timing belong to the host: it calls [`Game::move_down`] on
//! its gravity tick, maps input events onto the other [`Game`] actions, and
//! re-reads state to redraw after every call.
//!
//! ```
//! use blockfall::{Game, MoveOutcome};
//!
//! let mut game = Game::with_seed(2024);
//! game.move_left();
//! game.rotate_cw();
//! if let Some(MoveOutcome::Locked { rows_cleared }) = game.hard_drop() {
//!     assert_eq!(rows_cleared, 0);
//! }
//! assert!(!game.game_over());
//! ```
//!
//! State transitions worth watching (locks, line clears, game over) are
//! emitted as `tracing` events; install a subscriber in the host to see
//! them.

pub mod bag;
pub mod board;
pub mod game;
pub mod piece;
pub mod position;
pub mod score;
pub mod tetromino;

pub use bag::Bag;
pub use board::{BOARD_COLS, BOARD_ROWS, BUFFER_ROWS, Board};
pub use game::{Action, Game, MoveOutcome};
pub use piece::Piece;
pub use position::Position;
pub use score::{Score, ScoreTable};
pub use tetromino::TetrominoType;
