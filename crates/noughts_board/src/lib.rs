//! Tic-tac-toe board evaluation.
//!
//! A [`Game`] owns an N×N [`Board`], the turn marker, and a move history.
//! A driver applies a move, evaluates the [`Outcome`], and advances the
//! turn until the outcome is terminal:
//!
//! ```
//! use noughts_board::{Game, Outcome, Player};
//!
//! let mut game = Game::new();
//! for (row, column) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     game.apply_move(row, column)?;
//!     if game.evaluate_outcome().is_terminal() {
//!         break;
//!     }
//!     game.advance_turn();
//! }
//! assert_eq!(game.evaluate_outcome(), Outcome::Won(Player::Cross));
//! # Ok::<(), noughts_board::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
pub mod invariants;
pub mod rules;
mod types;

pub use board::{Board, DEFAULT_SIZE, MAX_SIZE};
pub use error::{BoardError, MoveError};
pub use game::Game;
pub use types::{Cell, Move, Outcome, Placement, Player};
