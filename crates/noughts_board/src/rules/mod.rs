//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here mutates
//! state, so every check can be called at any point in a game, as often
//! as needed.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_line, check_winner};

use crate::{Board, Outcome};
use tracing::instrument;

/// Evaluates the board.
///
/// A completed line wins, found in the scan order of [`check_winner`].
/// Without one, a full board is a draw and anything else is in progress.
#[instrument(skip(board), fields(size = board.size()))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        return Outcome::Won(winner);
    }
    if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
