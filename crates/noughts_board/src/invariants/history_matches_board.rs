//! Every recorded placement is still on the board, under the same player.

use super::Invariant;
use crate::{Cell, Game};

/// Invariant: each placement's cell holds that placement's player.
///
/// Since cells are never cleared or overwritten, this holds for the whole
/// game once it holds after each move.
pub struct HistoryMatchesBoardInvariant;

impl Invariant<Game> for HistoryMatchesBoardInvariant {
    fn holds(game: &Game) -> bool {
        game.history().iter().all(|placement| {
            let (row, column) = (placement.at.row as isize, placement.at.column as isize);
            game.board().get(row, column) == Some(Cell::Occupied(placement.player))
        })
    }

    fn description() -> &'static str {
        "Every placement in history is on the board"
    }
}
