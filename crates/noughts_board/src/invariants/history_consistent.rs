//! History consistency invariant: history length matches marked cells.

use super::Invariant;
use crate::{Cell, Game};

/// Invariant: history length equals the number of occupied cells.
///
/// Every placement corresponds to exactly one marked cell. No moves are
/// missing and no cells are filled without a move.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let occupied = game
            .board()
            .cells()
            .iter()
            .filter(|c| **c != Cell::Empty)
            .count();

        game.history().len() == occupied
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
