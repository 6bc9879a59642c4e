//! Board evaluator: board, turn marker, and move history.

use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use crate::rules;
use crate::{Board, BoardError, Move, MoveError, Outcome, Placement, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tic-tac-toe game engine.
///
/// The driver applies a move, evaluates the outcome, and advances the
/// turn, in that order, until the outcome is terminal. Stopping after a
/// terminal outcome is the driver's job: the engine keeps accepting moves
/// on empty cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGame")]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) history: Vec<Placement>,
}

/// Unchecked wire form of a [`Game`]. The board validates itself.
#[derive(Deserialize)]
struct RawGame {
    board: Board,
    to_move: Player,
    history: Vec<Placement>,
}

impl TryFrom<RawGame> for Game {
    type Error = InvariantViolation;

    fn try_from(raw: RawGame) -> Result<Self, Self::Error> {
        let game = Self {
            board: raw.board,
            to_move: raw.to_move,
            history: raw.history,
        };
        GameInvariants::check_all(&game).map_err(|violations| {
            let descriptions: Vec<_> = violations.into_iter().map(|v| v.description).collect();
            InvariantViolation::new(descriptions.join("; "))
        })?;
        Ok(game)
    }
}

impl Game {
    /// Creates a 3×3 game with Cross to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::Cross,
            history: Vec::new(),
        }
    }

    /// Creates a `size`×`size` game with `first` to move.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] for an unsupported side length.
    #[instrument]
    pub fn with_size(size: usize, first: Player) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::with_size(size)?,
            to_move: first,
            history: Vec::new(),
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark the next applied move places.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the placements made through this game, oldest first.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// Places the current player's mark at `(row, column)`.
    ///
    /// Does not advance the turn.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] or [`MoveError::CellOccupied`]; the game is
    /// unchanged on error, so repeating a failed call fails the same way.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, row: isize, column: isize) -> Result<Move, MoveError> {
        let at = self.board.mark(row, column, self.to_move)?;
        self.history.push(Placement::new(self.to_move, at));
        debug!(%at, moves = self.history.len(), "Mark placed");

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "history diverged from board"
        );
        Ok(at)
    }

    /// Hands the turn to the other player.
    #[instrument(skip(self), fields(from = %self.to_move))]
    pub fn advance_turn(&mut self) {
        self.to_move = self.to_move.opponent();
    }

    /// Evaluates the current board without changing anything.
    pub fn evaluate_outcome(&self) -> Outcome {
        rules::evaluate(&self.board)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
