//! Error types for move application and board construction.

use derive_more::{Display, Error};

/// Error returned when a move cannot be applied.
///
/// Both kinds are recoverable: the board is left untouched and the caller
/// may simply ask for another move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The coordinate lies outside the board.
    #[display("position ({row},{column}) is out of bound.")]
    OutOfBounds {
        /// Requested row.
        row: isize,
        /// Requested column.
        column: isize,
    },

    /// The target cell already holds a mark.
    #[display("position ({row},{column}) already has a mark on it.")]
    CellOccupied {
        /// Requested row.
        row: isize,
        /// Requested column.
        column: isize,
    },
}

impl MoveError {
    /// The offending `(row, column)` as passed in.
    pub fn coordinates(&self) -> (isize, isize) {
        match *self {
            MoveError::OutOfBounds { row, column } | MoveError::CellOccupied { row, column } => {
                (row, column)
            }
        }
    }
}

/// Error returned when a board cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Side length outside `1..=MAX_SIZE`.
    #[display("invalid board size {_0}: must be between 1 and {}", crate::MAX_SIZE)]
    InvalidSize(#[error(not(source))] usize),

    /// Stored cells do not fill a `size`×`size` grid.
    #[display("expected {expected} cells, found {found}")]
    CellCount {
        /// `size * size`.
        expected: usize,
        /// Cells actually present.
        found: usize,
    },
}
