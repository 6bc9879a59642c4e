//! Square board storage.

use crate::error::{BoardError, MoveError};
use crate::types::{Cell, Move, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of a standard board.
pub const DEFAULT_SIZE: usize = 3;

/// Largest supported side length.
pub const MAX_SIZE: usize = 26;

/// N×N board of cells in row-major order.
///
/// The side length is fixed at construction. Cells only ever go from
/// [`Cell::Empty`] to [`Cell::Occupied`]; nothing clears them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let board = Self::with_size(raw.size)?;
        if raw.cells.len() != board.cells.len() {
            return Err(BoardError::CellCount {
                expected: board.cells.len(),
                found: raw.cells.len(),
            });
        }
        Ok(Self {
            cells: raw.cells,
            ..board
        })
    }
}

impl Board {
    /// Creates an empty 3×3 board.
    pub fn new() -> Self {
        Self {
            size: DEFAULT_SIZE,
            cells: vec![Cell::Empty; DEFAULT_SIZE * DEFAULT_SIZE],
        }
    }

    /// Creates an empty `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] unless `1 <= size <= MAX_SIZE`.
    #[instrument]
    pub fn with_size(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_SIZE {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Cell::Empty; size * size],
        })
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Flat index for signed coordinates, `None` when off the board.
    fn index(&self, row: isize, column: isize) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let column = usize::try_from(column).ok()?;
        (row < self.size && column < self.size).then(|| row * self.size + column)
    }

    /// Returns the cell at `(row, column)`, or `None` when off the board.
    pub fn get(&self, row: isize, column: isize) -> Option<Cell> {
        self.index(row, column).map(|idx| self.cells[idx])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// Coordinates of every empty cell in row-major order.
    pub fn empty_cells(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(idx, _)| Move::new(idx / self.size, idx % self.size))
            .collect()
    }

    /// Places `player`'s mark at `(row, column)`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if either coordinate is outside `[0, size)`.
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark.
    ///
    /// The board is unchanged on error.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn mark(&mut self, row: isize, column: isize, player: Player) -> Result<Move, MoveError> {
        let idx = self
            .index(row, column)
            .ok_or(MoveError::OutOfBounds { row, column })?;

        if self.cells[idx] != Cell::Empty {
            return Err(MoveError::CellOccupied { row, column });
        }

        self.cells[idx] = Cell::Occupied(player);
        Ok(Move::new(idx / self.size, idx % self.size))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rule = "-".repeat(self.size * 4);
        for (i, row) in self.rows().enumerate() {
            for (j, cell) in row.iter().enumerate() {
                let symbol = cell.player().map_or(' ', Player::symbol);
                write!(f, " {}", symbol)?;
                if j + 1 != self.size {
                    write!(f, " |")?;
                }
            }
            if i + 1 != self.size {
                write!(f, "\n{}", rule)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.size(), 3);
        assert!(board.cells().iter().all(|c| *c == Cell::Empty));
        assert_eq!(board.empty_cells().len(), 9);
    }

    #[test]
    fn test_with_size_rejects_zero_and_oversized() {
        assert_eq!(Board::with_size(0), Err(BoardError::InvalidSize(0)));
        assert_eq!(
            Board::with_size(MAX_SIZE + 1),
            Err(BoardError::InvalidSize(MAX_SIZE + 1))
        );
        assert_eq!(Board::with_size(5).unwrap().cells().len(), 25);
    }

    #[test]
    fn test_mark_sets_cell() {
        let mut board = Board::new();
        let mv = board.mark(1, 2, Player::Circle).unwrap();
        assert_eq!(mv, Move::new(1, 2));
        assert_eq!(board.get(1, 2), Some(Cell::Occupied(Player::Circle)));
        assert_eq!(board.empty_cells().len(), 8);
    }

    #[test]
    fn test_mark_out_of_bounds() {
        let mut board = Board::new();
        for (row, column) in [(-1, 0), (0, -1), (3, 0), (0, 3), (-1, 3)] {
            assert_eq!(
                board.mark(row, column, Player::Cross),
                Err(MoveError::OutOfBounds { row, column })
            );
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_mark_occupied_leaves_cell_alone() {
        let mut board = Board::new();
        board.mark(0, 0, Player::Cross).unwrap();
        assert_eq!(
            board.mark(0, 0, Player::Circle),
            Err(MoveError::CellOccupied { row: 0, column: 0 })
        );
        assert_eq!(board.get(0, 0), Some(Cell::Occupied(Player::Cross)));
    }

    #[test]
    fn test_deserialize_round_trips() {
        let mut board = Board::with_size(4).unwrap();
        board.mark(2, 3, Player::Cross).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
    }

    #[test]
    fn test_deserialize_rejects_wrong_cell_count() {
        let err = serde_json::from_str::<Board>(r#"{"size":3,"cells":[]}"#).unwrap_err();
        assert!(err.to_string().contains("expected 9 cells, found 0"), "{}", err);
    }

    #[test]
    fn test_deserialize_rejects_invalid_size() {
        assert!(serde_json::from_str::<Board>(r#"{"size":0,"cells":[]}"#).is_err());
        let cells = vec!["Empty"; (MAX_SIZE + 1) * (MAX_SIZE + 1)];
        let json = serde_json::json!({ "size": MAX_SIZE + 1, "cells": cells });
        assert!(serde_json::from_value::<Board>(json).is_err());
    }

    #[test]
    fn test_get_off_board() {
        let board = Board::new();
        assert_eq!(board.get(-1, 0), None);
        assert_eq!(board.get(0, 3), None);
    }

    #[test]
    fn test_display_matches_console_layout() {
        let mut board = Board::new();
        board.mark(0, 0, Player::Cross).unwrap();
        board.mark(1, 1, Player::Circle).unwrap();
        let expected = " X |   |  \n------------\n   | O |  \n------------\n   |   |  \n";
        assert_eq!(board.to_string(), expected);
    }
}
