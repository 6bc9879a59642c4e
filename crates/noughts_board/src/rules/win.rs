//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Player};
use tracing::instrument;

/// Scans one line starting at `(start_row, start_column)` and stepping by
/// `(delta_row, delta_column)` until it leaves the board.
///
/// Returns the player holding every cell on the line, or `None` if the line
/// contains an empty cell, mixes players, the start is off the board, or the
/// step is `(0, 0)`.
pub fn check_line(
    board: &Board,
    start_row: isize,
    start_column: isize,
    delta_row: isize,
    delta_column: isize,
) -> Option<Player> {
    if delta_row == 0 && delta_column == 0 {
        return None;
    }
    let owner = board.get(start_row, start_column)?.player()?;

    let step = |row: isize, column: isize| {
        Some((row.checked_add(delta_row)?, column.checked_add(delta_column)?))
    };
    let mut next = step(start_row, start_column);
    while let Some((row, column)) = next {
        match board.get(row, column) {
            Some(cell) if cell != Cell::Occupied(owner) => return None,
            Some(_) => next = step(row, column),
            None => break,
        }
    }

    Some(owner)
}

/// Checks if there is a winner on the board.
///
/// Lines are scanned rows top to bottom, then columns left to right, then
/// the top-left diagonal, then the top-right diagonal. The first complete
/// line decides.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_winner(board: &Board) -> Option<Player> {
    let n = board.size() as isize;

    let rows = (0..n).map(|row| (row, 0, 0, 1));
    let columns = (0..n).map(|column| (0, column, 1, 0));
    let diagonals = [(0, 0, 1, 1), (0, n - 1, 1, -1)];

    rows.chain(columns)
        .chain(diagonals)
        .find_map(|(r, c, dr, dc)| check_line(board, r, c, dr, dc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(cells: &[(isize, isize, Player)]) -> Board {
        let mut board = Board::new();
        for &(row, column, player) in cells {
            board.mark(row, column, player).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = marked(&[
            (0, 0, Player::Cross),
            (0, 1, Player::Cross),
            (0, 2, Player::Cross),
        ]);
        assert_eq!(check_winner(&board), Some(Player::Cross));
    }

    #[test]
    fn test_winner_middle_column() {
        let board = marked(&[
            (0, 1, Player::Circle),
            (1, 1, Player::Circle),
            (2, 1, Player::Circle),
        ]);
        assert_eq!(check_winner(&board), Some(Player::Circle));
    }

    #[test]
    fn test_winner_diagonal() {
        let board = marked(&[
            (0, 0, Player::Circle),
            (1, 1, Player::Circle),
            (2, 2, Player::Circle),
        ]);
        assert_eq!(check_winner(&board), Some(Player::Circle));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = marked(&[
            (0, 2, Player::Cross),
            (1, 1, Player::Cross),
            (2, 0, Player::Cross),
        ]);
        assert_eq!(check_winner(&board), Some(Player::Cross));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = marked(&[(0, 0, Player::Cross), (0, 1, Player::Cross)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = marked(&[
            (0, 0, Player::Cross),
            (0, 1, Player::Circle),
            (0, 2, Player::Cross),
        ]);
        assert_eq!(check_line(&board, 0, 0, 0, 1), None);
    }

    #[test]
    fn test_upper_row_wins_scan_order() {
        // Unreachable in legal play, but the scan order still decides.
        let board = marked(&[
            (2, 0, Player::Circle),
            (2, 1, Player::Circle),
            (2, 2, Player::Circle),
            (0, 0, Player::Cross),
            (0, 1, Player::Cross),
            (0, 2, Player::Cross),
        ]);
        assert_eq!(check_winner(&board), Some(Player::Cross));
    }

    #[test]
    fn test_column_scan_walks_down() {
        // A first column of X with no complete row must be found by the
        // column pass, not by re-scanning rows.
        let board = marked(&[
            (0, 0, Player::Cross),
            (1, 0, Player::Cross),
            (2, 0, Player::Cross),
            (0, 1, Player::Circle),
            (1, 1, Player::Circle),
        ]);
        assert_eq!(check_line(&board, 0, 0, 0, 1), None);
        assert_eq!(check_line(&board, 0, 0, 1, 0), Some(Player::Cross));
        assert_eq!(check_winner(&board), Some(Player::Cross));
    }

    #[test]
    fn test_four_by_four_needs_full_line() {
        let mut board = Board::with_size(4).unwrap();
        for row in 0..3 {
            board.mark(row, 3, Player::Circle).unwrap();
        }
        assert_eq!(check_winner(&board), None);
        board.mark(3, 3, Player::Circle).unwrap();
        assert_eq!(check_winner(&board), Some(Player::Circle));
    }

    #[test]
    fn test_zero_step_is_not_a_line() {
        let board = marked(&[(0, 0, Player::Cross)]);
        assert_eq!(check_line(&board, 0, 0, 0, 0), None);
    }

    #[test]
    fn test_huge_step_leaves_board() {
        let board = marked(&[(2, 2, Player::Circle)]);
        assert_eq!(
            check_line(&board, 2, 2, isize::MAX, isize::MAX),
            Some(Player::Circle)
        );
        assert_eq!(check_line(&board, 2, 2, isize::MIN, 0), Some(Player::Circle));
    }

    #[test]
    fn test_start_off_board() {
        assert_eq!(check_line(&Board::new(), 3, 0, 0, 1), None);
    }
}
