//! Win detection logic for tic-tac-toe.

use super::super::{Board, Position, Symbol};

/// The eight lines of three, in scan order: rows top to bottom, columns
/// left to right, then the two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the symbol of the first completed line in [`LINES`] order,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Symbol> {
    winning_line(board).map(|(symbol, _)| symbol)
}

/// Returns the first completed line together with its symbol.
pub fn winning_line(board: &Board) -> Option<(Symbol, [Position; 3])> {
    LINES.into_iter().find_map(|[a, b, c]| {
        let symbol = board.get(a).symbol()?;
        (board.get(b) == board.get(a) && board.get(c) == board.get(a)).then_some((symbol, [a, b, c]))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Cell;

    fn board_with(cells: &[(Position, Cell)]) -> Board {
        let mut board = Board::new();
        for &(pos, cell) in cells {
            board.set(pos, cell);
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Cell::X),
            (Position::TopCenter, Cell::X),
            (Position::TopRight, Cell::X),
        ]);
        assert_eq!(check_winner(&board), Some(Symbol::X));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Cell::O),
            (Position::Center, Cell::O),
            (Position::BottomLeft, Cell::O),
        ]);
        assert_eq!(
            winning_line(&board),
            Some((
                Symbol::O,
                [Position::TopRight, Position::Center, Position::BottomLeft]
            ))
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Cell::X),
            (Position::TopCenter, Cell::O),
            (Position::TopRight, Cell::X),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_upper_row_found_first() {
        // Unreachable in play, but the scan order must still be fixed.
        let board = board_with(&[
            (Position::BottomLeft, Cell::O),
            (Position::BottomCenter, Cell::O),
            (Position::BottomRight, Cell::O),
            (Position::TopCenter, Cell::X),
            (Position::MiddleLeft, Cell::X),
            (Position::Center, Cell::X),
            (Position::MiddleRight, Cell::X),
        ]);
        assert_eq!(check_winner(&board), Some(Symbol::X));
    }
}
