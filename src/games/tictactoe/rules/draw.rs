//! Draw detection logic for tic-tac-toe.

use super::super::Board;

/// Checks if no empty cell is left.
///
/// Only a draw when [`check_winner`](super::check_winner) also finds no line.
pub fn is_full(board: &Board) -> bool {
    board.state().iter().all(|cell| !cell.is_empty())
}
