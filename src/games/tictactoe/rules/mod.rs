//! Game rules for tic-tac-toe.
//!
//! Pure functions that classify a board. Rules are kept apart from board
//! storage so the search and the session share one definition of a win.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, winning_line, LINES};

use super::{Board, Outcome};

/// Derives the outcome of a board: a completed line wins, otherwise a full
/// board is a draw, otherwise the game is still in progress.
pub fn outcome(board: &Board) -> Outcome {
    if let Some(symbol) = check_winner(board) {
        Outcome::Won(symbol)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
