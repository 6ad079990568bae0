//! Error types for tic-tac-toe moves.

use crate::games::tictactoe::Position;

/// Error that can occur when applying or selecting a move.
///
/// The presentation layer is expected to only offer empty, in-range cells,
/// so `InvalidPosition` and `CellOccupied` indicate a caller bug rather than
/// a user-facing condition. They are still reported instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The position is outside 1-9.
    #[display("Position {} is outside the board (expected 1-9)", _0)]
    InvalidPosition(usize),

    /// The cell at the position already holds a symbol.
    #[display("Cell {} ({}) is already occupied", _0.number(), _0)]
    CellOccupied(Position),

    /// The bot was asked to move with no empty cell left.
    #[display("Bot cannot move on a full board")]
    PlayOnFullBoard,

    /// The session has already reached a win or a draw.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_cell() {
        let err = GameError::CellOccupied(Position::Center);
        assert_eq!(err.to_string(), "Cell 5 (Center) is already occupied");
        assert!(GameError::InvalidPosition(10).to_string().contains("10"));
    }
}
