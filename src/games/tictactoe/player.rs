//! Human move source.

use super::board::Board;
use super::position::Position;
use super::types::{Outcome, Symbol};
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// A human seat: applies caller-chosen positions with its symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    symbol: Symbol,
}

impl Player {
    /// Creates a player bound to `symbol`.
    pub fn new(symbol: Symbol) -> Self {
        Self { symbol }
    }

    /// Returns the symbol this player places.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Places this player's symbol at the 1-based `position`.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidPosition`] if `position` is outside 1-9.
    /// - [`GameError::CellOccupied`] if the cell already holds a symbol.
    ///
    /// The board is unchanged on error.
    #[instrument(skip(self, board), fields(symbol = %self.symbol))]
    pub fn play(&self, board: &mut Board, position: usize) -> Result<Outcome, GameError> {
        let pos = Position::from_number(position)?;
        if !board.is_empty(pos) {
            warn!(position, "Rejected move onto occupied cell");
            return Err(GameError::CellOccupied(pos));
        }
        board.apply_move(position, self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Cell;

    #[test]
    fn test_play_places_symbol() {
        let mut board = Board::new();
        let player = Player::new(Symbol::O);
        assert_eq!(player.play(&mut board, 4), Ok(Outcome::InProgress));
        assert_eq!(board.get(Position::MiddleLeft), Cell::O);
    }

    #[test]
    fn test_play_refuses_occupied_cell() {
        let mut board = Board::new();
        Player::new(Symbol::X).play(&mut board, 5).unwrap();
        let before = board.clone();
        assert_eq!(
            Player::new(Symbol::O).play(&mut board, 5),
            Err(GameError::CellOccupied(Position::Center))
        );
        assert_eq!(board, before);
    }
}
