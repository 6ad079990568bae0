//! Headless bot-versus-bot games.

use crate::error::GameError;
use crate::games::tictactoe::{Board, Bot, Outcome, Position, Symbol};
use tracing::{debug, info, instrument};

/// Record of a finished bot-versus-bot game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoplayGame {
    /// Moves in the order they were played.
    pub moves: Vec<(Symbol, Position)>,
    /// Final outcome (never `InProgress`).
    pub outcome: Outcome,
}

/// Resets `board` and lets two bots alternate until the game ends.
///
/// The bot playing `first` moves first.
#[instrument(skip(board))]
pub fn autoplay(board: &mut Board, first: Symbol) -> Result<AutoplayGame, GameError> {
    board.reset();
    let bots = [Bot::new(first), Bot::new(first.opponent())];
    let mut moves: Vec<(Symbol, Position)> = Vec::with_capacity(9);

    loop {
        let bot = bots[moves.len() % 2];
        let position = bot.choose(board)?;
        board.set(position, bot.symbol().into());
        moves.push((bot.symbol(), position));
        debug!(symbol = %bot.symbol(), position = position.number(), "Autoplay move");

        let outcome = board.outcome();
        if outcome.is_terminal() {
            info!(?outcome, moves = moves.len(), "Autoplay finished");
            return Ok(AutoplayGame { moves, outcome });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bots_draw_from_empty_board() {
        let mut board = Board::new();
        let game = autoplay(&mut board, Symbol::X).unwrap();
        assert_eq!(game.outcome, Outcome::Draw);
        assert_eq!(game.moves.len(), 9);
        assert!(board.is_full());
        assert_eq!(game.moves[0].0, Symbol::X);
        assert_eq!(game.moves[1].0, Symbol::O);
    }
}
