//! Computer move source: exhaustive minimax over the 3x3 board.
//!
//! The tree is small enough (at most 9! move orders) that the search runs to
//! the end of every line with no pruning, depth limit or evaluation
//! heuristic. Candidate moves are written onto the caller's board and
//! undone in place, so the board is unchanged when a search returns.

use super::board::Board;
use super::position::Position;
use super::types::{Cell, Outcome, Symbol};
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a line the bot wins.
const WIN: i32 = 1;
/// Score of a line the bot loses.
const LOSS: i32 = -1;
/// Score of a drawn line.
const DRAW: i32 = 0;

/// A computer seat that always plays an optimal move for its symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bot {
    symbol: Symbol,
}

impl Bot {
    /// Creates a bot bound to `symbol`.
    pub fn new(symbol: Symbol) -> Self {
        Self { symbol }
    }

    /// Returns the symbol this bot places.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Selects the best position without committing it.
    ///
    /// Every empty cell is tried in ascending order; ties keep the first.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayOnFullBoard`] if no cell is empty.
    #[instrument(skip(self, board), fields(symbol = %self.symbol))]
    pub fn choose(&self, board: &mut Board) -> Result<Position, GameError> {
        let mut best: Option<(Position, i32)> = None;

        for pos in board.empty_positions() {
            board.set(pos, self.symbol.into());
            let outcome = board.outcome();
            let score = self.minimax(board, outcome, false);
            board.set(pos, Cell::Empty);

            debug!(position = pos.number(), score, "Scored candidate");
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        best.map(|(pos, _)| pos).ok_or(GameError::PlayOnFullBoard)
    }

    /// Chooses a position and commits it to the board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayOnFullBoard`] if no cell is empty.
    #[instrument(skip(self, board), fields(symbol = %self.symbol))]
    pub fn play(&self, board: &mut Board) -> Result<Outcome, GameError> {
        let pos = self.choose(board)?;
        debug!(position = pos.number(), "Bot plays");
        board.set(pos, self.symbol.into());
        Ok(board.outcome())
    }

    /// Scores `board` from this bot's point of view.
    ///
    /// `outcome` must be the outcome of `board` as it stands.
    /// `is_maximizing` is true when the bot is the side to move.
    pub fn minimax(&self, board: &mut Board, outcome: Outcome, is_maximizing: bool) -> i32 {
        match outcome {
            Outcome::Won(symbol) if symbol == self.symbol => return WIN,
            Outcome::Won(_) => return LOSS,
            Outcome::Draw => return DRAW,
            Outcome::InProgress => {}
        }

        let to_move = if is_maximizing {
            self.symbol
        } else {
            self.symbol.opponent()
        };

        let mut folded = if is_maximizing { i32::MIN } else { i32::MAX };
        for pos in board.empty_positions() {
            board.set(pos, to_move.into());
            let outcome = board.outcome();
            let score = self.minimax(board, outcome, !is_maximizing);
            board.set(pos, Cell::Empty);

            folded = if is_maximizing {
                folded.max(score)
            } else {
                folded.min(score)
            };
        }
        folded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Cell::{Empty as E, O, X};

    fn board_from(cells: [Cell; 9]) -> Board {
        let mut board = Board::new();
        for (pos, cell) in Position::ALL.into_iter().zip(cells) {
            board.set(pos, cell);
        }
        board
    }

    #[test]
    fn test_takes_immediate_win() {
        // X X _ / O O _ / _ _ _  with X to move
        let mut board = board_from([X, X, E, O, O, E, E, E, E]);
        let bot = Bot::new(Symbol::X);
        assert_eq!(bot.choose(&mut board), Ok(Position::TopRight));
        assert_eq!(bot.play(&mut board), Ok(Outcome::Won(Symbol::X)));
    }

    #[test]
    fn test_blocks_opponent_line() {
        // X X _ / _ O _ / _ _ _  with O to move: only 3 avoids a loss
        let mut board = board_from([X, X, E, E, O, E, E, E, E]);
        let bot = Bot::new(Symbol::O);
        assert_eq!(bot.choose(&mut board), Ok(Position::TopRight));
    }

    #[test]
    fn test_choose_leaves_board_untouched() {
        let mut board = board_from([X, E, E, E, O, E, E, E, X]);
        let before = board.clone();
        Bot::new(Symbol::O).choose(&mut board).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_play_changes_exactly_one_cell() {
        let mut board = board_from([X, E, E, E, E, E, E, E, E]);
        let before = board.clone();
        Bot::new(Symbol::O).play(&mut board).unwrap();
        let changed = Position::ALL
            .into_iter()
            .filter(|pos| board.get(*pos) != before.get(*pos))
            .collect::<Vec<_>>();
        assert_eq!(changed.len(), 1);
        assert_eq!(board.get(changed[0]), Cell::O);
    }

    #[test]
    fn test_full_board_is_refused() {
        let mut board = board_from([X, O, X, X, O, O, O, X, X]);
        assert_eq!(
            Bot::new(Symbol::X).play(&mut board),
            Err(GameError::PlayOnFullBoard)
        );
    }

    #[test]
    fn test_minimax_terminal_scores() {
        let bot = Bot::new(Symbol::O);
        let mut board = Board::new();
        assert_eq!(bot.minimax(&mut board, Outcome::Won(Symbol::O), true), WIN);
        assert_eq!(bot.minimax(&mut board, Outcome::Won(Symbol::X), false), LOSS);
        assert_eq!(bot.minimax(&mut board, Outcome::Draw, true), DRAW);
    }

    #[test]
    fn test_ties_go_to_lowest_position() {
        // Every reply from here is a forced draw, so all candidates tie.
        // X O X / X O O / O X _  -> only 9 left
        let mut board = board_from([X, O, X, X, O, O, O, X, E]);
        assert_eq!(Bot::new(Symbol::X).choose(&mut board), Ok(Position::BottomRight));

        // X O X / _ O _ / O X _ : X to move. Cells 4, 6 and 9 all draw.
        let mut board = board_from([X, O, X, E, O, E, O, X, E]);
        assert_eq!(Bot::new(Symbol::X).choose(&mut board), Ok(Position::MiddleLeft));
    }
}
