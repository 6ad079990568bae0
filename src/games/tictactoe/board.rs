//! The 3x3 board: sole source of truth for cell occupancy.

use super::position::Position;
use super::rules;
use super::types::{Cell, Outcome, Symbol};
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (positions 1-9).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting board");
        self.cells = [Cell::Empty; 9];
    }

    /// Writes `symbol` at the 1-based `position` and returns the outcome.
    ///
    /// Occupancy is not checked here; [`Player`](super::Player) refuses
    /// occupied cells before calling this.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPosition`] if `position` is outside 1-9.
    /// The board is left untouched in that case.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, position: usize, symbol: Symbol) -> Result<Outcome, GameError> {
        let pos = Position::from_number(position)?;
        self.set(pos, symbol.into());
        Ok(self.outcome())
    }

    /// Raw write of a cell, including writing `Empty` back to undo a move.
    pub fn set(&mut self, position: Position, cell: Cell) {
        self.cells[position.index()] = cell;
    }

    /// Gets the cell at the given position.
    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position).is_empty()
    }

    /// Returns all cells in position order, for rendering and inspection.
    pub fn state(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the empty positions in ascending order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Derives the current outcome from the cells.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(self)
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their number so a player can see what to type.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    Cell::Empty => (pos + 1).to_string(),
                    Cell::X => "X".to_string(),
                    Cell::O => "O".to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_move_reports_outcome() {
        let mut board = Board::new();
        assert_eq!(board.apply_move(1, Symbol::X), Ok(Outcome::InProgress));
        assert_eq!(board.get(Position::TopLeft), Cell::X);
        board.apply_move(2, Symbol::X).unwrap();
        assert_eq!(board.apply_move(3, Symbol::X), Ok(Outcome::Won(Symbol::X)));
    }

    #[test]
    fn test_apply_move_out_of_range_leaves_board() {
        let mut board = Board::new();
        board.apply_move(9, Symbol::O).unwrap();
        let before = board.clone();
        assert_eq!(board.apply_move(10, Symbol::X), Err(GameError::InvalidPosition(10)));
        assert_eq!(board.apply_move(0, Symbol::X), Err(GameError::InvalidPosition(0)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = Board::new();
        board.apply_move(5, Symbol::X).unwrap();
        board.apply_move(1, Symbol::O).unwrap();
        board.reset();
        assert_eq!(board, Board::new());
        assert_eq!(board.empty_positions().len(), 9);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.apply_move(1, Symbol::X).unwrap();
        board.apply_move(5, Symbol::O).unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
