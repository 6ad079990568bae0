//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// The mark a seat plays with.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Symbol {
    /// Cross.
    X,
    /// Nought.
    O,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Holds a cross.
    X,
    /// Holds a nought.
    O,
}

impl Cell {
    /// Returns the symbol in this cell, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Symbol::X),
            Cell::O => Some(Symbol::O),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Symbol> for Cell {
    fn from(symbol: Symbol) -> Self {
        match symbol {
            Symbol::X => Cell::X,
            Symbol::O => Cell::O,
        }
    }
}

/// Classification of a board: still open, won, or drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// At least one empty cell and no completed line.
    InProgress,
    /// A line of three for this symbol.
    Won(Symbol),
    /// Full board with no completed line.
    Draw,
}

impl Outcome {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the end-of-round message, or `None` while in progress.
    pub fn message(self) -> Option<String> {
        match self {
            Outcome::InProgress => None,
            Outcome::Won(symbol) => Some(format!("The winner is {} player!", symbol)),
            Outcome::Draw => Some("Draw!".to_string()),
        }
    }
}
