//! Settings chosen before each round: who plays which symbol, and against whom.

use crate::games::tictactoe::Symbol;
use tracing::instrument;

/// Which settings row has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsField {
    /// Symbol played by the first mover.
    #[default]
    FirstSymbol,
    /// Human or computer opponent.
    Opponent,
}

impl SettingsField {
    /// Moves focus to the other row.
    pub fn next(self) -> Self {
        match self {
            Self::FirstSymbol => Self::Opponent,
            Self::Opponent => Self::FirstSymbol,
        }
    }

    /// Row index in the settings list.
    pub fn index(self) -> usize {
        match self {
            Self::FirstSymbol => 0,
            Self::Opponent => 1,
        }
    }
}

/// Options for the next round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// Symbol played by seat 0, which moves first.
    pub first_symbol: Symbol,
    /// Whether seat 1 is the computer.
    pub vs_bot: bool,
}

impl SessionSettings {
    /// Creates settings with the given values.
    pub fn new(first_symbol: Symbol, vs_bot: bool) -> Self {
        Self {
            first_symbol,
            vs_bot,
        }
    }

    /// Toggles the value of `field`.
    #[instrument(skip(self))]
    pub fn toggle(&mut self, field: SettingsField) {
        match field {
            SettingsField::FirstSymbol => self.first_symbol = self.first_symbol.opponent(),
            SettingsField::Opponent => self.vs_bot = !self.vs_bot,
        }
    }

    /// Returns the display label for the opponent option.
    pub fn opponent_label(&self) -> &'static str {
        if self.vs_bot { "Bot" } else { "Human" }
    }
}
