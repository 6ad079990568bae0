//! Named board positions, numbered 1-9 row-major.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Positions are numbered 1-9 left-to-right, top-to-bottom, which is how
/// the presentation layer and the session address cells.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (1)
    TopLeft,
    /// Top-center (2)
    TopCenter,
    /// Top-right (3)
    TopRight,
    /// Middle-left (4)
    MiddleLeft,
    /// Center (5)
    Center,
    /// Middle-right (6)
    MiddleRight,
    /// Bottom-left (7)
    BottomLeft,
    /// Bottom-center (8)
    BottomCenter,
    /// Bottom-right (9)
    BottomRight,
}

impl Position {
    /// All 9 positions in ascending order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to its 0-based array offset.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts position to its 1-based cell number.
    pub fn number(self) -> usize {
        self.index() + 1
    }

    /// Creates position from a 0-based array offset.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from a 1-based cell number.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPosition`] for anything outside 1-9.
    #[instrument]
    pub fn from_number(number: usize) -> Result<Self, GameError> {
        number
            .checked_sub(1)
            .and_then(Self::from_index)
            .ok_or(GameError::InvalidPosition(number))
    }

    /// Returns the row (0-2) of this position.
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Returns the column (0-2) of this position.
    pub fn col(self) -> usize {
        self.index() % 3
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
