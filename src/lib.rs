//! Strictly Tic-Tac-Toe library - a small, strictly typed tic-tac-toe engine
//!
//! # Architecture
//!
//! - **Board**: the sole source of truth for cell occupancy
//! - **Player / Bot**: move sources; the bot searches the full game tree
//! - **GameSession**: turn orchestration over a board lent by the caller
//! - **TUI**: terminal front end built on ratatui
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Board, GameSession, Symbol};
//!
//! let mut board = Board::new();
//! let mut session = GameSession::init(&mut board, Symbol::X, true);
//! let result = session.play_turn(&mut board, 5)?;
//! assert!(!result.end);
//! # Ok::<(), strictly_tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod autoplay;
mod config;
mod error;
mod games;
mod tui;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Bot, Cell, GameSession, Outcome, Player, Position, Seat, SessionState, Symbol,
    TurnResult, rules,
};

// Crate-level exports - Errors
pub use error::GameError;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_PATH};

// Crate-level exports - Front ends
pub use autoplay::{AutoplayGame, autoplay};
pub use tui::run_tui;
