//! Tic-tac-toe: board, rules, move sources and turn orchestration.

mod board;
mod bot;
mod player;
mod position;
pub mod rules;
mod session;
mod types;

pub use board::Board;
pub use bot::Bot;
pub use player::Player;
pub use position::Position;
pub use session::{GameSession, Seat, SessionState, TurnResult};
pub use types::{Cell, Outcome, Symbol};
