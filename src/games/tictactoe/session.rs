//! Turn orchestration between two seats.
//!
//! A session never owns the board. The caller keeps one [`Board`] and lends
//! it to every session call, so the presentation layer can render it between
//! turns and independent games never share state.

use super::board::Board;
use super::bot::Bot;
use super::player::Player;
use super::types::{Outcome, Symbol};
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A move source occupying one of the two seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seat {
    /// Moves are chosen by a person through the presentation layer.
    Human(Player),
    /// Moves are computed.
    Bot(Bot),
}

impl Seat {
    /// Returns the symbol played from this seat.
    pub fn symbol(&self) -> Symbol {
        match self {
            Seat::Human(player) => player.symbol(),
            Seat::Bot(bot) => bot.symbol(),
        }
    }

    /// Checks if the seat is computer-controlled.
    pub fn is_bot(&self) -> bool {
        matches!(self, Seat::Bot(_))
    }
}

/// Where a session is in its round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// Waiting for the seat with this index (0 or 1) to move.
    AwaitingMove(usize),
    /// The round ended.
    Finished(Outcome),
}

/// Normalized result of one [`GameSession::play_turn`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnResult {
    /// True once the round reached a win or a draw.
    pub end: bool,
    /// End-of-round message, present exactly when `end` is true.
    pub message: Option<String>,
    /// Outcome of the board after the call.
    pub outcome: Outcome,
}

impl TurnResult {
    fn from_outcome(outcome: Outcome) -> Self {
        Self {
            end: outcome.is_terminal(),
            message: outcome.message(),
            outcome,
        }
    }
}

/// One round of tic-tac-toe between two seats.
///
/// Seat 0 is always a human and always moves first; the chosen first
/// symbol only decides which symbol seat 0 plays. Seat 1 plays the other
/// symbol and is either a second human or a [`Bot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    seats: [Seat; 2],
    active: usize,
    vs_bot: bool,
    state: SessionState,
}

impl GameSession {
    /// Resets `board` and starts a round with seat 0 to move.
    #[instrument(skip(board))]
    pub fn init(board: &mut Board, first_symbol: Symbol, vs_bot: bool) -> Self {
        board.reset();

        let second_symbol = first_symbol.opponent();
        let second = if vs_bot {
            Seat::Bot(Bot::new(second_symbol))
        } else {
            Seat::Human(Player::new(second_symbol))
        };

        info!(%first_symbol, vs_bot, "Starting game session");
        Self {
            seats: [Seat::Human(Player::new(first_symbol)), second],
            active: 0,
            vs_bot,
            state: SessionState::AwaitingMove(0),
        }
    }

    /// Plays the active human's move at the 1-based `position`.
    ///
    /// Against a bot, a non-terminal human move is answered by the bot in
    /// the same call, so the result describes the board after the reply.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the round already ended.
    /// - [`GameError::InvalidPosition`] / [`GameError::CellOccupied`] if the
    ///   human's move is rejected. The board and the turn are unchanged.
    #[instrument(skip(self, board), fields(active = self.active))]
    pub fn play_turn(&mut self, board: &mut Board, position: usize) -> Result<TurnResult, GameError> {
        if let SessionState::Finished(_) = self.state {
            warn!(position, "Move after the round ended");
            return Err(GameError::GameOver);
        }

        let outcome = match self.seats[self.active] {
            Seat::Human(player) => player.play(board, position)?,
            // Seat 0 is always human and a bot seat never waits for input.
            Seat::Bot(bot) => bot.play(board)?,
        };
        debug!(position, ?outcome, "Human moved");
        self.flip();

        if outcome.is_terminal() {
            return Ok(self.finish(outcome));
        }

        if let Seat::Bot(bot) = self.seats[self.active] {
            let outcome = bot.play(board)?;
            debug!(?outcome, "Bot replied");
            self.flip();

            if outcome.is_terminal() {
                return Ok(self.finish(outcome));
            }
        }

        self.state = SessionState::AwaitingMove(self.active);
        Ok(TurnResult::from_outcome(Outcome::InProgress))
    }

    /// Returns the current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the index (0 or 1) of the seat whose turn it is.
    pub fn active_seat(&self) -> usize {
        self.active
    }

    /// Returns the symbol of the seat whose turn it is.
    pub fn active_symbol(&self) -> Symbol {
        self.seats[self.active].symbol()
    }

    /// Returns the seat at `index`, if it exists.
    pub fn seat(&self, index: usize) -> Option<&Seat> {
        self.seats.get(index)
    }

    /// Checks if seat 1 is a bot.
    pub fn is_vs_bot(&self) -> bool {
        self.vs_bot
    }

    /// Checks if the round has ended.
    pub fn is_finished(&self) -> bool {
        matches!(self.state, SessionState::Finished(_))
    }

    fn flip(&mut self) {
        self.active = 1 - self.active;
    }

    fn finish(&mut self, outcome: Outcome) -> TurnResult {
        info!(?outcome, "Round finished");
        self.state = SessionState::Finished(outcome);
        TurnResult::from_outcome(outcome)
    }
}
