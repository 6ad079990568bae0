//! Application state and key handling.
//!
//! The app plays the role of the presentation layer: it keeps the one
//! [`Board`], renders it, and forwards selected cells into the
//! [`GameSession`]. Only empty cells are ever forwarded.

use crossterm::event::{KeyCode, KeyEvent};
use tracing::{debug, info, instrument, warn};

use super::input::move_cursor;
use super::settings::{SessionSettings, SettingsField};
use crate::games::tictactoe::{Board, GameSession, Position};

/// Which view is in front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The settings dialog; shown on start and before each restart.
    Settings,
    /// The board accepts moves.
    Playing,
    /// The round ended; the result dialog is shown over the board.
    Finished,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    board: Board,
    session: Option<GameSession>,
    settings: SessionSettings,
    focus: SettingsField,
    screen: Screen,
    cursor: Position,
    status: String,
    result_message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates the app with the settings dialog open.
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            board: Board::new(),
            session: None,
            settings,
            focus: SettingsField::default(),
            screen: Screen::Settings,
            cursor: Position::Center,
            status: "Choose settings and press Enter to start.".to_string(),
            result_message: None,
            should_quit: false,
        }
    }

    /// Gets the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Gets the current session, if a round has been started.
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Gets the settings for the next round.
    pub fn settings(&self) -> SessionSettings {
        self.settings
    }

    /// Gets the focused settings row.
    pub fn focus(&self) -> SettingsField {
        self.focus
    }

    /// Gets the screen in front.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Gets the end-of-round message.
    pub fn result_message(&self) -> Option<&str> {
        self.result_message.as_deref()
    }

    /// Checks if the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(screen = ?self.screen))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
            info!("User quit");
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Settings => self.handle_settings_key(key.code),
            Screen::Playing => self.handle_playing_key(key.code),
            Screen::Finished => self.handle_finished_key(key.code),
        }
    }

    fn handle_settings_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Down | KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => self.settings.toggle(self.focus),
            KeyCode::Enter => self.start_game(),
            KeyCode::Esc if self.session.as_ref().is_some_and(|s| !s.is_finished()) => {
                debug!("Closing settings, resuming round");
                self.screen = Screen::Playing;
            }
            _ => {}
        }
    }

    fn handle_playing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) => {
                if let Some(pos) = c
                    .to_digit(10)
                    .and_then(|d| Position::from_number(d as usize).ok())
                {
                    self.cursor = pos;
                    self.play(pos);
                } else if c == 's' || c == 'S' {
                    self.screen = Screen::Settings;
                }
            }
            _ => {}
        }
    }

    fn handle_finished_key(&mut self, code: KeyCode) {
        if matches!(code, KeyCode::Enter | KeyCode::Char('r') | KeyCode::Char('R')) {
            debug!("Restart requested");
            self.screen = Screen::Settings;
            self.status = "Choose settings and press Enter to start.".to_string();
        }
    }

    /// Starts a new round from the current settings.
    #[instrument(skip(self))]
    fn start_game(&mut self) {
        let session = GameSession::init(
            &mut self.board,
            self.settings.first_symbol,
            self.settings.vs_bot,
        );
        info!(
            first_symbol = %self.settings.first_symbol,
            vs_bot = self.settings.vs_bot,
            "New round"
        );
        self.status = turn_status(&session);
        self.session = Some(session);
        self.result_message = None;
        self.cursor = Position::Center;
        self.screen = Screen::Playing;
    }

    /// Forwards a move to the session if the cell is free.
    #[instrument(skip(self))]
    fn play(&mut self, pos: Position) {
        if !self.board.is_empty(pos) {
            self.status = format!("Cell {} is taken.", pos.number());
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        match session.play_turn(&mut self.board, pos.number()) {
            Ok(result) if result.end => {
                self.result_message = result.message;
                self.status = "Round over. Press Enter to play again.".to_string();
                self.screen = Screen::Finished;
            }
            Ok(_) => self.status = turn_status(session),
            Err(e) => {
                warn!(error = %e, "Move rejected");
                self.status = e.to_string();
            }
        }
    }
}

fn turn_status(session: &GameSession) -> String {
    let opponent = if session.is_vs_bot() { "vs Bot" } else { "vs Human" };
    format!("{} to move ({})", session.active_symbol(), opponent)
}
