//! Terminal UI for Strictly Tic-Tac-Toe

mod app;
mod input;
mod settings;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use app::App;
use settings::SessionSettings;

/// Run the terminal UI until the user quits.
pub fn run_tui(config: &AppConfig) -> Result<()> {
    // Log to a file so output does not interfere with the UI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting Strictly Tic-Tac-Toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let app = App::new(SessionSettings::new(*config.first_symbol(), *config.vs_bot()));
    let result = run_app(&mut terminal, app);

    // Restore the terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "TUI exited with error");
    } else {
        info!("TUI exited");
    }
    result
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Release {
                continue;
            }
            debug!(?key, "Key pressed");
            app.handle_key(key);
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
