//! Strictly Tic-Tac-Toe - CLI
//!
//! Plays in the terminal UI, or lets two bots play each other.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_tictactoe::{AppConfig, Board, Symbol, autoplay, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        None => run_tui(&config),
        Some(Command::Play { first, bot }) => run_tui(&config.with_overrides(first, bot)),
        Some(Command::Autoplay { first }) => run_autoplay(&config, first),
    }
}

/// Let two bots play one game and print it to stdout.
#[instrument(skip(config))]
fn run_autoplay(config: &AppConfig, first: Symbol) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(%first, "Starting bot-versus-bot game");

    let mut board = Board::new();
    let game = autoplay(&mut board, first).context("Autoplay failed")?;

    for (turn, (symbol, position)) in game.moves.iter().enumerate() {
        println!("{:>2}. {} -> {} ({})", turn + 1, symbol, position.number(), position);
    }
    println!();
    println!("{}", board.display());
    println!();
    if let Some(message) = game.outcome.message() {
        println!("{}", message);
    }

    Ok(())
}
