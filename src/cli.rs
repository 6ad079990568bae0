//! Command-line interface for strictly_tictactoe.

use strictly_tictactoe::Symbol;
use clap::{Parser, Subcommand};

/// Strictly Tic-Tac-Toe - play against a friend or an unbeatable bot
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Tic-tac-toe with an optimal minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./strictly_tictactoe.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Symbol for the player who moves first (X or O)
        #[arg(short, long)]
        first: Option<Symbol>,

        /// Whether the second seat is the computer
        #[arg(long)]
        bot: Option<bool>,
    },

    /// Let two bots play a full game and print the result
    Autoplay {
        /// Symbol for the bot that moves first (X or O)
        #[arg(short, long, default_value = "X")]
        first: Symbol,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_flags() {
        let cli = Cli::parse_from(["strictly_tictactoe", "play", "--first", "o", "--bot", "true"]);
        match cli.command {
            Some(Command::Play { first, bot }) => {
                assert_eq!(first, Some(Symbol::O));
                assert_eq!(bot, Some(true));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["strictly_tictactoe", "--config", "game.toml"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("game.toml")));
    }

    #[test]
    fn test_autoplay_default_first() {
        let cli = Cli::parse_from(["strictly_tictactoe", "autoplay"]);
        assert!(matches!(cli.command, Some(Command::Autoplay { first: Symbol::X })));
    }
}
