//! Command-line interface for the tic-tac-toe front end.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::theme::Theme;

/// Tic Tac Toe - local two-player game in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Local two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (ignored if missing)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Theme to start with (overrides the settings file)
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply cell indices (0-8) to a fresh game and print the result
    Replay {
        /// Cell indices, in move order
        #[arg(required = true)]
        moves: Vec<usize>,
    },
}
