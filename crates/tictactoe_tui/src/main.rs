//! Tic Tac Toe - terminal entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_tui::{Cli, Command, Settings};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(&cli.config)
        .with_context(|| format!("Failed to load settings from {}", cli.config.display()))?
        .with_theme(cli.theme);

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => tictactoe_tui::run(&settings),
        Command::Replay { moves } => run_replay(&settings, &moves),
    }
}

/// Prints the result of a move list; logs go to stderr.
fn run_replay(settings: &Settings, moves: &[usize]) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("{}", tictactoe_tui::replay(moves));
    Ok(())
}
