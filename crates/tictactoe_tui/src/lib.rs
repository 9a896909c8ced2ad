//! Terminal front end for local two-player tic-tac-toe.
//!
//! # Architecture
//!
//! - **App**: presentation state (session, cursor, theme, last notice)
//! - **View**: stateless ratatui rendering and mouse hit-testing
//! - **Input**: key and click mapping to [`Action`]s
//! - **Theme**: light/dark palettes, no effect on the game
//! - **Settings / Cli**: TOML settings file and command-line overrides
//!
//! All game rules come from [`tictactoe_core`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod input;
mod replay;
mod settings;
mod terminal;
mod theme;
mod view;

pub use app::App;
pub use cli::{Cli, Command};
pub use input::{Action, action_for_key, action_for_mouse};
pub use replay::replay;
pub use settings::{ConfigError, Settings};
pub use terminal::run;
pub use theme::{Palette, Theme};
pub use view::{Regions, Target, draw, status_line};
