//! Non-interactive replay of a move list.

use std::fmt::Write;

use tictactoe_core::Session;
use tracing::{instrument, warn};

use crate::view::status_line;

/// Applies `moves` to a fresh game and renders the outcome as text.
///
/// Rejected moves are reported and skipped, the same way the interactive
/// board ignores them.
#[instrument]
pub fn replay(moves: &[usize]) -> String {
    let mut session = Session::new();
    let mut out = String::new();

    for (turn, &index) in moves.iter().enumerate() {
        if let Err(e) = session.play(index) {
            warn!(turn = turn + 1, index, error = %e, "Move ignored");
            let _ = writeln!(out, "move {} ({}) ignored: {}", turn + 1, index, e);
        }
    }

    let state = session.state();
    let _ = writeln!(out, "{}", state.board());
    let _ = write!(out, "{}", status_line(state));
    out
}
