//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Player};
use tracing::instrument;

/// The 8 winning lines, in evaluation order: rows, columns, diagonals.
pub const TRIPLES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the owner of a triple if all three cells hold the same mark.
fn line_owner(board: &Board, [a, b, c]: [usize; 3]) -> Option<Player> {
    let cell = board.get(a)?;
    if cell != Cell::Empty && Some(cell) == board.get(b) && Some(cell) == board.get(c) {
        cell.player()
    } else {
        None
    }
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first triple in [`TRIPLES`] order that is
/// complete, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    TRIPLES.into_iter().find_map(|line| line_owner(board, line))
}

/// Returns every distinct player owning at least one complete triple.
///
/// Boards reached by alternating play never yield more than one.
pub fn winning_players(board: &Board) -> Vec<Player> {
    let mut players = Vec::with_capacity(2);
    for player in TRIPLES.into_iter().filter_map(|line| line_owner(board, line)) {
        if !players.contains(&player) {
            players.push(player);
        }
    }
    players
}
