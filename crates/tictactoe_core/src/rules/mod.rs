//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state.
//! Rules are separated from state transitions so that invariants and
//! contracts can reuse them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{TRIPLES, check_winner, winning_players};

use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Derives the game status from a board.
///
/// The first winning triple (in [`TRIPLES`] order) decides the winner.
/// Otherwise a full board is a draw.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Player};

    const X: Cell = Cell::Occupied(Player::X);
    const O: Cell = Cell::Occupied(Player::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_full_board_with_line_is_win_not_draw() {
        let board = Board::from_cells([X, X, X, O, O, X, X, O, O]);
        assert_eq!(evaluate(&board), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        assert_eq!(evaluate(&board), GameStatus::Draw);
    }

    #[test]
    fn test_partial_board_in_progress() {
        let board = Board::from_cells([X, O, E, E, X, E, E, E, O]);
        assert_eq!(evaluate(&board), GameStatus::InProgress);
    }

    #[test]
    fn test_first_triple_in_order_wins() {
        // Not reachable by alternating play, but evaluation stays deterministic.
        let board = Board::from_cells([O, O, O, X, X, X, E, E, E]);
        assert_eq!(evaluate(&board), GameStatus::Won(Player::O));
    }
}
