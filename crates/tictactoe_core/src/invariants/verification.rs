//! Bounded proofs of the game invariants using the Kani model checker.
//!
//! Run with `cargo kani -p tictactoe_core`.

use super::{GameInvariants, InvariantSet};
use crate::{GameEngine, GameState};

/// Any sequence of nine arbitrary indices keeps every invariant.
///
/// Rejected indices leave the state in place, so this covers every
/// reachable state including terminal ones.
#[kani::proof]
#[kani::unwind(10)]
fn verify_invariants_for_any_move_sequence() {
    let mut state = GameState::new();
    for _ in 0..9 {
        let index: u8 = kani::any();
        if let Ok(next) = GameEngine::apply_move(&state, index as usize) {
            state = next;
        }
        assert!(GameInvariants::check_all(&state).is_ok());
    }
}

/// Once terminal, no index changes the state.
#[kani::proof]
#[kani::unwind(10)]
fn verify_terminal_states_are_frozen() {
    let mut state = GameState::new();
    for _ in 0..9 {
        let index: u8 = kani::any();
        if let Ok(next) = GameEngine::apply_move(&state, index as usize) {
            state = next;
        }
    }
    kani::assume(state.status().is_terminal());
    let index: u8 = kani::any();
    assert!(GameEngine::apply_move(&state, index as usize).is_err());
}
