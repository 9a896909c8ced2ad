//! Tests for the JSON snapshot handed to presentation layers.

use serde_json::json;
use tictactoe_core::{GameEngine, GameState, GameStatus, InvalidMove, Player};

#[test]
fn test_snapshot_shape() {
    let state = GameEngine::apply_move(&GameEngine::restart(), 4).expect("Valid move");
    let value = serde_json::to_value(state).expect("Serializable");

    assert_eq!(value["current_player"], json!("O"));
    assert_eq!(value["status"], json!("InProgress"));
    assert_eq!(value["board"]["cells"][4], json!({ "Occupied": "X" }));
    assert_eq!(value["board"]["cells"][0], json!("Empty"));
}

#[test]
fn test_won_status_snapshot() {
    let mut state = GameEngine::restart();
    for index in [0, 1, 3, 4, 6] {
        state = GameEngine::apply_move(&state, index).expect("Valid move");
    }
    let value = serde_json::to_value(state.status()).expect("Serializable");
    assert_eq!(value, json!({ "Won": "X" }));

    let snapshot = serde_json::to_value(state).expect("Serializable");
    let restored: GameState = serde_json::from_value(snapshot).expect("Deserializable");
    assert_eq!(restored.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_inconsistent_snapshot_rejected_on_move() {
    // Empty board with O to move: no sequence of moves produces this.
    let mut snapshot = serde_json::to_value(GameEngine::restart()).expect("Serializable");
    snapshot["current_player"] = json!("O");
    let state: GameState = serde_json::from_value(snapshot).expect("Deserializable");

    let result = GameEngine::apply_move(&state, 4);
    assert!(matches!(result, Err(InvalidMove::InvariantViolation(_))));
    assert!(GameEngine::apply_move(&GameEngine::restart(), 4).is_ok());
}
