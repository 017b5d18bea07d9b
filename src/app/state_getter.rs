//! Gets the current game state and converts it to JSON.

use log::{debug, error};

use crate::components::game_state::GameState;
use crate::protocol::snapshot;

/// ゲームの状態をスナップショットにして、JSON 文字列として返します。
pub fn get_state_json(state: &GameState) -> Result<String, serde_json::Error> {
    let snap = snapshot(state);
    debug!("Serializing snapshot: {} stacks, moves={}", snap.stacks.len(), snap.move_count);
    serde_json::to_string(&snap).map_err(|e| {
        error!("Failed to serialize game state: {}", e);
        e
    })
}
