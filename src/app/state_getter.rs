//! Converts the current GameState into the JSON snapshot the presentation layer renders.

use log::{debug, error};

use crate::components::game_state::GameState;
use crate::protocol::GameStateData;

/// 状態をスナップショット JSON 文字列にして返します。
pub fn get_state_json(state: &GameState) -> Result<String, serde_json::Error> {
    let data = GameStateData::from(state);
    debug!(
        "Snapshot: status {:?}, {} hand cards left, {} playable",
        data.status,
        data.hand_remaining,
        data.playable.len()
    );
    serde_json::to_string(&data).map_err(|e| {
        error!("Failed to serialize game state: {}", e);
        e
    })
}
