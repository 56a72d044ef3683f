//! ゲームの勝利条件と詰み判定を定義するよ。

use crate::components::game_state::{GameState, GameStatus};
use crate::logic::auto_move::playable_positions;

/// 盤面のカードが全部取り除かれてたらクリア！
pub fn check_win_condition(state: &GameState) -> bool {
    state.board_cleared()
}

/// 詰み: 取れるカードが無い、手札も尽きた、ジョーカーも使用済み。
pub fn check_stuck_condition(state: &GameState) -> bool {
    state.hand_remaining() == 0 && state.joker_used && playable_positions(state).is_empty()
}

/// 現在の状態から GameStatus を計算する。勝利判定が優先だよ。
pub fn evaluate_status(state: &GameState) -> GameStatus {
    if check_win_condition(state) {
        GameStatus::Won
    } else if check_stuck_condition(state) {
        GameStatus::Stuck
    } else {
        GameStatus::Playing
    }
}
