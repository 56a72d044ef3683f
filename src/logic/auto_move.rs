// src/logic/auto_move.rs
//! いまのアクティブカードで取れる盤面のカードを探すよ！🔍
//! 詰み判定とか、プレゼン層のヒント表示に使う。

use crate::components::game_state::GameState;
use crate::components::position::SlotPosition;
use crate::logic::rules::matches;

/// 表向きで、アクティブカードと隣接ルールを満たす盤面スロットの番号 (上の段から順)。
pub fn playable_positions(state: &GameState) -> Vec<SlotPosition> {
    let active = state.active_identity();
    state
        .board_slots()
        .filter(|slot| slot.is_face_up())
        .filter_map(|slot| slot.identity.filter(|&target| matches(active, target)).map(|_| slot.position))
        .collect()
}
