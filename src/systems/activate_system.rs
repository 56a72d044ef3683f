// src/systems/activate_system.rs

use std::sync::Arc;

use log::{debug, info};

use crate::components::card::Identity;
use crate::components::game_state::GameState;
use crate::components::position::{SlotPosition, Zone};
use crate::logic::rules::{matches, reveal_covered};

/// スロットがクリックされたときの状態遷移だよ！👆
///
/// 元の状態は一切いじらず、新しいスナップショットを返す。
/// 前提条件を満たさないクリックはエラーじゃなくて「何も起きない」扱い。
/// そのときは元と等しい状態がそのまま返ってくるよ。
///
/// クリックされた番号のエリアで分岐する:
/// 1. アクティブカード → 何もしない
/// 2. 手札キュー → 一番左の裏向きカードを引く (どの手札をクリックしたかは関係ない！)
/// 3. 盤面 → 表向きで隣接ルールを満たせば取り除いて、カスケード公開
pub fn activate(state: &GameState, position: SlotPosition) -> GameState {
    let mut next = state.clone();
    let changed = match position.zone() {
        Some(Zone::Active) => {
            debug!("activate {:?}: active card clicked, nothing to do", position);
            false
        }
        Some(Zone::Hand { .. }) => draw_from_hand(&mut next),
        Some(Zone::Board { row, index }) => take_from_board(&mut next, row, index),
        None => {
            debug!("activate {:?}: no such slot", position);
            false
        }
    };
    if !changed {
        // 何も変わらなかったので、共有してた Arc ごと元の状態を返す
        return state.clone();
    }
    next
}

/// ジョーカーを使う。アクティブカードがワイルドカードになるよ🃏
///
/// 1ゲームに1回だけ。使用済みなら何もしない。
pub fn use_joker(state: &GameState) -> GameState {
    if state.joker_used {
        debug!("use_joker: joker already used");
        return state.clone();
    }
    info!("Joker played over {:?}", state.active.identity);
    let mut next = state.clone();
    next.active.identity = Some(Identity::Joker);
    next.joker_used = true;
    next
}

/// 手札キューの一番左の裏向きカードを引いてアクティブにする。
fn draw_from_hand(state: &mut GameState) -> bool {
    let Some(index) = state.hand.iter().position(|slot| slot.is_face_down()) else {
        debug!("draw: hand exhausted");
        return false;
    };
    let hand = Arc::make_mut(&mut state.hand);
    let drawn = hand[index].conceal();
    info!("Drew {:?} from hand slot {:?}", drawn, hand[index].position);
    state.active.identity = drawn;
    true
}

/// 盤面のカードを取りにいく。
fn take_from_board(state: &mut GameState, row: usize, index: usize) -> bool {
    let Some(slot) = state.rows[row].get(index) else {
        return false;
    };
    if !slot.is_face_up() {
        debug!("take {:?}: slot is {:?}, not selectable", slot.position, slot.visibility);
        return false;
    }
    let Some(target) = slot.identity else {
        return false;
    };
    if !matches(state.active.identity, target) {
        debug!("take {:?}: {} does not match active {:?}", slot.position, target, state.active.identity);
        return false;
    }

    let taken = Arc::make_mut(&mut state.rows[row])[index].conceal();
    info!("Took {} from row {} slot {}", target, row + 1, index);
    // 取ったカードが次のアクティブカードになる (連鎖！)
    state.active.identity = taken;
    reveal_covered(state, row, index);
    true
}
