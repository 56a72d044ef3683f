// src/components/game_state.rs

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::card::Identity;
use super::position::{SlotPosition, Zone};
use super::slot::Slot;
use crate::config::layout::ROW_COUNT;

/// ゲーム全体の現在の状態を表す列挙型だよ！🏆🏁
///
/// 状態そのものには保存しないで、毎回 `GameState` から計算するよ
/// (`logic::rules::evaluate_status`)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中
    Playing,
    /// 盤面のカードを全部取り除いた！勝利！🏆
    Won,
    /// 手札も尽きて、ジョーカーも使って、取れるカードも無い…
    Stuck,
}

/// 1ゲーム分の状態のスナップショット。
///
/// 段と手札キューは `Arc` で包んであって、遷移で変わらなかった部分は
/// 前のスナップショットと共有されるよ (`Arc::make_mut` でコピーオンライト)。
/// 呼び出し側から見ると毎回新しい値が返ってくるだけ！
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// 盤面の段。0 が一番上 (7枚)、3 が一番下 (10枚)。
    pub rows: [Arc<Vec<Slot>>; ROW_COUNT],
    /// 手札キュー (左から順に引く)。
    pub hand: Arc<Vec<Slot>>,
    /// いま手に持ってるカード。
    pub active: Slot,
    pub joker_used: bool,
}

impl GameState {
    /// 番号からスロットを探す。どこにも無ければ None。
    pub fn slot(&self, position: SlotPosition) -> Option<&Slot> {
        match position.zone()? {
            Zone::Board { row, index } => self.rows[row].get(index),
            Zone::Hand { index } => self.hand.get(index),
            Zone::Active => Some(&self.active),
        }
    }

    /// 盤面の全スロット (上の段から順に)。
    pub fn board_slots(&self) -> impl Iterator<Item = &Slot> {
        self.rows.iter().flat_map(|row| row.iter())
    }

    /// アクティブカードの正体。まだ1枚も引いてなければ None。
    pub fn active_identity(&self) -> Option<Identity> {
        self.active.identity
    }

    /// まだ引いてない (裏向きの) 手札の枚数。プレイヤーの「残りライフ」だね。
    pub fn hand_remaining(&self) -> usize {
        self.hand.iter().filter(|slot| slot.is_face_down()).count()
    }

    pub fn joker_available(&self) -> bool {
        !self.joker_used
    }

    /// 盤面のスロットが全部 Concealed か。
    pub fn board_cleared(&self) -> bool {
        self.board_slots().all(Slot::is_concealed)
    }
}
