// src/protocol.rs

// このファイルは、エンジンからプレゼン層 (JavaScript) に渡すスナップショットの形を定義するよ！💌
// プレゼン層はスロットごとに {position, identity, visibility} を見て、
// 何も描かない / カードの裏 / カードの表 を選ぶだけ。画像のパスはエンジンは知らない！
use serde::{Deserialize, Serialize};

use crate::components::card::Identity;
use crate::components::game_state::{GameState, GameStatus};
use crate::components::position::SlotPosition;
use crate::components::slot::{Slot, Visibility};
use crate::logic::auto_move::playable_positions;
use crate::logic::rules::evaluate_status;

/// 1スロット分の描画情報。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SlotData {
    pub position: SlotPosition,
    /// 表向きのときだけ入る。裏向きと Concealed は null。
    pub identity: Option<Identity>,
    pub visibility: Visibility,
    /// Concealed 以外はクリックを受け付ける。
    pub clickable: bool,
}

impl From<&Slot> for SlotData {
    fn from(slot: &Slot) -> Self {
        SlotData {
            position: slot.position,
            identity: slot.shown_identity(),
            visibility: slot.visibility,
            clickable: slot.is_clickable(),
        }
    }
}

/// ゲーム全体のスナップショット。JSON にしてプレゼン層へ送る！
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameStateData {
    pub rows: Vec<Vec<SlotData>>,
    pub hand: Vec<SlotData>,
    pub active: SlotData,
    pub joker_used: bool,
    /// 「ジョーカーを使う！」ボタンを出すかどうか。
    pub joker_available: bool,
    pub hand_remaining: usize,
    /// いまのアクティブカードで取れる盤面の番号 (ヒント表示用)。
    pub playable: Vec<SlotPosition>,
    pub status: GameStatus,
}

impl From<&GameState> for GameStateData {
    fn from(state: &GameState) -> Self {
        GameStateData {
            rows: state.rows.iter().map(|row| row.iter().map(SlotData::from).collect()).collect(),
            hand: state.hand.iter().map(SlotData::from).collect(),
            active: SlotData::from(&state.active),
            joker_used: state.joker_used,
            joker_available: state.joker_available(),
            hand_remaining: state.hand_remaining(),
            playable: playable_positions(state),
            status: evaluate_status(state),
        }
    }
}
