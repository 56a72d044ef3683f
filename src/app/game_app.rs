// src/app/game_app.rs

// --- 必要なものをインポート ---
use js_sys::Error;
use log::error;
use wasm_bindgen::prelude::*;

use crate::app::state_getter;
use crate::components::game_state::GameState;
use crate::components::position::SlotPosition;
use crate::logic::rules::evaluate_status;
use crate::systems::{activate, use_joker, DealError, DealSystem};

/// 1ゲーム分のセッション。プレゼン層が1ゲームにつき1つ作って持つよ！
///
/// 状態はこの構造体がそのまま持つ (グローバルなゲームインスタンスは無い)。
/// イベントは1つずつ順番に処理されて、そのたびに新しいスナップショットに差し替わる。
#[wasm_bindgen]
pub struct GameApp {
    state: GameState,
}

#[wasm_bindgen]
impl GameApp {
    /// シード付きで新しいゲームを配る。同じシードなら同じ盤面！
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> Result<GameApp, JsValue> {
        DealSystem.generate_with_seed(seed).map(GameApp::from_state).map_err(deal_error_to_js)
    }

    /// ブラウザの乱数 (getrandom 経由) でシャッフルして配る。
    pub fn new_random() -> Result<GameApp, JsValue> {
        DealSystem.generate_random().map(GameApp::from_state).map_err(deal_error_to_js)
    }

    /// スロットがクリックされた！次のスナップショット JSON を返すよ。
    pub fn activate(&mut self, position: u32) -> Result<String, JsValue> {
        self.state = activate(&self.state, SlotPosition(position));
        self.state_json()
    }

    /// ジョーカーボタンが押された！
    pub fn use_joker(&mut self) -> Result<String, JsValue> {
        self.state = use_joker(&self.state);
        self.state_json()
    }

    /// 現在のスナップショット JSON。
    pub fn state_json(&self) -> Result<String, JsValue> {
        state_getter::get_state_json(&self.state).map_err(|e| Error::new(&e.to_string()).into())
    }

    /// "Playing" / "Won" / "Stuck"
    pub fn status(&self) -> String {
        format!("{:?}", evaluate_status(&self.state))
    }
}

// wasm_bindgen で公開しない Rust 側のヘルパー
impl GameApp {
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }
}

fn deal_error_to_js(e: DealError) -> JsValue {
    error!("GameApp: failed to deal: {}", e);
    Error::new(&e.to_string()).into()
}
