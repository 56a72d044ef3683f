// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！
pub mod app;
pub mod components;
pub mod config;
pub mod logger;
pub mod logic;
pub mod protocol;
pub mod systems;

pub use app::game_app::GameApp;
pub use components::{Card, GameState, GameStatus, Identity, Rank, Slot, SlotPosition, Suit, Visibility};
pub use logic::rules::matches;
pub use systems::{activate, use_joker, DealError, DealSystem};

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    log::info!("pyramid_wasm_game loaded");
}
