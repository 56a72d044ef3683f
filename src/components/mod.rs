// src/components/mod.rs

// ゲーム状態を組み立てるデータ部品たち！
pub mod card;
pub mod position; // スロット番号と、それがどのエリアか📍
pub mod slot;
pub mod game_state;

pub use card::{Card, Identity, Rank, Suit};
pub use game_state::{GameState, GameStatus};
pub use position::{SlotPosition, Zone};
pub use slot::{Slot, Visibility};
