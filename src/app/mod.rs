// src/app/mod.rs
//! プレゼン層との境界。セッション (GameApp) とスナップショットの取り出し。

pub mod game_app;
pub mod state_getter;
