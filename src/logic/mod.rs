// src/logic/mod.rs
//! ゲームのロジック部分。デッキ、ルール判定、取れるカード探し。

pub mod auto_move;
pub mod deck;
pub mod rules;
