// src/logic/rules/mod.rs
//! ピラミッドソリティアのルール関連モジュールをまとめるよ！

pub mod adjacency;
pub mod reveal;
pub mod win_condition;

#[cfg(test)]
mod tests;

// 各モジュールから公開したい関数をここで再エクスポート！
pub use adjacency::*;
pub use reveal::*;
pub use win_condition::*;
