// src/config/mod.rs
//! ゲームの設定値 (コンパイル時定数) をまとめるよ。

pub mod layout;
