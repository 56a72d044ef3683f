// src/systems/mod.rs
//! 状態を受け取って次の状態を作る「システム」たち。

pub mod activate_system;
pub mod deal_system;

pub use activate_system::{activate, use_joker};
pub use deal_system::{DealError, DealSystem};
