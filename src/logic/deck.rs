// src/logic/deck.rs

use itertools::iproduct;
use rand::Rng;

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// 並びはランクが外側、スートが内側 (C2, D2, H2, S2, C3, ...)。
pub fn create_standard_deck() -> Vec<Card> {
    iproduct!(ALL_RANKS, ALL_SUITS)
        .map(|(rank, suit)| Card::new(suit, rank))
        .collect()
}

/// Fisher–Yates でデッキをシャッフルするよ。
///
/// 後ろから 1 番目まで降りていって、各位置 `i` を `0..=i` から一様に選んだ位置と入れ替える。
/// 乱数源は外から渡すので、シード付きの `StdRng` を渡せばテストで結果を固定できる！
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    for i in (1..deck.len()).rev() {
        let j = rng.gen_range(0..=i);
        deck.swap(i, j);
    }
}
