//! 隣接ルール: アクティブカードと盤面のカードのパワー差をチェックするよ。

use crate::components::card::{Card, Identity, Rank};

/// A と 2 をつなぐ回り込みの差 (14 - 2)。
const ACE_WRAP_DIFF: u8 = Rank::Ace as u8 - Rank::Two as u8;

/// 2枚のカードのパワー差が 1 か、A と 2 の組み合わせなら true。
///
/// 差が 0 (同じランク) はダメ！引数の順番は関係ないよ。
pub fn cards_adjacent(a: Card, b: Card) -> bool {
    let diff = a.rank.power().abs_diff(b.rank.power());
    diff == 1 || (diff == ACE_WRAP_DIFF && (a.rank == Rank::Ace || b.rank == Rank::Ace))
}

/// アクティブカード (`active`) で盤面のカード (`target`) を取れるかチェックする。
///
/// - アクティブがジョーカーなら何にでもマッチ🃏
/// - まだ1枚も引いてない (None) なら何にもマッチしない
pub fn matches(active: Option<Identity>, target: Identity) -> bool {
    match (active, target) {
        (None, _) => false,
        (Some(Identity::Joker), _) | (Some(_), Identity::Joker) => true,
        (Some(Identity::Card(a)), Identity::Card(b)) => cards_adjacent(a, b),
    }
}
