//! カスケード公開: 上に重なってたカードが取り除かれたら、下のカードを表にするよ。
//!
//! 段 `r` のスロット `j` は、その下の段 `r+1` のスロット `j` と `j+1` に覆われてる。
//! 両方とも Concealed になったら表向きになるんだ。

use std::sync::Arc;

use log::debug;

use crate::components::game_state::GameState;
use crate::components::slot::Slot;

/// 段 `row` のスロット `index` が取り除かれた直後に呼ぶ。
///
/// 1段上 (`row - 1`) だけを見る一段階のチェックだよ。一番上の段 (row 0) は何もしない。
/// 表になったスロットの段内インデックスを返す。
pub fn reveal_covered(state: &mut GameState, row: usize, index: usize) -> Vec<usize> {
    if row == 0 {
        return Vec::new();
    }

    let cleared_row = &state.rows[row];
    let is_concealed = |i: usize| cleared_row.get(i).is_some_and(Slot::is_concealed);

    // 左隣が消えてたら左上 (index-1)、右隣が消えてたら右上 (index) が候補。
    let mut candidates = Vec::with_capacity(2);
    if index > 0 && is_concealed(index - 1) {
        candidates.push(index - 1);
    }
    if is_concealed(index + 1) {
        candidates.push(index);
    }

    let needs_flip = |i: &usize| {
        state.rows[row - 1]
            .get(*i)
            .is_some_and(|slot| slot.is_face_down() && slot.identity.is_some())
    };
    let revealed: Vec<usize> = candidates.into_iter().filter(needs_flip).collect();
    if revealed.is_empty() {
        return revealed;
    }

    let above = Arc::make_mut(&mut state.rows[row - 1]);
    for &i in &revealed {
        above[i].reveal();
        debug!("reveal: row {} slot {} ({:?}) is now face up", row, i, above[i].position);
    }
    revealed
}
