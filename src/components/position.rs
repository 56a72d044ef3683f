// src/components/position.rs

use serde::{Deserialize, Serialize};

use crate::config::layout::{
    ACTIVE_POSITION, FIRST_HAND_POSITION, LAST_HAND_POSITION, ROW_FIRST_POSITIONS, ROW_SIZES,
};

/// スロットの番号だよ！📍
///
/// 盤面と手札で同じ番号空間を共有してて、ゲーム中ずっと変わらない。
/// プレゼン層はこれをイベントの宛先と描画キーの両方に使うよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotPosition(pub u32);

/// スロット番号がどのエリアに属するか。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// 盤面。`row` は 0 始まり (0 が一番上の段)、`index` は段の中の位置。
    Board { row: usize, index: usize },
    /// 手札キュー。`index` はキューの中の位置。
    Hand { index: usize },
    /// いま手に持ってるアクティブカード。
    Active,
}

impl SlotPosition {
    /// 盤面の段と段内インデックスから番号を作る。
    pub fn board(row: usize, index: usize) -> Self {
        SlotPosition(ROW_FIRST_POSITIONS[row] + index as u32)
    }

    /// 手札キューのインデックスから番号を作る。
    pub fn hand(index: usize) -> Self {
        SlotPosition(FIRST_HAND_POSITION + index as u32)
    }

    pub fn active() -> Self {
        SlotPosition(ACTIVE_POSITION)
    }

    /// 番号をエリアに分類する。どの範囲にも入らなければ None。
    pub fn zone(self) -> Option<Zone> {
        let n = self.0;
        if n == ACTIVE_POSITION {
            return Some(Zone::Active);
        }
        if (FIRST_HAND_POSITION..=LAST_HAND_POSITION).contains(&n) {
            return Some(Zone::Hand { index: (n - FIRST_HAND_POSITION) as usize });
        }
        ROW_FIRST_POSITIONS
            .iter()
            .zip(ROW_SIZES.iter())
            .enumerate()
            .find_map(|(row, (&first, &size))| {
                (first..first + size as u32)
                    .contains(&n)
                    .then(|| Zone::Board { row, index: (n - first) as usize })
            })
    }
}

impl From<u32> for SlotPosition {
    fn from(n: u32) -> Self {
        SlotPosition(n)
    }
}
