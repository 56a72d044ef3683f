// src/components/slot.rs

use serde::{Deserialize, Serialize};

use super::card::Identity;
use super::position::SlotPosition;

/// スロットの見え方。元の "context" 文字列の代わりに 3択の enum にしたよ！
///
/// - `Concealed`: カードが無い (もう取り除かれた)。何も描かないし、クリックもできない。
/// - `FaceDown`: カードはあるけど裏向き。
/// - `FaceUp`: 表向き。盤面ならマッチの対象になる！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Visibility {
    Concealed,
    FaceDown,
    FaceUp,
}

/// 盤面・手札の1マス。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub position: SlotPosition,
    pub identity: Option<Identity>,
    pub visibility: Visibility,
}

impl Slot {
    pub fn new(position: SlotPosition, identity: Option<Identity>, visibility: Visibility) -> Self {
        Self { position, identity, visibility }
    }

    /// 空っぽのスロット (配りテーブルでカードが置かれないマス)。
    pub fn empty(position: SlotPosition) -> Self {
        Self::new(position, None, Visibility::Concealed)
    }

    pub fn is_face_up(&self) -> bool {
        self.visibility == Visibility::FaceUp
    }

    pub fn is_face_down(&self) -> bool {
        self.visibility == Visibility::FaceDown
    }

    pub fn is_concealed(&self) -> bool {
        self.visibility == Visibility::Concealed
    }

    /// プレゼン層がクリックを受け付けるべきか。Concealed 以外は押せる。
    pub fn is_clickable(&self) -> bool {
        match self.visibility {
            Visibility::Concealed => false,
            Visibility::FaceDown | Visibility::FaceUp => true,
        }
    }

    /// プレイヤーに見せていい正体。表向きのときだけ返すよ。
    pub fn shown_identity(&self) -> Option<Identity> {
        match self.visibility {
            Visibility::FaceUp => self.identity,
            Visibility::FaceDown | Visibility::Concealed => None,
        }
    }

    /// スロットを取り除いて、入っていた正体を取り出す。
    /// Concealed のスロットは正体を持たない、という約束をここで守る！
    pub fn conceal(&mut self) -> Option<Identity> {
        self.visibility = Visibility::Concealed;
        self.identity.take()
    }

    /// 裏向きでカードが入っていれば表に返す。返したら true。
    pub fn reveal(&mut self) -> bool {
        if self.is_face_down() && self.identity.is_some() {
            self.visibility = Visibility::FaceUp;
            true
        } else {
            false
        }
    }
}
