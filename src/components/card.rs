// src/components/card.rs

// serde を使う宣言！スナップショットを JSON にしてプレゼン層へ渡すときに使うよ。
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// カードのスート（マーク）を表す列挙型だよ！♣️♦️❤️♠️
///
/// 並び順は山札を作るときの順番 (C, D, H, S) と同じにしてあるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Club,    // ♣️
    Diamond, // ♦️
    Heart,   // ❤️
    Spade,   // ♠️
}

impl Suit {
    /// カードコードの先頭1文字。
    pub fn code(self) -> char {
        match self {
            Suit::Club => 'C',
            Suit::Diamond => 'D',
            Suit::Heart => 'H',
            Suit::Spade => 'S',
        }
    }

    fn from_code(c: char) -> Option<Self> {
        match c {
            'C' => Some(Suit::Club),
            'D' => Some(Suit::Diamond),
            'H' => Some(Suit::Heart),
            'S' => Some(Suit::Spade),
            _ => None,
        }
    }
}

/// カードのランク（数字）だよ！ 2, 3, ..., K, A
///
/// 値はそのままカードの「パワー」になる。A が一番強くて 14！👑
/// 隣接ルール (rules::adjacency) はこの値の差を見るよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two = 2,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // 11
    Queen, // 12
    King,  // 13
    Ace,   // 14
}

impl Rank {
    /// カードのパワー (2..=14)。
    pub fn power(self) -> u8 {
        self as u8
    }

    /// カードコードのランク部分 ("2".."10", "J", "Q", "K", "A")。
    pub fn code(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    fn from_code(s: &str) -> Option<Self> {
        ALL_RANKS.iter().copied().find(|rank| rank.code() == s)
    }
}

/// 全スート (山札生成の内側ループ順)。
pub const ALL_SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

/// 全ランク (弱い順)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
    Rank::Ace,
];

/// 1枚のカード。表裏の状態はカードじゃなくてスロット (slot.rs) が持つよ！
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.code(), self.rank.code())
    }
}

/// カードコードのパースに失敗したときのエラー。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCardError(pub String);

impl fmt::Display for ParseCardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid card code: {:?}", self.0)
    }
}

impl std::error::Error for ParseCardError {}

impl FromStr for Card {
    type Err = ParseCardError;

    /// "H2" や "S10" みたいなコードからカードを作るよ。
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let suit = chars
            .next()
            .and_then(Suit::from_code)
            .ok_or_else(|| ParseCardError(s.to_string()))?;
        let rank = Rank::from_code(chars.as_str()).ok_or_else(|| ParseCardError(s.to_string()))?;
        Ok(Card { suit, rank })
    }
}

/// ジョーカーのコード。手札のアクティブカードにだけ現れるよ🃏
pub const JOKER_CODE: &str = "JOKER";

/// スロットに入る「正体」。普通のカードか、ワイルドカードのジョーカーか！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identity {
    Card(Card),
    Joker,
}

impl Identity {
    pub fn card(self) -> Option<Card> {
        match self {
            Identity::Card(card) => Some(card),
            Identity::Joker => None,
        }
    }

    pub fn is_joker(self) -> bool {
        matches!(self, Identity::Joker)
    }
}

impl From<Card> for Identity {
    fn from(card: Card) -> Self {
        Identity::Card(card)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Card(card) => fmt::Display::fmt(card, f),
            Identity::Joker => f.write_str(JOKER_CODE),
        }
    }
}

impl FromStr for Identity {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == JOKER_CODE {
            Ok(Identity::Joker)
        } else {
            s.parse().map(Identity::Card)
        }
    }
}

// JSON ではカードコードの文字列 ("HK" とか "JOKER") として出し入れするよ。
impl Serialize for Identity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Identity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(serde::de::Error::custom)
    }
}
