// src/systems/deal_system.rs

// === 使うものを宣言するよ！ ===
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::components::card::{Card, Identity};
use crate::components::game_state::GameState;
use crate::components::position::SlotPosition;
use crate::components::slot::{Slot, Visibility};
use crate::config::layout::*;
use crate::logic::deck::{create_standard_deck, shuffle_deck};

/// 配るときに起きうるエラー。ちゃんとしたデッキを渡せば起きないよ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DealError {
    /// 配りテーブルが必要とする枚数よりデッキが少ない。
    DeckTooSmall { needed: usize, available: usize },
    /// 同じカードが2回出てきた。
    DuplicateCard(Card),
}

impl fmt::Display for DealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealError::DeckTooSmall { needed, available } => {
                write!(f, "deck too small for the layout: needed {} cards, got {}", needed, available)
            }
            DealError::DuplicateCard(card) => write!(f, "card {} appears more than once in the deck", card),
        }
    }
}

impl std::error::Error for DealError {}

// === 初期カード配置システム！ ===
// 盤面の4段と手札キューに、固定テーブル (config::layout) どおりにカードを配るよ。
#[derive(Debug, Default, Clone, Copy)]
pub struct DealSystem;

impl DealSystem {
    /// 渡された順番のデッキをそのまま配る。シャッフルはしないよ。
    ///
    /// - 4段目 (一番下) は表向き、1〜3段目は裏向き
    /// - テーブルで None のマスは空 (Concealed)
    /// - 手札キューは全部裏向き、アクティブカードは空っぽで表向き
    pub fn deal(&self, deck: &[Card]) -> Result<GameState, DealError> {
        if deck.len() < DECK_SIZE {
            return Err(DealError::DeckTooSmall { needed: DECK_SIZE, available: deck.len() });
        }
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        if let Some(&dup) = deck[..DECK_SIZE].iter().find(|&&card| !seen.insert(card)) {
            return Err(DealError::DuplicateCard(dup));
        }

        let rows = std::array::from_fn(|row| {
            let visibility = if row == ROW_COUNT - 1 { Visibility::FaceUp } else { Visibility::FaceDown };
            let slots = ROW_DEAL_TABLE[row]
                .iter()
                .enumerate()
                .map(|(index, deck_index)| {
                    let position = SlotPosition::board(row, index);
                    match deck_index {
                        Some(i) => Slot::new(position, Some(Identity::Card(deck[*i])), visibility),
                        None => Slot::empty(position),
                    }
                })
                .collect();
            Arc::new(slots)
        });

        let hand = deck[HAND_DEAL_START..HAND_DEAL_START + HAND_SIZE]
            .iter()
            .enumerate()
            .map(|(index, &card)| Slot::new(SlotPosition::hand(index), Some(Identity::Card(card)), Visibility::FaceDown))
            .collect();

        debug!("deal: {} board cards, {} hand cards", HAND_DEAL_START, HAND_SIZE);
        Ok(GameState {
            rows,
            hand: Arc::new(hand),
            active: Slot::new(SlotPosition::active(), None, Visibility::FaceUp),
            joker_used: false,
        })
    }

    /// 新しいデッキを作って、`rng` でシャッフルしてから配る。
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GameState, DealError> {
        let mut deck = create_standard_deck();
        shuffle_deck(&mut deck, rng);
        self.deal(&deck)
    }

    /// シード付きで配る。同じシードなら毎回まったく同じ盤面になるよ！
    pub fn generate_with_seed(&self, seed: u64) -> Result<GameState, DealError> {
        info!("Dealing a new game with seed {}", seed);
        self.generate(&mut StdRng::seed_from_u64(seed))
    }

    /// 環境の乱数でシャッフルして配る (ブラウザでは getrandom の js バックエンド)。
    pub fn generate_random(&self) -> Result<GameState, DealError> {
        info!("Dealing a new game with a random shuffle");
        self.generate(&mut rand::thread_rng())
    }
}
