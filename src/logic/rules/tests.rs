// src/logic/rules/tests.rs
//! rules モジュールのシナリオテスト。

use std::sync::Arc;

use proptest::prelude::*;

use super::*;
use crate::components::card::{Card, Identity, Rank, Suit, ALL_RANKS, ALL_SUITS};
use crate::components::game_state::{GameState, GameStatus};
use crate::components::position::SlotPosition;
use crate::components::slot::Visibility;
use crate::logic::deck::create_standard_deck;
use crate::systems::{activate, use_joker, DealSystem};

// --- テスト用ヘルパー関数 ---

fn card(code: &str) -> Identity {
    code.parse().expect("テスト用のカードコードが壊れてる")
}

fn fresh() -> GameState {
    DealSystem.deal(&create_standard_deck()).unwrap()
}

/// アクティブカードをジョーカーにしてからクリックする (隣接ルールを気にせず盤面を崩すため)。
fn force_take(state: &GameState, position: u32) -> GameState {
    let mut forced = state.clone();
    forced.active.identity = Some(Identity::Joker);
    let next = activate(&forced, SlotPosition(position));
    assert!(next.slot(SlotPosition(position)).unwrap().is_concealed(), "{} が取れてない", position);
    next
}

fn visibility(state: &GameState, position: u32) -> Visibility {
    state.slot(SlotPosition(position)).unwrap().visibility
}

/// 順番にクリックしていけば盤面を全部消せるデッキと、そのクリック順。
///
/// 手札の先頭から始まって、ランクが 2,3,...,K,A,2,... と1つずつ上がる鎖になるように並べる。
fn winnable_deck() -> (Vec<Card>, Vec<SlotPosition>) {
    // (段, 段内インデックス, デッキ番号)
    let mut clicks = Vec::new();
    for i in 0..10 {
        clicks.push((3, i, 18 + i));
    }
    for i in 0..9 {
        clicks.push((2, i, 9 + i));
    }
    for (n, i) in [0, 1, 3, 4, 6, 7].into_iter().enumerate() {
        clicks.push((1, i, 3 + n));
    }
    for (n, i) in [0, 3, 6].into_iter().enumerate() {
        clicks.push((0, i, n));
    }

    let mut used = [0usize; 13];
    let mut chain_card = |j: usize| {
        let r = j % ALL_RANKS.len();
        let card = Card::new(ALL_SUITS[used[r]], ALL_RANKS[r]);
        used[r] += 1;
        card
    };

    let mut deck: Vec<Option<Card>> = vec![None; 52];
    deck[28] = Some(chain_card(0));
    for (k, &(_, _, deck_index)) in clicks.iter().enumerate() {
        deck[deck_index] = Some(chain_card(k + 1));
    }

    let leftovers: Vec<Card> = create_standard_deck().into_iter().filter(|c| !deck.contains(&Some(*c))).collect();
    let mut leftovers = leftovers.into_iter();
    for slot in deck.iter_mut().filter(|s| s.is_none()) {
        *slot = leftovers.next();
    }

    let deck = deck.into_iter().map(|c| c.expect("デッキに穴がある")).collect();
    let positions = clicks.into_iter().map(|(row, i, _)| SlotPosition::board(row, i)).collect();
    (deck, positions)
}

// --- 隣接ルール ---

#[test]
fn adjacency_examples() {
    assert!(matches(Some(card("H2")), card("H3")));
    assert!(!matches(Some(card("H2")), card("H2")), "同じランクは差 0 なのでダメ");
    assert!(matches(Some(card("HA")), card("H2")), "A と 2 は回り込みでつながる");
    assert!(matches(Some(card("HA")), card("HK")), "|14 - 13| = 1");
    assert!(!matches(Some(card("HA")), card("HQ")));
    assert!(!matches(Some(card("H3")), card("H5")));
    assert!(matches(Some(card("S10")), card("DJ")));
    assert!(matches(Some(card("C9")), card("H10")));
}

#[test]
fn adjacency_over_every_rank_difference() {
    let mut passing = 0;
    for a in ALL_RANKS {
        for b in ALL_RANKS {
            let diff = a.power().abs_diff(b.power());
            let expected = diff == 1 || (diff == 12 && (a == Rank::Ace || b == Rank::Ace));
            let got = cards_adjacent(Card::new(Suit::Heart, a), Card::new(Suit::Spade, b));
            assert_eq!(got, expected, "{:?} vs {:?} (差 {})", a, b, diff);
            if got {
                passing += 1;
            }
        }
    }
    // 隣り合う12組 + A-2 の1組、それぞれ両方向
    assert_eq!(passing, 26);
}

#[test]
fn joker_and_empty_active() {
    assert!(matches(Some(Identity::Joker), card("D7")));
    assert!(matches(Some(Identity::Joker), card("SA")));
    assert!(!matches(None, card("D7")));
}

proptest! {
    #[test]
    fn adjacency_is_symmetric(a in 0usize..52, b in 0usize..52) {
        let deck = create_standard_deck();
        let (x, y) = (Identity::Card(deck[a]), Identity::Card(deck[b]));
        prop_assert_eq!(matches(Some(x), y), matches(Some(y), x));
    }
}

// --- カスケード公開 ---

#[test]
fn one_cleared_cover_keeps_the_card_face_down() {
    let state = force_take(&fresh(), 25);
    assert_eq!(visibility(&state, 16), Visibility::FaceDown);
}

#[test]
fn both_covers_cleared_reveals_from_the_left() {
    let state = force_take(&force_take(&fresh(), 25), 26);
    assert_eq!(visibility(&state, 16), Visibility::FaceUp);
    // 17 は 26 と 27 に覆われてて、27 がまだ残ってる
    assert_eq!(visibility(&state, 17), Visibility::FaceDown);
}

#[test]
fn both_covers_cleared_reveals_from_the_right() {
    let state = force_take(&force_take(&fresh(), 27), 26);
    assert_eq!(visibility(&state, 17), Visibility::FaceUp);
    assert_eq!(visibility(&state, 16), Visibility::FaceDown);
}

#[test]
fn reveal_is_one_hop() {
    // 4段目の左3枚を消すと 3段目の 16, 17 が表になるけど、2段目 (8) はまだ裏のまま
    let state = force_take(&force_take(&force_take(&fresh(), 25), 26), 27);
    assert_eq!(visibility(&state, 16), Visibility::FaceUp);
    assert_eq!(visibility(&state, 17), Visibility::FaceUp);
    assert_eq!(visibility(&state, 8), Visibility::FaceDown);

    // 16, 17 を消してはじめて 8 が表になる
    let state = force_take(&force_take(&state, 16), 17);
    assert_eq!(visibility(&state, 8), Visibility::FaceUp);
}

#[test]
fn reveal_skips_empty_slots() {
    // 2段目の 11 (index 3) と 10 (空きマス, index 2) の上は 1段目の index 2 = 空きマス
    let mut state = fresh();
    let row = Arc::make_mut(&mut state.rows[1]);
    row[3].visibility = Visibility::FaceUp;
    row[4].visibility = Visibility::FaceUp;

    let state = force_take(&state, 11);
    assert_eq!(visibility(&state, 3), Visibility::Concealed);
    assert_eq!(state.slot(SlotPosition(3)).unwrap().identity, None);
    // 右側の 12 はまだあるので 1段目の 4 は裏のまま
    assert_eq!(visibility(&state, 4), Visibility::FaceDown);

    let state = force_take(&state, 12);
    assert_eq!(visibility(&state, 4), Visibility::FaceUp);
}

#[test]
fn top_row_never_reveals_anything() {
    let mut state = fresh();
    Arc::make_mut(&mut state.rows[0])[0].visibility = Visibility::FaceUp;
    let before = state.clone();
    let revealed = reveal_covered(&mut state, 0, 0);
    assert!(revealed.is_empty());
    assert_eq!(state, before);
}

// --- 勝利と詰み ---

#[test]
fn fresh_game_is_playing() {
    assert_eq!(evaluate_status(&fresh()), GameStatus::Playing);
}

#[test]
fn scripted_game_clears_the_board() {
    let (deck, clicks) = winnable_deck();
    let mut state = DealSystem.deal(&deck).unwrap();
    state = activate(&state, SlotPosition::hand(0));

    for position in clicks {
        assert_eq!(evaluate_status(&state), GameStatus::Playing);
        let next = activate(&state, position);
        assert_ne!(next, state, "{:?} を取れなかった (アクティブ {:?})", position, state.active.identity);
        state = next;
    }

    assert!(check_win_condition(&state));
    assert_eq!(evaluate_status(&state), GameStatus::Won);
    assert!(!state.joker_used, "ジョーカー無しでクリアできるはず");
    assert_eq!(state.hand_remaining(), 23);
}

#[test]
fn exhausted_hand_with_no_match_is_stuck_once_the_joker_is_gone() {
    let mut state = fresh();
    for _ in 0..24 {
        state = activate(&state, SlotPosition::hand(0));
    }
    // 最後に引いたのは SA。4段目は 6, 7, 8 だけなので取れない
    assert_eq!(state.active.identity, Some(card("SA")));
    assert!(crate::logic::auto_move::playable_positions(&state).is_empty());
    assert_eq!(evaluate_status(&state), GameStatus::Playing, "ジョーカーが残ってる");

    state.joker_used = true;
    assert_eq!(evaluate_status(&state), GameStatus::Stuck);
}

#[test]
fn joker_rescues_a_stuck_looking_position() {
    let mut state = fresh();
    for _ in 0..24 {
        state = activate(&state, SlotPosition::hand(0));
    }
    let state = use_joker(&state);
    assert_eq!(evaluate_status(&state), GameStatus::Playing);
    let state = activate(&state, SlotPosition(30));
    assert_eq!(state.active.identity, Some(card("S7")));
    assert_eq!(evaluate_status(&state), GameStatus::Playing);
}
