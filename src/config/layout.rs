// src/config/layout.rs
//! 盤面のレイアウトに関する定数を定義するよ！
//! 段のサイズ、スロット番号の割り振り、配り方の固定テーブルなど。

/// 盤面の段数 (上から 1段目..4段目)。
pub const ROW_COUNT: usize = 4;

/// 各段のスロット数 (上から順に)。
pub const ROW_SIZES: [usize; ROW_COUNT] = [7, 8, 9, 10];

/// 各段の先頭スロット番号。番号は 1 から始まって段をまたいで連続するよ。
pub const ROW_FIRST_POSITIONS: [u32; ROW_COUNT] = [1, 8, 16, 25];

/// 盤面の最後のスロット番号 (4段目の右端)。
pub const LAST_BOARD_POSITION: u32 = 34;

/// 手札キューのスロット数。
pub const HAND_SIZE: usize = 24;

/// 手札キューの先頭スロット番号。
pub const FIRST_HAND_POSITION: u32 = 35;

/// 手札キューの最後のスロット番号。
pub const LAST_HAND_POSITION: u32 = FIRST_HAND_POSITION + HAND_SIZE as u32 - 1;

/// アクティブカード (いま手に持ってる1枚) のスロット番号。
pub const ACTIVE_POSITION: u32 = LAST_HAND_POSITION + 1;

/// 配るのに必要なカード枚数。
pub const DECK_SIZE: usize = 52;

// --- 配り方の固定テーブル ---
// シャッフル済みデッキの何番目のカードをどのスロットに置くか。
// None のスロットにはカードが置かれない (最初から Concealed)。

const ROW_1_DEAL: [Option<usize>; 7] = [Some(0), None, None, Some(1), None, None, Some(2)];

const ROW_2_DEAL: [Option<usize>; 8] = [
    Some(3),
    Some(4),
    None,
    Some(5),
    Some(6),
    None,
    Some(7),
    Some(8),
];

const ROW_3_DEAL: [Option<usize>; 9] = [
    Some(9),
    Some(10),
    Some(11),
    Some(12),
    Some(13),
    Some(14),
    Some(15),
    Some(16),
    Some(17),
];

const ROW_4_DEAL: [Option<usize>; 10] = [
    Some(18),
    Some(19),
    Some(20),
    Some(21),
    Some(22),
    Some(23),
    Some(24),
    Some(25),
    Some(26),
    Some(27),
];

/// 段ごとの配りテーブル。
pub const ROW_DEAL_TABLE: [&[Option<usize>]; ROW_COUNT] =
    [&ROW_1_DEAL, &ROW_2_DEAL, &ROW_3_DEAL, &ROW_4_DEAL];

/// 手札キューの先頭スロットに入るデッキ番号。以降は連番。
pub const HAND_DEAL_START: usize = 28;
