// src/components/card.rs

// serde を使う宣言！スナップショットを JSON にして描画側へ渡すときに使うよ。
use serde::{Deserialize, Serialize};
use std::fmt;

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
///
/// 並び順は新しいデッキを作るときの順番 (Heart → Diamond → Club → Spade) でもあるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,   // ❤️
    Diamond, // ♦️
    Club,    // ♣️
    Spade,   // ♠️
}

/// カードのランク（数字）を表す列挙型だよ！ A < 2 < ... < K
///
/// `Ace = 1` から始めてるので、`rank as u8` でそのまま数字として比べられる！
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

/// 全スートのリスト。デッキ生成で使うよ。
pub const ALL_SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

/// 全ランクのリスト (A から K まで)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
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
];

/// カードの色（赤か黒か）だよ。場札のルールは「色が交互」なのでこれで判定する！
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

impl Suit {
    pub fn color(self) -> CardColor {
        CardColor::from_suit(self)
    }
}

impl Rank {
    /// ランクの数値 (A=1, ..., K=13)。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 1 つ上のランク。K の上は無いので None。
    pub fn next(self) -> Option<Rank> {
        ALL_RANKS.get(self.value() as usize).copied()
    }
}

/// カードの「正体」だよ。スートとランクの組み合わせで、1ゲームに 52 種類ちょうど 1 枚ずつ。
///
/// 表裏の向きは含まないので、「どのカードを動かしたいか」を指すのに使うよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId {
    pub suit: Suit,
    pub rank: Rank,
}

impl CardId {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} of {:?}", self.rank, self.suit)
    }
}

/// カード 1 枚を表すデータだよ！🃏
///
/// - `suit`, `rank`: カードの正体 (ゲーム中ずっと変わらない)
/// - `is_face_up`: 表向きなら true。変わるのはここだけ！
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

impl Card {
    /// 裏向きのカードを作るよ。デッキから出てきたばかりのカードは全部これ。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: false }
    }

    pub fn id(&self) -> CardId {
        CardId::new(self.suit, self.rank)
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    pub fn flip_up(&mut self) {
        self.is_face_up = true;
    }

    pub fn flip_down(&mut self) {
        self.is_face_up = false;
    }
}
