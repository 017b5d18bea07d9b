// src/components/stack.rs

use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::config::rules::{FOUNDATION_COUNT, TABLEAU_COUNT};

/// カードの山 (パイル) の種類を示す Enum だよ。
/// どのルールが適用されるかはこれで決まる！描画の順番とは関係ないよ。
///
/// JSON にすると `"Stock"` や `{"Tableau":3}` みたいになるので、描画側からもそのまま指定できる。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 場札 (Tableau)。7つの列があるので、列番号 (0-6) を持つ。
    Tableau(u8),
    /// 組札 (Foundation)。4つあって、番号 (0-3) で管理するよ。
    /// どのスートが乗るかは最初に置かれたエースで決まる。
    Foundation(u8),
    /// 山札 (Stock)。裏向きのカードが積まれてる。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste)。
    Waste,
}

impl StackType {
    /// 13 個すべての山を、決まった順番 (Stock, Waste, Foundation 0-3, Tableau 0-6) で返すよ。
    pub fn all() -> impl Iterator<Item = StackType> {
        [StackType::Stock, StackType::Waste]
            .into_iter()
            .chain((0..FOUNDATION_COUNT as u8).map(StackType::Foundation))
            .chain((0..TABLEAU_COUNT as u8).map(StackType::Tableau))
    }

    /// 列番号が範囲内かどうか。
    pub fn is_valid(self) -> bool {
        match self {
            StackType::Tableau(i) => (i as usize) < TABLEAU_COUNT,
            StackType::Foundation(i) => (i as usize) < FOUNDATION_COUNT,
            StackType::Stock | StackType::Waste => true,
        }
    }

    pub fn is_tableau(self) -> bool {
        matches!(self, StackType::Tableau(_))
    }

    pub fn is_foundation(self) -> bool {
        matches!(self, StackType::Foundation(_))
    }
}

/// カードの山そのもの。`cards[0]` が一番下、`cards.last()` が一番上 (見えてるカード) だよ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    pub stack_type: StackType,
    pub cards: Vec<Card>,
}

impl Stack {
    /// 空の山を作るヘルパー関数。
    pub fn new(stack_type: StackType) -> Self {
        Self { stack_type, cards: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// `index` から上のカードを全部取り外して返す。順番はそのまま。
    pub fn split_off(&mut self, index: usize) -> Vec<Card> {
        self.cards.split_off(index)
    }

    pub fn face_up_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_face_up).count()
    }
}
