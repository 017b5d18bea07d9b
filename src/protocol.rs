// src/protocol.rs

// このファイルは、エンジンから描画側 (JS とか) に渡すデータの形を定義するよ！💌
// 描画側はこれだけ見てカードを並べればOK。ルールの判断は自分でしちゃダメ！
// ネットワークや保存を後から足すときも、このフィールドをそのまま JSON にすればいいようにしてある。
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, Rank, Suit};
use crate::components::game_state::{DrawMode, GameState, GameStatus};
use crate::components::stack::{Stack, StackType};

/// ゲームの状態全体のスナップショット (読み取り専用)。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Stock, Waste, Foundation 0-3, Tableau 0-6 の順で 13 個。
    pub stacks: Vec<StackSnapshot>,
    pub move_count: u32,
    pub mode: DrawMode,
    pub status: GameStatus,
    pub is_won: bool,
    pub seed: u64,
}

/// 山 1 つ分。`cards[0]` が一番下。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StackSnapshot {
    pub stack_type: StackType,
    pub cards: Vec<CardData>,
}

/// カード1枚の状態を表すデータ構造。
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardData {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

impl From<&Card> for CardData {
    fn from(card: &Card) -> Self {
        Self { suit: card.suit, rank: card.rank, is_face_up: card.is_face_up }
    }
}

impl From<&Stack> for StackSnapshot {
    fn from(stack: &Stack) -> Self {
        Self {
            stack_type: stack.stack_type,
            cards: stack.cards.iter().map(CardData::from).collect(),
        }
    }
}

impl GameSnapshot {
    pub fn stack(&self, stack_type: StackType) -> Option<&StackSnapshot> {
        self.stacks.iter().find(|stack| stack.stack_type == stack_type)
    }
}

/// 今の GameState からスナップショットを作るよ。
pub fn snapshot(state: &GameState) -> GameSnapshot {
    GameSnapshot {
        stacks: state.table().stacks().map(StackSnapshot::from).collect(),
        move_count: state.move_count(),
        mode: state.mode(),
        status: state.status(),
        is_won: state.is_won(),
        seed: state.seed(),
    }
}
