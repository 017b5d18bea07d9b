// src/components/table.rs

use std::collections::HashSet;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, CardId};
use crate::components::stack::{Stack, StackType};
use crate::config::rules::{DECK_SIZE, FOUNDATION_COUNT, SUIT_SIZE, TABLEAU_COUNT};

/// 13 個の山をまとめて持つテーブルだよ！🃏
///
/// 52 枚のカードは全部ここが持ってて、どのカードもどこか 1 つの山にちょうど 1 回だけ入ってる。
/// 山は配列の位置じゃなくて `StackType` で引くよ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    stock: Stack,
    waste: Stack,
    foundations: [Stack; FOUNDATION_COUNT],
    tableaus: [Stack; TABLEAU_COUNT],
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// 全部空っぽのテーブル。
    pub fn new() -> Self {
        Self {
            stock: Stack::new(StackType::Stock),
            waste: Stack::new(StackType::Waste),
            foundations: std::array::from_fn(|i| Stack::new(StackType::Foundation(i as u8))),
            tableaus: std::array::from_fn(|i| Stack::new(StackType::Tableau(i as u8))),
        }
    }

    /// 指定した山を借りる。番号が範囲外なら None。
    pub fn stack(&self, stack_type: StackType) -> Option<&Stack> {
        match stack_type {
            StackType::Stock => Some(&self.stock),
            StackType::Waste => Some(&self.waste),
            StackType::Foundation(i) => self.foundations.get(i as usize),
            StackType::Tableau(i) => self.tableaus.get(i as usize),
        }
    }

    pub fn stack_mut(&mut self, stack_type: StackType) -> Option<&mut Stack> {
        match stack_type {
            StackType::Stock => Some(&mut self.stock),
            StackType::Waste => Some(&mut self.waste),
            StackType::Foundation(i) => self.foundations.get_mut(i as usize),
            StackType::Tableau(i) => self.tableaus.get_mut(i as usize),
        }
    }

    pub fn stock(&self) -> &Stack {
        &self.stock
    }

    pub fn waste(&self) -> &Stack {
        &self.waste
    }

    pub(crate) fn stock_mut(&mut self) -> &mut Stack {
        &mut self.stock
    }

    pub(crate) fn waste_mut(&mut self) -> &mut Stack {
        &mut self.waste
    }

    pub fn foundations(&self) -> &[Stack] {
        &self.foundations
    }

    pub fn tableaus(&self) -> &[Stack] {
        &self.tableaus
    }

    /// 決まった順番 (Stock, Waste, Foundation 0-3, Tableau 0-6) で全部の山を回す。
    pub fn stacks(&self) -> impl Iterator<Item = &Stack> {
        std::iter::once(&self.stock)
            .chain(std::iter::once(&self.waste))
            .chain(self.foundations.iter())
            .chain(self.tableaus.iter())
    }

    /// 指定の山の一番上のカード。
    pub fn top_card(&self, stack_type: StackType) -> Option<&Card> {
        self.stack(stack_type).and_then(Stack::top)
    }

    /// カードがどの山の何番目にあるか探すよ。
    pub fn locate(&self, id: CardId) -> Option<(StackType, usize)> {
        self.stacks().find_map(|stack| {
            stack
                .cards
                .iter()
                .position(|card| card.id() == id)
                .map(|index| (stack.stack_type, index))
        })
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        let (stack_type, index) = self.locate(id)?;
        self.stack(stack_type)?.cards.get(index)
    }

    pub fn card_count(&self) -> usize {
        self.stacks().map(Stack::len).sum()
    }

    /// 組札が全部 13 枚ずつ埋まってるか。
    pub fn foundations_complete(&self) -> bool {
        self.foundations.iter().all(|pile| pile.len() == SUIT_SIZE)
    }

    /// 52 枚ちょうど、重複なしで揃ってるかチェックする。
    /// これが false になったらエンジンのバグだよ。
    pub fn is_complete_deck(&self) -> bool {
        let ids: HashSet<CardId> = self
            .stacks()
            .flat_map(|stack| stack.cards.iter().map(Card::id))
            .collect();
        ids.len() == DECK_SIZE && self.card_count() == DECK_SIZE
    }

    /// 山ごとの枚数を "S:24 W:0 ..." みたいな1行にするデバッグ用ヘルパー。
    pub fn describe(&self) -> String {
        self.stacks()
            .map(|stack| format!("{:?}:{}", stack.stack_type, stack.len()))
            .join(" ")
    }
}
