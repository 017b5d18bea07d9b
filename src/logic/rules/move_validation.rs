// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。

use log::debug;

use crate::components::card::Card;
use crate::components::stack::StackType;
use crate::components::table::Table;
use crate::error::RuleViolation;
use crate::logic::rules::{foundation, tableau};

/// 指定したカードの並びを `source` から `destination` に動かせるか検証する。
///
/// チェックする順番:
/// 1. 同じ山への移動は必ずダメ (元に戻すだけの扱い)
/// 2. 移動先の番号が範囲内か
/// 3. 動かすカードがあるか、複数枚なら場札からの run か
/// 4. 移動先の種類ごとのルール
///
/// 「掴めるカードかどうか」は呼び出し側で `select_moving_cards` を使って先に確認しておく想定。
/// 山札の残りや手数などには一切依存しない、テーブルの中身だけで決まる判定だよ。
pub fn validate_move(
    table: &Table,
    moving_cards: &[Card],
    source: StackType,
    destination: StackType,
) -> Result<(), RuleViolation> {
    if source == destination {
        return Err(RuleViolation::SamePile);
    }
    if !destination.is_valid() {
        return Err(RuleViolation::NoSuchStack(destination));
    }
    let bottom = moving_cards.first().ok_or(RuleViolation::EmptySource)?;
    if moving_cards.len() > 1 && !source.is_tableau() {
        return Err(RuleViolation::NotMovable(bottom.id()));
    }

    let result = match destination {
        StackType::Tableau(index) => tableau::can_move_to_tableau(table, moving_cards, index),
        StackType::Foundation(index) => foundation::can_move_to_foundation(table, moving_cards, index),
        StackType::Stock | StackType::Waste => Err(RuleViolation::IllegalDestination(destination)),
    };
    if let Err(violation) = &result {
        debug!("[Rules Validation] {:?} -> {:?} rejected: {}", source, destination, violation);
    }
    result
}

/// `validate_move` の bool 版。
pub fn can_move(table: &Table, moving_cards: &[Card], source: StackType, destination: StackType) -> bool {
    validate_move(table, moving_cards, source, destination).is_ok()
}
