//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};
use crate::components::stack::StackType;
use crate::components::table::Table;
use crate::error::RuleViolation;

/// 指定されたカードが、特定の組札 (Foundation) の一番上に置けるかチェックする。
///
/// 組札に置けるのは 1 枚ずつだけ！複数枚は中身に関係なくダメ。
/// 空ならエース、そうでなければ同じスートで 1 つ大きいカード。
/// 組札ごとのスートは固定じゃなくて、最初に置いたエースで決まるよ。
pub fn can_move_to_foundation(
    table: &Table,
    moving_cards: &[Card],
    target_foundation_index: u8,
) -> Result<(), RuleViolation> {
    let target_stack_type = StackType::Foundation(target_foundation_index);
    let target = table
        .stack(target_stack_type)
        .ok_or(RuleViolation::NoSuchStack(target_stack_type))?;

    let card = match moving_cards {
        [] => return Err(RuleViolation::EmptySource),
        [card] => card,
        _ => {
            debug!("[Foundation Rule] {} cards at once cannot go to a foundation", moving_cards.len());
            return Err(RuleViolation::MultiCardToFoundation);
        }
    };

    let valid = match target.top() {
        None => card.rank == Rank::Ace,
        Some(top) => card.suit == top.suit && card.rank.value() == top.rank.value() + 1,
    };
    debug!(
        "[Foundation Rule] {:?} {:?} to Foundation({}) on top of {:?}: {}",
        card.rank,
        card.suit,
        target_foundation_index,
        target.top().map(|top| (top.rank, top.suit)),
        valid
    );

    if valid {
        Ok(())
    } else {
        Err(RuleViolation::IllegalFoundationSequence)
    }
}
