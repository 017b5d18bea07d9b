//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};
use crate::components::stack::StackType;
use crate::components::table::Table;
use crate::error::RuleViolation;

/// 動かすカードの並び (`moving_cards[0]` が一番下) を、特定の場札の上に置けるかチェックする。
///
/// - 空の列: 一番下のカードが King ならOK
/// - カードがある列: 一番上が表向きで、そのカードより 1 小さくて色が違えばOK
///   (スートは関係なし、色が交互になってればいい)
pub fn can_move_to_tableau(
    table: &Table,
    moving_cards: &[Card],
    target_tableau_index: u8,
) -> Result<(), RuleViolation> {
    let target_stack_type = StackType::Tableau(target_tableau_index);
    let target = table
        .stack(target_stack_type)
        .ok_or(RuleViolation::NoSuchStack(target_stack_type))?;
    let bottom = moving_cards.first().ok_or(RuleViolation::EmptySource)?;

    let valid = match target.top() {
        None => {
            let is_king = bottom.rank == Rank::King;
            debug!("    [Rule Check] Moving {:?} onto empty Tableau. Is King: {}.", bottom.rank, is_king);
            is_king
        }
        Some(target_top) => {
            let colors_different = bottom.color() != target_top.color();
            let rank_is_one_less = bottom.rank.value() + 1 == target_top.rank.value();
            debug!(
                "    [Rule Check] Moving {:?}({:?}) onto {:?}({:?}). Face up: {}. Colors different: {}. Rank is one less: {}.",
                bottom.rank,
                bottom.color(),
                target_top.rank,
                target_top.color(),
                target_top.is_face_up,
                colors_different,
                rank_is_one_less
            );
            target_top.is_face_up && colors_different && rank_is_one_less
        }
    };

    if valid {
        Ok(())
    } else {
        Err(RuleViolation::IllegalTableauSequence)
    }
}
