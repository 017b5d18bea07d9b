//! 山札 (Stock) と捨て札 (Waste)、それと裏向きカードをめくる操作のルールを定義するよ。

use crate::components::stack::StackType;
use crate::components::table::Table;
use crate::error::RuleViolation;

/// ストック（山札）からウェスト（捨て札）にカードを配れるかチェックする。
pub fn can_deal_from_stock(stock_is_empty: bool) -> bool {
    !stock_is_empty
}

/// ストックが空のときに、ウェストからストックにカードを戻せるかチェックする。
/// ストックが残ってるほうを先に見るよ。
pub fn can_reset_stock_from_waste(stock_is_empty: bool, waste_is_empty: bool) -> Result<(), RuleViolation> {
    if !stock_is_empty {
        Err(RuleViolation::RecycleWithNonemptyStock)
    } else if waste_is_empty {
        Err(RuleViolation::RecycleWithEmptyWaste)
    } else {
        Ok(())
    }
}

/// 場札の一番上の裏向きカードを、手でめくれるかチェックする。
pub fn can_flip_top_card(table: &Table, stack_type: StackType) -> Result<(), RuleViolation> {
    if !stack_type.is_tableau() {
        return Err(RuleViolation::FlipOutsideTableau(stack_type));
    }
    let stack = table.stack(stack_type).ok_or(RuleViolation::NoSuchStack(stack_type))?;
    match stack.top() {
        Some(card) if !card.is_face_up => Ok(()),
        _ => Err(RuleViolation::FlipOnFaceUpOrEmptyPile),
    }
}
