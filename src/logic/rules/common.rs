//! ルール判定で共通して使うヘルパー関数を置くよ。

use itertools::Itertools;
use log::debug;

use crate::components::card::{Card, CardId};
use crate::components::stack::StackType;
use crate::components::table::Table;
use crate::error::RuleViolation;

/// 場札の上で1つのかたまりとして動かせる並び (run) かどうか。
///
/// 空じゃなくて、全部表向きで、下から順に「1つずつ小さく・色が交互」になってること。
pub fn is_valid_tableau_run(cards: &[Card]) -> bool {
    if cards.is_empty() || cards.iter().any(|card| !card.is_face_up) {
        return false;
    }
    cards.iter().tuple_windows().all(|(below, above)| {
        below.color() != above.color() && below.rank.value() == above.rank.value() + 1
    })
}

/// 指定のカードを掴んだとき、一緒に動くカードがどこから始まるかを調べるよ。
///
/// 返り値は (移動元の山, 掴んだカードの位置)。そこから一番上までが動かすカード。
/// - 場札: 表向きで、そこから上が run になっていればOK
/// - Waste / 組札: 一番上の表向きカードだけ
/// - Stock: 直接掴めない
pub fn select_moving_cards(table: &Table, id: CardId) -> Result<(StackType, usize), RuleViolation> {
    let (source, index) = table.locate(id).ok_or(RuleViolation::CardNotFound(id))?;
    let stack = table.stack(source).ok_or(RuleViolation::NoSuchStack(source))?;

    let movable = match source {
        StackType::Tableau(_) => is_valid_tableau_run(&stack.cards[index..]),
        StackType::Waste | StackType::Foundation(_) => {
            index + 1 == stack.len() && stack.cards[index].is_face_up
        }
        StackType::Stock => false,
    };

    if movable {
        Ok((source, index))
    } else {
        debug!("[Rules] {} in {:?}[{}] cannot be picked up", id, source, index);
        Err(RuleViolation::NotMovable(id))
    }
}
