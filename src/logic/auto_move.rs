// src/logic/auto_move.rs
//! カードの自動移動に関するロジックをまとめるモジュールだよ！🪄
//! ダブルクリックで組札に飛ばすときに、どこに置けるかを探すんだ。

use log::debug;

use crate::components::card::CardId;
use crate::components::stack::StackType;
use crate::components::table::Table;
use crate::config::rules::FOUNDATION_COUNT;
use crate::logic::rules;

/// 指定のカードを、そのまま移動できる組札があるか探す関数だよ。
/// 見つかった場合は、移動先の StackType (`StackType::Foundation(index)`) を返す。
///
/// 対象になるのは場札か Waste の一番上にある表向きカード 1 枚だけ。
/// 組札にあるカードを別の組札に移すことはしない。
pub fn find_automatic_foundation_move(table: &Table, card: CardId) -> Option<StackType> {
    let (source, index) = rules::select_moving_cards(table, card).ok()?;
    if source.is_foundation() {
        return None;
    }
    let moving = &table.stack(source)?.cards[index..];
    if moving.len() != 1 {
        return None;
    }

    let found = (0..FOUNDATION_COUNT as u8)
        .map(StackType::Foundation)
        .find(|&target| rules::can_move(table, moving, source, target));
    debug!("[AutoMove] {} -> {:?}", card, found);
    found
}
