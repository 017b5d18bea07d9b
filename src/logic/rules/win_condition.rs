//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::table::Table;

/// ゲームのクリア条件（4つの組札がどれも13枚）を判定する。
pub fn check_win_condition(table: &Table) -> bool {
    table.foundations_complete()
}
