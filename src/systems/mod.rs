// src/systems/mod.rs
//! ゲームの状態を変更する操作 (システム) をまとめるモジュールだよ！
//!
//! 状態を変えられるのはここにある操作だけ。どれも「ルールチェック → OK なら変更」の順番で、
//! ルール違反なら GameState には一切触らないよ。

pub mod deal_system;
pub mod move_card_system;
pub mod stock_system;
pub mod win_condition_system;

use crate::components::game_state::GameState;

/// System（システム）トレイトだよ！
///
/// 操作のあとに毎回走らせたい後処理 (勝利判定みたいなもの) を表すんだ。
pub trait System {
    fn run(&mut self, state: &mut GameState);
}

pub use deal_system::{new_game, new_game_with_rules, new_random_game, DealInitialCardsSystem};
pub use move_card_system::{attempt_move, auto_move_to_foundation, flip_top_card, MoveOutcome};
pub use stock_system::{click_stock, draw_from_stock, recycle_stock, StockAction};
pub use win_condition_system::WinConditionSystem;
