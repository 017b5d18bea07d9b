// src/lib.rs
//! クロンダイク (ソリティア) のルールエンジンだよ！🃏
//!
//! カードと山のデータ、シャッフルと配り方、移動ルールの判定、山札のリサイクル、勝利判定。
//! 描画やマウス操作は外の担当で、ここは「この操作はOK？」「OKならこう変わる」だけを受け持つ。
//!
//! ```
//! use klondike_wasm_engine::{new_game, draw_from_stock, snapshot, DrawMode};
//!
//! let mut state = new_game(DrawMode::Normal, 42);
//! assert_eq!(draw_from_stock(&mut state), 1);
//! assert_eq!(snapshot(&state).move_count, 1);
//! ```

use wasm_bindgen::prelude::*;

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logic;
pub mod protocol;
pub mod systems;

pub use app::GameApp;
pub use components::{Card, CardColor, CardId, GameState, GameStatus, Rank, Stack, StackType, Suit, Table};
pub use config::{DrawMode, RuleConfig};
pub use error::RuleViolation;
pub use logic::auto_move::find_automatic_foundation_move;
pub use logic::rules::{can_move, validate_move};
pub use protocol::{snapshot, CardData, GameSnapshot, StackSnapshot};
pub use systems::{
    attempt_move, auto_move_to_foundation, click_stock, draw_from_stock, flip_top_card, new_game,
    new_game_with_rules, new_random_game, recycle_stock, MoveOutcome, StockAction,
};

/// 勝っているかどうか (4つの組札が全部 13 枚)。
pub fn is_won(state: &GameState) -> bool {
    state.is_won()
}

// Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}
