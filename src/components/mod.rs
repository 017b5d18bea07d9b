// src/components/mod.rs

// ゲームのデータ部品 (カード、山、テーブル、ゲーム状態) をまとめるモジュールだよ！
// ここにあるのはただのデータで、描画のことは何も知らない。
pub mod card;
pub mod game_state;
pub mod stack;
pub mod table;

pub use card::{Card, CardColor, CardId, Rank, Suit};
pub use game_state::{GameState, GameStatus};
pub use stack::{Stack, StackType};
pub use table::Table;
