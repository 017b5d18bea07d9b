// src/logic/mod.rs
//! ゲームのルールや判断ロジックをまとめるモジュールだよ！
//! ここにある関数はどれも状態を変更しない (純粋な判定だけ)。

pub mod auto_move;
pub mod deck;
pub mod rules;
