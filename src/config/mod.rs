// src/config/mod.rs
//! ゲームのルール設定と定数をまとめるモジュールだよ！

pub mod rules;

pub use rules::{DrawMode, RuleConfig};
