// src/app/mod.rs
//! ブラウザ (wasm) から使う窓口まわりのモジュールだよ！

pub mod game_app;
pub mod state_getter;

pub use game_app::GameApp;
