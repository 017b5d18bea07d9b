// src/systems/win_condition_system.rs
use log::info;

use crate::components::game_state::{GameState, GameStatus};
use crate::logic::rules::check_win_condition;
use crate::systems::System;

/// ゲームの勝利条件をチェックするシステムだよ！🏆🎉
///
/// 組札が全部埋まってたら GameState を `Won` にする。一度 `Won` になったら戻らない。
#[derive(Default)]
pub struct WinConditionSystem;

impl System for WinConditionSystem {
    fn run(&mut self, state: &mut GameState) {
        if state.status == GameStatus::Playing && check_win_condition(&state.table) {
            state.status = GameStatus::Won;
            info!("🏆 ゲームクリア！ moves={}", state.move_count);
        }
    }
}
