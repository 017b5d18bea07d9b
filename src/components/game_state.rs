// src/components/game_state.rs

use serde::{Deserialize, Serialize};

use crate::components::table::Table;
pub use crate::config::rules::{DrawMode, RuleConfig};

/// ゲームの進行状態だよ！🏁
///
/// `Dealing` は新しいゲームを作ってる途中だけ。配り終わったら `Playing`、
/// 組札が全部埋まったら `Won` になって、そこからは戻らない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Dealing,
    Playing,
    /// 勝利！🏆
    Won,
}

/// 1ゲーム分の状態をまるごと持つ構造体。
///
/// 変更できるのは `systems` にある操作だけ (山札をめくる、戻す、カードを動かす、裏向きカードをめくる)。
/// どの操作も、ルール違反なら何も変えずにエラーを返すよ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) table: Table,
    pub(crate) rules: RuleConfig,
    pub(crate) move_count: u32,
    pub(crate) status: GameStatus,
    /// このゲームを配ったときのシード
    pub(crate) seed: u64,
}

impl GameState {
    /// 配る前の空っぽの状態。`new_game` の中でだけ使うよ。
    pub(crate) fn dealing(rules: RuleConfig, seed: u64) -> Self {
        Self {
            table: Table::new(),
            rules,
            move_count: 0,
            status: GameStatus::Dealing,
            seed,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn rules(&self) -> RuleConfig {
        self.rules
    }

    pub fn mode(&self) -> DrawMode {
        self.rules.draw_mode
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// 4つの組札が全部 13 枚ずつなら勝ち。
    pub fn is_won(&self) -> bool {
        self.table.foundations_complete()
    }

    pub(crate) fn add_moves(&mut self, count: u32) {
        self.move_count = self.move_count.saturating_add(count);
    }
}
