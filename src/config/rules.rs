// src/config/rules.rs
//! ルールに関する定数と、ゲームごとに選べるルール設定を定義するよ！
//! マジックナンバーはここに集めておく。

use serde::{Deserialize, Serialize};

pub const DECK_SIZE: usize = 52; // 標準デッキの枚数
pub const SUIT_SIZE: usize = 13; // 1スートあたりの枚数 (A..K)
pub const TABLEAU_COUNT: usize = 7; // 場札の列数
pub const FOUNDATION_COUNT: usize = 4; // 組札の数
pub const STACK_COUNT: usize = 2 + FOUNDATION_COUNT + TABLEAU_COUNT; // Stock + Waste + 組札 + 場札

pub const NORMAL_DRAW_COUNT: usize = 1; // Normal モードで 1 回にめくる枚数
pub const HARD_DRAW_COUNT: usize = 3; // Hard モードで 1 回にめくる枚数

/// 山札から何枚ずつめくるか、のモードだよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DrawMode {
    /// 1枚ずつ
    #[default]
    Normal,
    /// 3枚ずつ
    Hard,
}

impl DrawMode {
    pub fn draw_count(self) -> usize {
        match self {
            DrawMode::Normal => NORMAL_DRAW_COUNT,
            DrawMode::Hard => HARD_DRAW_COUNT,
        }
    }
}

/// 1ゲーム分のルール設定。
///
/// 手数 (move count) の数え方はバージョンによってバラバラだったので、
/// 山札のリサイクルと裏向きカードをめくる操作に手数を付けるかどうかを選べるようにしてあるよ。
/// JSON から読むときに足りない項目はデフォルト値で埋まる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    pub draw_mode: DrawMode,
    /// Waste を Stock に戻したら手数 +1 するか
    pub recycle_costs_move: bool,
    /// 場札の裏向きカードをめくったら手数 +1 するか
    pub flip_costs_move: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            draw_mode: DrawMode::Normal,
            recycle_costs_move: true,
            flip_costs_move: false,
        }
    }
}

impl RuleConfig {
    /// モードだけ指定して、残りはデフォルトの設定を作る。
    pub fn with_mode(draw_mode: DrawMode) -> Self {
        Self { draw_mode, ..Self::default() }
    }

    /// JSON 文字列から設定を読み込むよ。
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
