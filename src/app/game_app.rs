// src/app/game_app.rs

use log::{info, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::app::state_getter;
use crate::components::card::CardId;
use crate::components::game_state::{DrawMode, GameState, RuleConfig};
use crate::components::stack::StackType;
use crate::systems;

/// ブラウザ側 (描画担当) から使うためのゲームアプリ本体だよ！
///
/// 描画側はカードやパイルを JSON で指定して操作を送って、`get_state_json` で結果を読むだけ。
/// カード: `{"suit":"Heart","rank":"Ace"}`、山: `"Waste"` や `{"Tableau":3}`。
#[wasm_bindgen]
pub struct GameApp {
    state: GameState,
}

#[wasm_bindgen]
impl GameApp {
    /// ランダムなシードで新しいゲームを作るよ。
    #[wasm_bindgen(constructor)]
    pub fn new(hard_mode: bool) -> Self {
        let state = systems::new_random_game(RuleConfig::with_mode(mode_from_flag(hard_mode)));
        info!("GameApp: new game (seed={})", state.seed());
        Self { state }
    }

    /// シードを指定して作る。同じシードなら同じ配り方になる。
    pub fn with_seed(hard_mode: bool, seed: u64) -> Self {
        Self { state: systems::new_game(mode_from_flag(hard_mode), seed) }
    }

    /// ルール設定 (JSON) とシードから作る。
    pub fn from_config(config_json: &str, seed: u64) -> Result<GameApp, JsValue> {
        let rules = RuleConfig::from_json(config_json).map_err(to_js_error)?;
        Ok(Self { state: systems::new_game_with_rules(rules, seed) })
    }

    /// 同じルールで、新しいランダムなゲームに切り替える。
    pub fn new_game(&mut self) {
        self.state = systems::new_random_game(self.state.rules());
        info!("GameApp: new game (seed={})", self.state.seed());
    }

    /// 同じシードで配り直す。
    pub fn deal_again(&mut self) {
        self.state = self.state.deal_again();
    }

    pub fn draw_from_stock(&mut self) -> usize {
        systems::draw_from_stock(&mut self.state)
    }

    pub fn recycle_stock(&mut self) -> Result<usize, JsValue> {
        systems::recycle_stock(&mut self.state).map_err(violation_to_js)
    }

    /// 山札クリック。結果は `{"Drawn":3}` / `{"Recycled":24}` / `"NoOp"` の JSON。
    pub fn click_stock(&mut self) -> Result<String, JsValue> {
        let action = systems::click_stock(&mut self.state);
        serde_json::to_string(&action).map_err(to_js_error)
    }

    /// カード移動。成功したら `MoveOutcome` の JSON を返す。
    /// 失敗したらルール違反の JSON がエラーとして返るので、描画側はカードを元の位置に戻してね。
    pub fn move_card(&mut self, card_json: &str, target_stack_json: &str) -> Result<String, JsValue> {
        let card: CardId = serde_json::from_str(card_json).map_err(to_js_error)?;
        let target: StackType = serde_json::from_str(target_stack_json).map_err(to_js_error)?;
        let outcome = systems::attempt_move(&mut self.state, card, target).map_err(violation_to_js)?;
        serde_json::to_string(&outcome).map_err(to_js_error)
    }

    /// ダブルクリックで組札へ。
    pub fn auto_move_to_foundation(&mut self, card_json: &str) -> Result<String, JsValue> {
        let card: CardId = serde_json::from_str(card_json).map_err(to_js_error)?;
        let outcome = systems::auto_move_to_foundation(&mut self.state, card).map_err(violation_to_js)?;
        serde_json::to_string(&outcome).map_err(to_js_error)
    }

    pub fn flip_top_card(&mut self, stack_json: &str) -> Result<(), JsValue> {
        let stack_type: StackType = serde_json::from_str(stack_json).map_err(to_js_error)?;
        systems::flip_top_card(&mut self.state, stack_type).map_err(violation_to_js)
    }

    pub fn get_state_json(&self) -> Result<String, JsValue> {
        state_getter::get_state_json(&self.state).map_err(to_js_error)
    }

    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    pub fn move_count(&self) -> u32 {
        self.state.move_count()
    }

    pub fn seed(&self) -> u64 {
        self.state.seed()
    }
}

impl GameApp {
    /// Rust 側から中の状態を読むためのもの。
    pub fn state(&self) -> &GameState {
        &self.state
    }
}

fn mode_from_flag(hard_mode: bool) -> DrawMode {
    if hard_mode {
        DrawMode::Hard
    } else {
        DrawMode::Normal
    }
}

fn to_js_error(e: impl std::fmt::Display) -> JsValue {
    let error_msg = e.to_string();
    warn!("GameApp: {}", error_msg);
    JsValue::from_str(&error_msg)
}

/// ルール違反は JSON にして返す (描画側で種類ごとに分岐できるように)。
fn violation_to_js(violation: impl Serialize + std::fmt::Display) -> JsValue {
    match serde_json::to_string(&violation) {
        Ok(json) => JsValue::from_str(&json),
        Err(_) => to_js_error(violation),
    }
}
