// src/systems/deal_system.rs

use log::{info, warn};

use crate::components::card::Card;
use crate::components::game_state::{DrawMode, GameState, GameStatus, RuleConfig};
use crate::components::stack::StackType;
use crate::components::table::Table;
use crate::config::rules::TABLEAU_COUNT;
use crate::logic::deck::shuffled_deck_with_seed;

// === 初期カード配置システム！ ===
// シャッフル済みのデッキを受け取って、山札と7つの場札に配るよ。
// ここでは乱数は一切使わないので、同じデッキからは必ず同じ配置になる！
#[derive(Default)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    /// ゲームの初期カード配置を実行する関数だよ！ 🎉
    ///
    /// # 処理の流れ
    /// 1. 52枚全部を裏向きで山札 (Stock) に積む。デッキの最後のカードが山札の一番上。
    /// 2. 場札 i 列目 (1..=7) に、山札の上から i 枚ずつ移す。
    ///    最後に移した 1 枚 (その列の一番上) だけ表向き。
    /// 3. 残りの 24 枚は裏向きのまま山札に。Waste と組札は空っぽ。
    pub fn execute(&self, deck: Vec<Card>) -> Table {
        let mut table = Table::new();
        for mut card in deck {
            card.flip_down();
            table.stock_mut().push(card);
        }

        for tableau_index in 0..TABLEAU_COUNT {
            let count = tableau_index + 1;
            for dealt in 0..count {
                let Some(mut card) = table.stock_mut().pop() else {
                    warn!("デッキにカードが足りません！(場札{}列目の配置中)", tableau_index);
                    return table;
                };
                if dealt + 1 == count {
                    card.flip_up();
                }
                if let Some(pile) = table.stack_mut(StackType::Tableau(tableau_index as u8)) {
                    pile.push(card);
                }
            }
        }

        info!("🃏 配り終わり！ {}", table.describe());
        table
    }
}

/// 新しいゲームを始めるよ。デッキ生成 → シャッフル → 配る、までまとめてやる。
pub fn new_game(mode: DrawMode, seed: u64) -> GameState {
    new_game_with_rules(RuleConfig::with_mode(mode), seed)
}

/// ルール設定を細かく指定して新しいゲームを始める。
pub fn new_game_with_rules(rules: RuleConfig, seed: u64) -> GameState {
    let mut state = GameState::dealing(rules, seed);
    let deck = shuffled_deck_with_seed(seed);
    state.table = DealInitialCardsSystem.execute(deck);
    debug_assert!(state.table.is_complete_deck(), "配った後にカードが52枚揃っていない");
    state.status = GameStatus::Playing;
    info!("新しいゲーム開始！ mode={:?} seed={}", rules.draw_mode, seed);
    state
}

/// ランダムなシードで新しいゲームを始める。シードは `GameState::seed` で後から分かるよ。
pub fn new_random_game(rules: RuleConfig) -> GameState {
    new_game_with_rules(rules, rand::random())
}

impl GameState {
    /// 同じシード・同じルールで配り直した、まっさらなゲームを返す。
    pub fn deal_again(&self) -> GameState {
        new_game_with_rules(self.rules, self.seed)
    }
}
