// src/systems/move_card_system.rs

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::components::card::CardId;
use crate::components::game_state::{GameState, GameStatus};
use crate::components::stack::StackType;
use crate::error::RuleViolation;
use crate::logic::auto_move::find_automatic_foundation_move;
use crate::logic::rules;
use crate::systems::{System, WinConditionSystem};

/// 成功したカード移動の結果だよ。描画側はこれを見てカードを動かす。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub from: StackType,
    pub to: StackType,
    /// 一緒に動いたカードの枚数
    pub moved: usize,
}

/// カード移動のロジックを実行するよ！🖱️💨
///
/// 掴んだカード (`card`) から上の並びを、`destination` の山に動かそうとする。
/// 1. 掴めるカードか確認 (`select_moving_cards`)
/// 2. ルールチェック (`validate_move`)
/// 3. OK なら並びをそのまま移して手数 +1、勝利判定
///
/// どこかでダメなら GameState は一切変わらないよ。カードは元の位置のままなので、
/// 描画側は `table().locate(card)` の位置に戻してあげればOK。
/// 移動で見えるようになった裏向きカードは、自動ではめくらない (`flip_top_card` で手動)。
pub fn attempt_move(
    state: &mut GameState,
    card: CardId,
    destination: StackType,
) -> Result<MoveOutcome, RuleViolation> {
    if state.status == GameStatus::Won {
        return Err(RuleViolation::GameAlreadyWon);
    }

    let (source, index) = rules::select_moving_cards(&state.table, card)?;
    {
        let source_stack = state.table.stack(source).ok_or(RuleViolation::NoSuchStack(source))?;
        rules::validate_move(&state.table, &source_stack.cards[index..], source, destination)?;
    }

    // ここから先は失敗しない
    let moving = match state.table.stack_mut(source) {
        Some(source_stack) => source_stack.split_off(index),
        None => return Err(RuleViolation::NoSuchStack(source)),
    };
    let moved = moving.len();
    if let Some(target) = state.table.stack_mut(destination) {
        target.cards.extend(moving);
    }
    state.add_moves(1);
    info!("  {} (+{} above) moved {:?} -> {:?}. moves={}", card, moved - 1, source, destination, state.move_count);

    WinConditionSystem.run(state);
    Ok(MoveOutcome { from: source, to: destination, moved })
}

/// 場札の一番上の裏向きカードをめくるよ。
///
/// 手数を付けるかどうかは `RuleConfig::flip_costs_move` 次第 (デフォルトはタダ)。
pub fn flip_top_card(state: &mut GameState, stack_type: StackType) -> Result<(), RuleViolation> {
    if state.status == GameStatus::Won {
        return Err(RuleViolation::GameAlreadyWon);
    }
    rules::can_flip_top_card(&state.table, stack_type)?;

    if let Some(card) = state.table.stack_mut(stack_type).and_then(|stack| stack.top_mut()) {
        card.flip_up();
        info!("  Flipped {} on {:?}", card.id(), stack_type);
    }
    if state.rules.flip_costs_move {
        state.add_moves(1);
    }
    Ok(())
}

/// ダブルクリック用: 置ける組札があればそこへ動かす。
/// 新しいルールは無くて、`find_automatic_foundation_move` + `attempt_move` なだけ。
pub fn auto_move_to_foundation(state: &mut GameState, card: CardId) -> Result<MoveOutcome, RuleViolation> {
    if state.status == GameStatus::Won {
        return Err(RuleViolation::GameAlreadyWon);
    }
    match find_automatic_foundation_move(&state.table, card) {
        Some(destination) => attempt_move(state, card, destination),
        None => {
            // 掴めないカードならその理由を返す
            rules::select_moving_cards(&state.table, card)?;
            debug!("  No suitable foundation found for {}.", card);
            Err(RuleViolation::IllegalFoundationSequence)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Rank, Suit, ALL_RANKS, ALL_SUITS};
    use crate::components::game_state::{DrawMode, RuleConfig};
    use crate::components::table::Table;
    use crate::systems::deal_system::new_game;
    use crate::systems::stock_system::{draw_from_stock, recycle_stock};
    use pretty_assertions::assert_eq;

    /// 空のテーブルから好きな配置を作るためのヘルパー。
    fn state_with(build: impl FnOnce(&mut Table)) -> GameState {
        let mut state = GameState::dealing(RuleConfig::default(), 0);
        build(&mut state.table);
        state.status = GameStatus::Playing;
        state
    }

    fn put(table: &mut Table, stack_type: StackType, suit: Suit, rank: Rank, face_up: bool) -> CardId {
        let card = Card { suit, rank, is_face_up: face_up };
        table.stack_mut(stack_type).unwrap().push(card);
        card.id()
    }

    #[test]
    fn moving_a_run_keeps_order_and_leaves_hidden_card_face_down() {
        let mut hidden = CardId::new(Suit::Club, Rank::Two);
        let mut nine = hidden;
        let mut state = state_with(|table| {
            hidden = put(table, StackType::Tableau(0), Suit::Club, Rank::Two, false);
            nine = put(table, StackType::Tableau(0), Suit::Heart, Rank::Nine, true);
            put(table, StackType::Tableau(0), Suit::Spade, Rank::Eight, true);
            put(table, StackType::Tableau(1), Suit::Club, Rank::Ten, true);
        });

        let outcome = attempt_move(&mut state, nine, StackType::Tableau(1)).unwrap();
        assert_eq!(outcome, MoveOutcome { from: StackType::Tableau(0), to: StackType::Tableau(1), moved: 2 });

        let target: Vec<Rank> = state.table().tableaus()[1].cards.iter().map(|card| card.rank).collect();
        assert_eq!(target, vec![Rank::Ten, Rank::Nine, Rank::Eight]);
        let source = &state.table().tableaus()[0];
        assert_eq!(source.len(), 1);
        assert_eq!(source.top().map(|card| (card.id(), card.is_face_up)), Some((hidden, false)));
        assert_eq!(state.move_count(), 1);

        // 見えた裏向きカードは手でめくる (タダ)
        flip_top_card(&mut state, StackType::Tableau(0)).unwrap();
        assert!(state.table().tableaus()[0].top().unwrap().is_face_up);
        assert_eq!(state.move_count(), 1);
    }

    #[test]
    fn flip_can_cost_a_move() {
        let mut state = state_with(|table| {
            put(table, StackType::Tableau(3), Suit::Club, Rank::Two, false);
        });
        state.rules = RuleConfig { flip_costs_move: true, ..RuleConfig::default() };
        flip_top_card(&mut state, StackType::Tableau(3)).unwrap();
        assert_eq!(state.move_count(), 1);
    }

    #[test]
    fn waste_card_moves_to_tableau_and_foundation() {
        let mut ace = CardId::new(Suit::Heart, Rank::Ace);
        let mut six = ace;
        let mut state = state_with(|table| {
            put(table, StackType::Tableau(2), Suit::Spade, Rank::Seven, true);
            six = put(table, StackType::Waste, Suit::Diamond, Rank::Six, true);
            ace = put(table, StackType::Waste, Suit::Heart, Rank::Ace, true);
        });

        assert_eq!(
            attempt_move(&mut state, six, StackType::Tableau(2)),
            Err(RuleViolation::NotMovable(six)),
            "Waste の下のカードは掴めない"
        );
        attempt_move(&mut state, ace, StackType::Foundation(2)).unwrap();
        attempt_move(&mut state, six, StackType::Tableau(2)).unwrap();
        assert!(state.table().waste().is_empty());
        assert_eq!(state.move_count(), 2);
    }

    #[test]
    fn foundation_card_can_come_back_to_tableau() {
        let mut two = CardId::new(Suit::Heart, Rank::Two);
        let mut state = state_with(|table| {
            put(table, StackType::Foundation(0), Suit::Heart, Rank::Ace, true);
            two = put(table, StackType::Foundation(0), Suit::Heart, Rank::Two, true);
            put(table, StackType::Tableau(5), Suit::Club, Rank::Three, true);
        });
        attempt_move(&mut state, two, StackType::Tableau(5)).unwrap();
        assert_eq!(state.table().foundations()[0].len(), 1);
    }

    #[test]
    fn rejected_moves_leave_state_untouched() {
        let mut state = new_game(DrawMode::Normal, 77);
        draw_from_stock(&mut state);
        let before = state.clone();

        let stock_card = state.table().stock().top().unwrap().id();
        let waste_card = state.table().waste().top().unwrap().id();
        let buried = state.table().tableaus()[6].cards[0].id();
        let exposed = state.table().tableaus()[3].top().unwrap().id();

        assert_eq!(attempt_move(&mut state, stock_card, StackType::Tableau(0)), Err(RuleViolation::NotMovable(stock_card)));
        assert_eq!(attempt_move(&mut state, buried, StackType::Tableau(0)), Err(RuleViolation::NotMovable(buried)));
        assert_eq!(attempt_move(&mut state, exposed, StackType::Tableau(3)), Err(RuleViolation::SamePile));
        assert_eq!(
            attempt_move(&mut state, waste_card, StackType::Stock),
            Err(RuleViolation::IllegalDestination(StackType::Stock))
        );
        assert!(attempt_move(&mut state, exposed, StackType::Tableau(42)).is_err());
        assert_eq!(flip_top_card(&mut state, StackType::Tableau(0)), Err(RuleViolation::FlipOnFaceUpOrEmptyPile));
        assert_eq!(flip_top_card(&mut state, StackType::Waste), Err(RuleViolation::FlipOutsideTableau(StackType::Waste)));
        assert!(recycle_stock(&mut state).is_err());

        assert_eq!(state, before, "ルール違反の操作では何も変わらないはず");
    }

    #[test]
    fn auto_move_sends_aces_and_reports_failures() {
        let mut ace = CardId::new(Suit::Spade, Rank::Ace);
        let mut four = ace;
        let mut state = state_with(|table| {
            ace = put(table, StackType::Tableau(0), Suit::Spade, Rank::Ace, true);
            four = put(table, StackType::Tableau(1), Suit::Spade, Rank::Four, true);
        });

        let outcome = auto_move_to_foundation(&mut state, ace).unwrap();
        assert_eq!(outcome.to, StackType::Foundation(0));
        assert_eq!(auto_move_to_foundation(&mut state, four), Err(RuleViolation::IllegalFoundationSequence));
        let missing = CardId::new(Suit::Heart, Rank::King);
        assert_eq!(auto_move_to_foundation(&mut state, missing), Err(RuleViolation::CardNotFound(missing)));
    }

    #[test]
    fn last_move_wins_and_freezes_the_game() {
        let mut last_king = CardId::new(Suit::Spade, Rank::King);
        let mut state = state_with(|table| {
            for (index, &suit) in ALL_SUITS.iter().enumerate() {
                for &rank in ALL_RANKS.iter() {
                    if suit == Suit::Spade && rank == Rank::King {
                        last_king = put(table, StackType::Tableau(0), suit, rank, true);
                    } else {
                        put(table, StackType::Foundation(index as u8), suit, rank, true);
                    }
                }
            }
        });
        assert!(!state.is_won(), "3つ完成 + 12枚ではまだ勝ちじゃない");

        attempt_move(&mut state, last_king, StackType::Foundation(3)).unwrap();
        assert!(state.is_won());
        assert_eq!(state.status(), GameStatus::Won);

        let before = state.clone();
        assert_eq!(flip_top_card(&mut state, StackType::Tableau(0)), Err(RuleViolation::GameAlreadyWon));
        assert_eq!(attempt_move(&mut state, last_king, StackType::Tableau(0)), Err(RuleViolation::GameAlreadyWon));
        assert_eq!(recycle_stock(&mut state), Err(RuleViolation::GameAlreadyWon));
        assert_eq!(draw_from_stock(&mut state), 0);
        assert_eq!(state, before);
    }
}
