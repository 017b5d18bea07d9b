// src/systems/stock_system.rs
//! Handles the Stock pile: dealing to Waste and recycling Waste back into Stock.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::components::game_state::{GameState, GameStatus};
use crate::error::RuleViolation;
use crate::logic::rules::stock_waste;
use crate::systems::{System, WinConditionSystem};

/// What a click on the Stock ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockAction {
    Drawn(usize),
    Recycled(usize),
    NoOp,
}

/// Deals up to `draw_count` cards (1 in Normal, 3 in Hard) from Stock to Waste, face up.
///
/// Every card moved earns one move credit. Returns the number of cards moved;
/// an empty Stock or a finished game is a no-op returning 0.
pub fn draw_from_stock(state: &mut GameState) -> usize {
    if state.status == GameStatus::Won {
        debug!("  Game already won, ignoring draw.");
        return 0;
    }
    if !stock_waste::can_deal_from_stock(state.table.stock().is_empty()) {
        info!("  Stock is empty. Cannot deal.");
        return 0;
    }

    let draw_count = state.mode().draw_count();
    let mut moved = 0;
    for _ in 0..draw_count {
        let Some(mut card) = state.table.stock_mut().pop() else {
            break;
        };
        card.flip_up();
        state.table.waste_mut().push(card);
        moved += 1;
    }
    state.add_moves(moved as u32);
    info!("Dealt {} card(s) from Stock to Waste. moves={}", moved, state.move_count);

    WinConditionSystem.run(state);
    moved
}

/// Turns the Waste pile back into a face-down Stock once the Stock is empty.
///
/// The top of Waste becomes the bottom of the new Stock, so drawing again replays the
/// same sequence. Returns the number of recycled cards.
pub fn recycle_stock(state: &mut GameState) -> Result<usize, RuleViolation> {
    if state.status == GameStatus::Won {
        return Err(RuleViolation::GameAlreadyWon);
    }
    stock_waste::can_reset_stock_from_waste(state.table.stock().is_empty(), state.table.waste().is_empty())?;

    let mut recycled = 0;
    while let Some(mut card) = state.table.waste_mut().pop() {
        card.flip_down();
        state.table.stock_mut().push(card);
        recycled += 1;
    }
    if state.rules.recycle_costs_move {
        state.add_moves(1);
    }
    info!("Waste pile reset to Stock: {} card(s). moves={}", recycled, state.move_count);
    Ok(recycled)
}

/// Click on the Stock: draw if there is anything to draw, otherwise recycle the Waste.
pub fn click_stock(state: &mut GameState) -> StockAction {
    if !state.table.stock().is_empty() {
        match draw_from_stock(state) {
            0 => StockAction::NoOp,
            drawn => StockAction::Drawn(drawn),
        }
    } else {
        match recycle_stock(state) {
            Ok(recycled) => StockAction::Recycled(recycled),
            Err(violation) => {
                debug!("  Stock click ignored: {}", violation);
                StockAction::NoOp
            }
        }
    }
}
