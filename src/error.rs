// src/error.rs
//! ルール違反を表すエラー型だよ。
//!
//! どれも「普通に遊んでいて起こる」ものなので、受け取ったら状態はそのまま、
//! 描画側はカードを元の位置に戻すだけでOK！

use serde::Serialize;
use thiserror::Error;

use crate::components::card::CardId;
use crate::components::stack::StackType;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum RuleViolation {
    /// 動かすカードが 1 枚も無い
    #[error("nothing to move")]
    EmptySource,
    /// 場札の「1つ小さい・色違い」ルールに合わない
    #[error("card does not continue the tableau sequence")]
    IllegalTableauSequence,
    /// 組札の「同じスートで1つ大きい」ルールに合わない
    #[error("card does not continue the foundation sequence")]
    IllegalFoundationSequence,
    #[error("only a single card can be moved to a foundation")]
    MultiCardToFoundation,
    #[error("stock can only be recycled once it is empty")]
    RecycleWithNonemptyStock,
    #[error("waste is empty, nothing to recycle")]
    RecycleWithEmptyWaste,
    #[error("top card is already face up or the pile is empty")]
    FlipOnFaceUpOrEmptyPile,
    /// めくれるのは場札だけ
    #[error("only tableau cards can be flipped by hand, not {0:?}")]
    FlipOutsideTableau(StackType),
    /// 同じ山への移動は移動じゃない (元に戻すだけ)
    #[error("cards are already on that pile")]
    SamePile,
    /// 裏向き、または動かせる並びになっていないカードを掴んだ
    #[error("{0} cannot be picked up")]
    NotMovable(CardId),
    /// Stock と Waste には直接置けない
    #[error("cards cannot be dropped onto {0:?}")]
    IllegalDestination(StackType),
    #[error("no such pile: {0:?}")]
    NoSuchStack(StackType),
    #[error("{0} is not on the table")]
    CardNotFound(CardId),
    #[error("the game is already won")]
    GameAlreadyWon,
}
