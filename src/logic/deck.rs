// src/logic/deck.rs

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::config::rules::DECK_SIZE;

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// 並びはスートごと (Heart, Diamond, Club, Spade) に A → K の順。
/// 生成された時点では、すべてのカードは裏向き (`is_face_up: false`) になってる！
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// カードデッキをシャッフルする関数だよ。
///
/// `SliceRandom::shuffle` は Fisher–Yates なので、乱数が一様ならどの並びも同じ確率になる。
/// 乱数生成器は外から渡すので、テストではシード固定で再現できるよ。
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// シードからシャッフル済みのデッキを作る。同じシードなら必ず同じ並び！
pub fn shuffled_deck_with_seed(seed: u64) -> Vec<Card> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut deck = create_standard_deck();
    shuffle_deck(&mut deck, &mut rng);
    deck
}
