// src/logic/deck.rs

use itertools::Itertools;
use log::debug;
use rand::rngs::{OsRng, StdRng};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use crate::error::{EngineError, EngineResult};

/// 1 デッキの枚数。
pub const DECK_SIZE: usize = 52;

/// 標準的な 52 枚のデッキを作るよ！🃏
///
/// スート順 (hearts, diamonds, spades, clubs) × ランク順 (A → K) で並んでて、
/// 全部裏向き。シャッフルはまだしてない。
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// デッキを一様ランダムに並べ替える (Fisher–Yates)。
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

/// シャッフル済みのデッキを作る。乱数の種は OS から取るよ。
///
/// OS の乱数源が壊れてたら `EngineError::Randomness`。リトライはしない。
pub fn create_deck() -> EngineResult<Vec<Card>> {
    let mut rng = StdRng::from_rng(OsRng).map_err(|e| EngineError::Randomness { reason: e.to_string() })?;
    let mut deck = create_standard_deck();
    shuffle_deck(&mut deck, &mut rng);
    verify_deck_integrity(&deck)?;
    debug!("Deck: shuffled {} cards from OS entropy", deck.len());
    Ok(deck)
}

/// 種を固定したシャッフル済みデッキ。同じ種なら同じ並びになる。
pub fn create_seeded_deck(seed: u64) -> Vec<Card> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut deck = create_standard_deck();
    shuffle_deck(&mut deck, &mut rng);
    debug!("Deck: shuffled {} cards with seed {}", deck.len(), seed);
    deck
}

/// デッキが「52 枚・全部違う・全部裏向き」になってるかチェック。
pub fn verify_deck_integrity(deck: &[Card]) -> EngineResult<()> {
    if deck.len() != DECK_SIZE {
        return Err(EngineError::DeckIntegrity {
            reason: format!("expected {} cards, found {}", DECK_SIZE, deck.len()),
        });
    }
    if !deck.iter().map(|card| (card.suit, card.rank)).all_unique() {
        return Err(EngineError::DeckIntegrity { reason: "duplicate (suit, rank) pair".to_string() });
    }
    if let Some(card) = deck.iter().find(|card| card.is_face_up) {
        return Err(EngineError::DeckIntegrity { reason: format!("{} is face up", card) });
    }
    Ok(())
}
