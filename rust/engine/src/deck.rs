use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// Cards left for the current hand plus the RNG that draws from them.
///
/// `reset` refills the 52 cards, so each hand starts from a fresh deck while the
/// RNG stream carries on (reproducible for a given seed).
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
    // Fixed dealing order; when set, cards come out front to back.
    stacked: Option<Vec<Card>>,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            cards: full_deck(),
            rng: ChaCha20Rng::seed_from_u64(seed),
            stacked: None,
        }
    }

    pub fn new_random() -> Self {
        Self::new_with_seed(rand::random())
    }

    /// A deck that deals `order` exactly as given, for replays and tests.
    pub fn stacked(order: Vec<Card>) -> Self {
        Self {
            cards: order.clone(),
            rng: ChaCha20Rng::seed_from_u64(0),
            stacked: Some(order),
        }
    }

    pub fn reset(&mut self) {
        self.cards = match &self.stacked {
            Some(order) => order.clone(),
            None => full_deck(),
        };
    }

    /// Draws a uniformly random remaining card and removes it.
    pub fn deal_card(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }
        if self.stacked.is_some() {
            return Some(self.cards.remove(0));
        }
        let idx = self.rng.random_range(0..self.cards.len());
        Some(self.cards.swap_remove(idx))
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}
