use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// Outcome of a draw request against the deck.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DrawStatus {
    /// Every requested card was drawn.
    Full,
    /// Some cards were drawn; the value is how many were missing.
    Short(usize),
    /// The deck had nothing to give.
    Exhausted,
}

/// Cards taken from the top of the deck together with any shortage.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Drawn {
    pub cards: Vec<Card>,
    pub shortage: usize,
}

impl Drawn {
    pub fn status(&self) -> DrawStatus {
        match (self.cards.len(), self.shortage) {
            (_, 0) => DrawStatus::Full,
            (0, _) => DrawStatus::Exhausted,
            (_, missing) => DrawStatus::Short(missing),
        }
    }
}

/// Draw stock. The top of the deck is the end of the vector.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Full 54-card deck in fixed order; call [`Deck::shuffle`] before dealing.
    pub fn new_with_seed(seed: u64) -> Self {
        Self::from_cards(full_deck(), seed)
    }

    /// Deck stacked with `cards` in the given order (last card is drawn first).
    pub fn from_cards(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes up to `n` cards from the top. Never fails; a short deck is
    /// reported through [`Drawn::shortage`].
    pub fn draw(&mut self, n: usize) -> Drawn {
        let take = n.min(self.cards.len());
        let split = self.cards.len() - take;
        let mut cards = self.cards.split_off(split);
        // top card first
        cards.reverse();
        Drawn {
            cards,
            shortage: n - take,
        }
    }

    pub fn draw_one(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Places `cards` underneath the current stock.
    pub fn restock(&mut self, cards: Vec<Card>) {
        let mut stock = cards;
        stock.append(&mut self.cards);
        self.cards = stock;
    }

    pub(crate) fn rng_mut(&mut self) -> &mut ChaCha20Rng {
        &mut self.rng
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
