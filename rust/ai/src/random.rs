//! Random legal mover. Useful for soak-testing the rules engine.

use crate::Participant;
use onecard_engine::cards::{all_suits, Card, Rank};
use onecard_engine::player::{DefenseView, Move, TurnView};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks uniformly among legal plays (drawing when there are none) and
/// counters with a random qualifying card.
#[derive(Debug, Clone)]
pub struct RandomAI {
    rng: StdRng,
}

impl RandomAI {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick(&mut self, cards: &[Card]) -> Option<Card> {
        if cards.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..cards.len());
        Some(cards[idx])
    }
}

impl Participant for RandomAI {
    fn choose_move(&mut self, view: &TurnView<'_>) -> Move {
        let playable = view.playable();
        match self.pick(&playable) {
            Some(card) => {
                let suit = if card.rank == Rank::Seven {
                    let suits = all_suits();
                    Some(suits[self.rng.random_range(0..suits.len())])
                } else {
                    None
                };
                Move::Play { card, suit }
            }
            None => Move::Draw,
        }
    }

    fn choose_defense(&mut self, view: &DefenseView<'_>) -> Option<Card> {
        let defenders = view.hand.defenders(view.pending);
        self.pick(&defenders)
    }

    fn name(&self) -> &str {
        "RandomAI"
    }
}
