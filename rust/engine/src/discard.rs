use rand::seq::SliceRandom;
use tracing::debug;

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;

/// Played cards. The most recent play is the end of the vector.
#[derive(Debug, Clone, Default)]
pub struct DiscardPile {
    cards: Vec<Card>,
}

impl DiscardPile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    /// Cards a reclaim would move: everything except the top card.
    pub fn reclaimable(&self) -> usize {
        self.cards.len().saturating_sub(1)
    }

    /// Shuffles every discarded card except the top one into `deck` as new
    /// stock. The top card stays on the pile as the lead. Returns how many
    /// cards moved.
    pub fn reclaim(&mut self, deck: &mut Deck) -> usize {
        let Some(top) = self.cards.pop() else {
            return 0;
        };
        let mut cards = std::mem::replace(&mut self.cards, vec![top]);
        cards.shuffle(deck.rng_mut());
        let moved = cards.len();
        deck.restock(cards);
        debug!(moved, "discard pile reclaimed into deck");
        moved
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Cards pulled by [`draw_with_reclaim`] and whether a reclaim was needed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Refill {
    pub cards: Vec<Card>,
    /// Cards moved from the discard pile into the deck, 0 if no reclaim happened.
    pub reclaimed: usize,
}

/// Draws `n` cards, reclaiming the discard pile when the deck runs short.
///
/// A partial draw succeeds with fewer cards. Fails with
/// [`GameError::DeckExhaustedAndDiscardEmpty`] only when `n > 0`, the deck is
/// empty and the pile holds nothing but its top card; nothing is mutated in
/// that case.
pub fn draw_with_reclaim(
    deck: &mut Deck,
    discard: &mut DiscardPile,
    n: usize,
) -> Result<Refill, GameError> {
    if n > 0 && deck.is_empty() && discard.reclaimable() == 0 {
        return Err(GameError::DeckExhaustedAndDiscardEmpty);
    }
    let first = deck.draw(n);
    let mut cards = first.cards;
    let mut reclaimed = 0;
    if first.shortage > 0 && discard.reclaimable() > 0 {
        reclaimed = discard.reclaim(deck);
        cards.extend(deck.draw(first.shortage).cards);
    }
    Ok(Refill { cards, reclaimed })
}
