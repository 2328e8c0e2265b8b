use crate::cards::{Ability, Card};
use crate::deck::Deck;
use crate::discard::{draw_with_reclaim, DiscardPile};
use crate::errors::GameError;

/// Default number of cards dealt to each hand at the start of a game.
pub const INITIAL_HAND_SIZE: usize = 7;

/// Cards held by one seat. Human and AI share this type; only the
/// [`crate::player::Participant`] behind a seat differs.
#[derive(Debug, Clone, Default)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self { cards }
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

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Removes `card`, failing without mutation if it is not held.
    pub fn remove(&mut self, card: Card) -> Result<Card, GameError> {
        let idx = self
            .cards
            .iter()
            .position(|c| *c == card)
            .ok_or(GameError::CardNotInHand { card })?;
        Ok(self.cards.remove(idx))
    }

    /// Cards able to counter an attack worth `pending`.
    pub fn defenders(&self, pending: u32) -> Vec<Card> {
        self.cards
            .iter()
            .copied()
            .filter(|c| c.has(Ability::Defend) && c.attack_value().is_some_and(|v| v >= pending))
            .collect()
    }

    /// Deals `count` cards into this hand, reclaiming the discard pile if the deck underflows.
    /// Returns how many cards were actually received.
    pub fn draw_initial(
        &mut self,
        deck: &mut Deck,
        discard: &mut DiscardPile,
        count: usize,
    ) -> Result<usize, GameError> {
        let refill = draw_with_reclaim(deck, discard, count)?;
        let got = refill.cards.len();
        self.cards.extend(refill.cards);
        Ok(got)
    }

    /// Takes exactly one card.
    pub fn draw(&mut self, deck: &mut Deck, discard: &mut DiscardPile) -> Result<Card, GameError> {
        let refill = draw_with_reclaim(deck, discard, 1)?;
        let card = refill
            .cards
            .first()
            .copied()
            .ok_or(GameError::DeckExhaustedAndDiscardEmpty)?;
        self.cards.push(card);
        Ok(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn remove_missing_card_leaves_hand_untouched() {
        let held = Card::new(Suit::Heart, Rank::Four);
        let mut hand = Hand::with_cards(vec![held]);
        let missing = Card::new(Suit::Spade, Rank::Four);
        assert_eq!(
            hand.remove(missing),
            Err(GameError::CardNotInHand { card: missing })
        );
        assert_eq!(hand.cards(), &[held]);
    }

    #[test]
    fn defenders_filter_by_value() {
        let two = Card::new(Suit::Heart, Rank::Two);
        let ace = Card::new(Suit::Club, Rank::Ace);
        let king = Card::new(Suit::Club, Rank::King);
        let joker = Card::joker(Rank::JokerOne);
        let hand = Hand::with_cards(vec![two, ace, king, joker]);
        assert_eq!(hand.defenders(2), vec![two, ace, joker]);
        assert_eq!(hand.defenders(3), vec![ace, joker]);
        assert_eq!(hand.defenders(4), vec![joker]);
        assert!(hand.defenders(6).is_empty());
    }

    #[test]
    fn draw_initial_deals_requested_count() {
        let mut deck = Deck::new_with_seed(9);
        let mut pile = DiscardPile::new();
        let mut hand = Hand::default();
        assert_eq!(hand.draw_initial(&mut deck, &mut pile, INITIAL_HAND_SIZE), Ok(7));
        assert_eq!(hand.len(), 7);
        assert_eq!(deck.remaining(), 47);
    }
}
