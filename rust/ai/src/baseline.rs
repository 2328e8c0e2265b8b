//! Baseline AI for the One Card table.
//!
//! A mechanical placeholder, not a strategy: it plays the first legal card
//! in hand order, draws when nothing fits, and answers an attack by offering
//! the top card of its hand whatever it is.

use crate::Participant;
use onecard_engine::cards::Card;
use onecard_engine::player::{offer_top_card, DefenseView, Move, TurnView};
use tracing::debug;

/// Mechanical reference implementation used for demos and tests.
///
/// # Example
///
/// ```rust
/// use onecard_ai::baseline::BaselineAI;
/// use onecard_ai::Participant;
///
/// let ai = BaselineAI::new();
/// assert_eq!(ai.name(), "BaselineAI");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineAI;

impl BaselineAI {
    pub fn new() -> Self {
        Self
    }
}

impl Participant for BaselineAI {
    fn choose_move(&mut self, view: &TurnView<'_>) -> Move {
        let mv = match view.playable().first() {
            // a change-suit card keeps its own suit
            Some(&card) => Move::Play { card, suit: None },
            None => Move::Draw,
        };
        debug!(seat = %view.seat, ?mv, "baseline move");
        mv
    }

    fn choose_defense(&mut self, view: &DefenseView<'_>) -> Option<Card> {
        offer_top_card(view)
    }

    fn name(&self) -> &str {
        "BaselineAI"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onecard_engine::cards::{Rank, Suit};
    use onecard_engine::hand::Hand;
    use onecard_engine::player::Seat;

    fn view<'a>(hand: &'a Hand, lead: Option<Card>) -> TurnView<'a> {
        TurnView {
            seat: Seat::Ai,
            hand,
            lead,
            active_suit: None,
            opponent_cards: 7,
            deck_remaining: 30,
            turn_number: 2,
        }
    }

    #[test]
    fn test_baseline_ai_creation() {
        let ai = BaselineAI::new();
        assert_eq!(ai.name(), "BaselineAI");
    }

    #[test]
    fn test_plays_first_legal_card() {
        let three_c = Card::new(Suit::Club, Rank::Three);
        let five_h = Card::new(Suit::Heart, Rank::Five);
        let six_h = Card::new(Suit::Heart, Rank::Six);
        let hand = Hand::with_cards(vec![three_c, five_h, six_h]);
        let mut ai = BaselineAI::new();
        let lead = Some(Card::new(Suit::Heart, Rank::Nine));
        assert_eq!(
            ai.choose_move(&view(&hand, lead)),
            Move::Play {
                card: five_h,
                suit: None
            }
        );
    }

    #[test]
    fn test_draws_when_nothing_fits() {
        let hand = Hand::with_cards(vec![Card::new(Suit::Club, Rank::Three)]);
        let mut ai = BaselineAI::new();
        let lead = Some(Card::new(Suit::Heart, Rank::Nine));
        assert_eq!(ai.choose_move(&view(&hand, lead)), Move::Draw);
    }

    #[test]
    fn test_defense_offers_top_card() {
        let two = Card::new(Suit::Club, Rank::Two);
        let king = Card::new(Suit::Club, Rank::King);
        let hand = Hand::with_cards(vec![two, king]);
        let mut ai = BaselineAI::new();
        let dv = DefenseView {
            seat: Seat::Ai,
            hand: &hand,
            pending: 2,
        };
        assert_eq!(ai.choose_defense(&dv), Some(king));
    }
}
