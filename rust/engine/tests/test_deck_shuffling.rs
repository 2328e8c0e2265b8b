use std::collections::HashSet;

use onecard_engine::cards::{full_deck, Card, Rank, Suit, DECK_SIZE};
use onecard_engine::deck::{Deck, DrawStatus};
use onecard_engine::discard::{draw_with_reclaim, DiscardPile};
use onecard_engine::errors::GameError;

#[test]
fn fresh_deck_has_54_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    let mut set = HashSet::new();
    for i in 0..DECK_SIZE {
        let c = deck.draw_one().expect("should have 54 cards");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert!(deck.draw_one().is_none(), "after 54 cards, deck should be empty");
}

#[test]
fn shuffle_is_a_permutation() {
    for seed in 0..20 {
        let mut deck = Deck::new_with_seed(seed);
        deck.shuffle();
        let shuffled: HashSet<Card> = deck.cards().iter().copied().collect();
        let reference: HashSet<Card> = full_deck().into_iter().collect();
        assert_eq!(deck.remaining(), DECK_SIZE);
        assert_eq!(shuffled, reference, "seed {seed} lost or duplicated a card");
    }
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    assert_eq!(d1.draw(10), d2.draw(10), "same seed must yield identical order");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    assert_ne!(
        d1.draw(10).cards,
        d2.draw(10).cards,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn short_draw_reports_shortage_not_error() {
    let cards = vec![
        Card::new(Suit::Club, Rank::Three),
        Card::new(Suit::Club, Rank::Four),
    ];
    let mut deck = Deck::from_cards(cards, 5);
    let drawn = deck.draw(5);
    assert_eq!(drawn.cards.len(), 2);
    assert_eq!(drawn.shortage, 3);
    assert_eq!(drawn.status(), DrawStatus::Short(3));

    let empty = deck.draw(3);
    assert!(empty.cards.is_empty());
    assert_eq!(empty.status(), DrawStatus::Exhausted);
}

#[test]
fn exhausted_deck_triggers_reclaim_from_discard() {
    let mut deck = Deck::from_cards(Vec::new(), 5);
    let mut pile = DiscardPile::new();
    for rank in [Rank::Five, Rank::Six, Rank::Eight] {
        pile.add(Card::new(Suit::Spade, rank));
    }
    let refill = draw_with_reclaim(&mut deck, &mut pile, 2).expect("reclaim should succeed");
    assert_eq!(refill.cards.len(), 2);
    assert_eq!(refill.reclaimed, 2);
    assert_eq!(pile.cards(), &[Card::new(Suit::Spade, Rank::Eight)]);
    assert!(deck.is_empty());
}

#[test]
fn both_piles_empty_is_reported() {
    let mut deck = Deck::from_cards(Vec::new(), 5);
    let mut pile = DiscardPile::new();
    assert_eq!(
        draw_with_reclaim(&mut deck, &mut pile, 1),
        Err(GameError::DeckExhaustedAndDiscardEmpty)
    );
    // a zero-card request is not a shortage
    assert!(draw_with_reclaim(&mut deck, &mut pile, 0).is_ok());
}

#[test]
fn lone_lead_card_is_never_reclaimed() {
    let lead = Card::new(Suit::Club, Rank::King);
    let mut deck = Deck::from_cards(Vec::new(), 5);
    let mut pile = DiscardPile::new();
    pile.add(lead);
    assert_eq!(
        draw_with_reclaim(&mut deck, &mut pile, 1),
        Err(GameError::DeckExhaustedAndDiscardEmpty)
    );
    assert_eq!(pile.top(), Some(lead));
    assert!(deck.is_empty());
}
