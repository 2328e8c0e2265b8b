use std::collections::HashSet;

use onecard_engine::cards::{Card, Rank, Suit, DECK_SIZE};
use onecard_engine::deck::Deck;
use onecard_engine::discard::DiscardPile;
use onecard_engine::engine::Engine;
use onecard_engine::game::{new_game, GameState, GameStatus};
use onecard_engine::logger::GameEvent;
use onecard_engine::player::Seat;

#[test]
fn new_game_deals_seven_to_each_seat() {
    let game = new_game(1234, 7);
    assert_eq!(game.hand(Seat::Human).len(), 7);
    assert_eq!(game.hand(Seat::Ai).len(), 7);
    assert_eq!(game.deck().remaining(), DECK_SIZE - 14);
    assert!(game.discard().is_empty());
    assert_eq!(game.current_seat(), Seat::Human);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(
        game.events(),
        &[
            GameEvent::Dealt {
                seat: Seat::Human,
                count: 7
            },
            GameEvent::Dealt {
                seat: Seat::Ai,
                count: 7
            },
        ]
    );
}

#[test]
fn dealt_cards_are_disjoint_and_conserved() {
    let game = new_game(99, 7);
    let mut seen = HashSet::new();
    let all: Vec<Card> = game
        .hand(Seat::Human)
        .cards()
        .iter()
        .chain(game.hand(Seat::Ai).cards())
        .chain(game.deck().cards())
        .copied()
        .collect();
    for c in &all {
        assert!(seen.insert(*c), "card {c} appears twice");
    }
    assert_eq!(all.len(), DECK_SIZE);
    assert_eq!(game.total_cards(), DECK_SIZE);
}

#[test]
fn same_seed_produces_deterministic_deal() {
    let e1 = Engine::new(Some(42), 7);
    let e2 = Engine::new(Some(42), 7);
    assert_eq!(
        e1.state().hand(Seat::Human).cards(),
        e2.state().hand(Seat::Human).cards()
    );
    assert_eq!(e1.state().deck().cards(), e2.state().deck().cards());
}

#[test]
fn oversized_hand_request_is_capped() {
    let game = new_game(5, 40);
    assert_eq!(game.hand(Seat::Human).len(), 27);
    assert_eq!(game.hand(Seat::Ai).len(), 27);
    assert!(game.deck().is_empty());
    assert_eq!(game.total_cards(), DECK_SIZE);
}

#[test]
fn short_stock_deals_what_exists_and_records_the_shortfall() {
    let three = Card::new(Suit::Club, Rank::Three);
    let mut game = GameState::from_parts(
        Deck::from_cards(vec![three], 2),
        DiscardPile::new(),
        vec![],
        vec![],
        Seat::Human,
    );

    assert_eq!(game.deal(Seat::Human, 3), 1);
    assert_eq!(game.hand(Seat::Human).cards(), &[three]);
    assert_eq!(game.deal(Seat::Ai, 3), 0);
    assert!(game.hand(Seat::Ai).is_empty());
    assert_eq!(
        game.events(),
        &[
            GameEvent::StockExhausted {
                seat: Seat::Human,
                missing: 2
            },
            GameEvent::Dealt {
                seat: Seat::Human,
                count: 1
            },
            GameEvent::StockExhausted {
                seat: Seat::Ai,
                missing: 3
            },
            GameEvent::Dealt {
                seat: Seat::Ai,
                count: 0
            },
        ]
    );
}
