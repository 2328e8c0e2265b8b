use onecard_engine::cards::{full_deck, Card, Rank, Suit, DECK_SIZE};
use onecard_engine::deck::Deck;
use onecard_engine::discard::DiscardPile;
use onecard_engine::game::GameState;
use onecard_engine::logger::GameEvent;
use onecard_engine::player::{offer_top_card, DefenseView, Seat};

/// Full 54-card game with the given hands; everything else sits in the deck.
fn stacked(human: Vec<Card>, ai: Vec<Card>) -> GameState {
    let rest: Vec<Card> = full_deck()
        .into_iter()
        .filter(|c| !human.contains(c) && !ai.contains(c))
        .collect();
    GameState::from_parts(
        Deck::from_cards(rest, 7),
        DiscardPile::new(),
        human,
        ai,
        Seat::Human,
    )
}

fn best_defender(v: &DefenseView<'_>) -> Option<Card> {
    v.hand.defenders(v.pending).first().copied()
}

#[test]
fn ace_against_a_held_two_forces_three_card_draw() {
    let ace = Card::new(Suit::Spade, Rank::Ace);
    let nine = Card::new(Suit::Heart, Rank::Nine);
    let two = Card::new(Suit::Heart, Rank::Two);
    let mut game = stacked(vec![ace, nine], vec![two]);
    let deck_before = game.deck().remaining();

    let mut responder = |v: &DefenseView<'_>| offer_top_card(v);
    let outcome = game
        .play_card(Seat::Human, ace, None, &mut responder)
        .expect("ace is playable");

    let volley = outcome.resolution.volley.expect("ace attacks");
    assert_eq!(volley.loser, Seat::Ai);
    assert_eq!(volley.penalty, 3);
    assert_eq!(volley.drawn, 3);
    assert!(volley.counters.is_empty());

    assert_eq!(game.hand(Seat::Ai).len(), 4);
    assert!(game.hand(Seat::Ai).contains(two), "a failed defender is not consumed");
    assert_eq!(game.deck().remaining(), deck_before - 3);
    assert_eq!(game.total_cards(), DECK_SIZE);
}

#[test]
fn two_countered_by_ace_bounces_five_back_to_attacker() {
    let two = Card::new(Suit::Spade, Rank::Two);
    let nine = Card::new(Suit::Heart, Rank::Nine);
    let ace = Card::new(Suit::Heart, Rank::Ace);
    let mut game = stacked(vec![two, nine], vec![ace]);
    let deck_before = game.deck().remaining();

    let mut responder = |v: &DefenseView<'_>| offer_top_card(v);
    let outcome = game
        .play_card(Seat::Human, two, None, &mut responder)
        .expect("two is playable");

    let volley = outcome.resolution.volley.expect("two attacks");
    assert_eq!(volley.counters, vec![(Seat::Ai, ace)]);
    assert_eq!(volley.loser, Seat::Human);
    assert_eq!(volley.penalty, 5);
    assert_eq!(volley.drawn, 5);

    assert!(game.hand(Seat::Ai).is_empty());
    assert_eq!(game.hand(Seat::Human).len(), 6);
    assert_eq!(game.discard().cards(), &[two, ace]);
    assert_eq!(game.lead(), Some(ace));
    assert_eq!(game.deck().remaining(), deck_before - 5);
    assert_eq!(game.total_cards(), DECK_SIZE);
}

#[test]
fn volley_alternates_until_a_side_cannot_match() {
    let two = Card::new(Suit::Club, Rank::Two);
    let joker_one = Card::joker(Rank::JokerOne);
    let ace = Card::new(Suit::Diamond, Rank::Ace);
    let joker_two = Card::joker(Rank::JokerTwo);
    let mut game = stacked(vec![two, joker_one], vec![ace, joker_two]);

    let mut responder = best_defender;
    let outcome = game
        .play_card(Seat::Human, two, None, &mut responder)
        .unwrap();
    let volley = outcome.resolution.volley.unwrap();

    // 2 -> Ace (5) -> Joker (10); the AI's Joker is worth 5 < 10.
    assert_eq!(volley.counters, vec![(Seat::Ai, ace), (Seat::Human, joker_one)]);
    assert_eq!(volley.loser, Seat::Ai);
    assert_eq!(volley.penalty, 10);
    assert_eq!(game.hand(Seat::Ai).len(), 11);
    assert!(game.hand(Seat::Ai).contains(joker_two));
    assert!(game.hand(Seat::Human).is_empty());
    assert_eq!(game.total_cards(), DECK_SIZE);

    let counters: Vec<u32> = game
        .events()
        .iter()
        .filter_map(|e| match e {
            GameEvent::Countered { pending, .. } => Some(*pending),
            _ => None,
        })
        .collect();
    assert_eq!(counters, vec![5, 10]);
}

#[test]
fn equal_value_counter_is_accepted() {
    let ace_a = Card::new(Suit::Club, Rank::Ace);
    let ace_b = Card::new(Suit::Heart, Rank::Ace);
    let mut game = stacked(vec![ace_a], vec![ace_b]);

    let mut responder = best_defender;
    let volley = game
        .play_card(Seat::Human, ace_a, None, &mut responder)
        .unwrap()
        .resolution
        .volley
        .unwrap();
    assert_eq!(volley.counters, vec![(Seat::Ai, ace_b)]);
    assert_eq!(volley.loser, Seat::Human);
    assert_eq!(volley.penalty, 6);
}

#[test]
fn offering_a_card_not_in_hand_counts_as_failed_defence() {
    let two = Card::new(Suit::Club, Rank::Two);
    let four = Card::new(Suit::Club, Rank::Four);
    let mut game = stacked(vec![two], vec![four]);

    let phantom = Card::joker(Rank::JokerOne);
    let mut responder = |_: &DefenseView<'_>| Some(phantom);
    let volley = game
        .play_card(Seat::Human, two, None, &mut responder)
        .unwrap()
        .resolution
        .volley
        .unwrap();
    assert!(volley.counters.is_empty());
    assert_eq!(volley.loser, Seat::Ai);
    assert_eq!(game.hand(Seat::Ai).len(), 3);
    assert!(game.events().contains(&GameEvent::DefenseFailed {
        seat: Seat::Ai,
        offered: Some(phantom),
        pending: 2,
    }));
}

#[test]
fn empty_hand_takes_the_penalty() {
    let joker = Card::joker(Rank::JokerTwo);
    let mut game = stacked(vec![joker], Vec::new());

    let mut responder = |v: &DefenseView<'_>| offer_top_card(v);
    let volley = game
        .play_card(Seat::Human, joker, None, &mut responder)
        .unwrap()
        .resolution
        .volley
        .unwrap();
    assert_eq!(volley.loser, Seat::Ai);
    assert_eq!(volley.penalty, 5);
    assert_eq!(game.hand(Seat::Ai).len(), 5);
}

#[test]
fn penalty_draw_reclaims_the_discard_pile() {
    let lead = Card::new(Suit::Heart, Rank::Nine);
    let mut pile = DiscardPile::new();
    for c in [
        Card::new(Suit::Club, Rank::Five),
        Card::new(Suit::Club, Rank::Six),
        Card::new(Suit::Diamond, Rank::Eight),
        lead,
    ] {
        pile.add(c);
    }
    let ace = Card::new(Suit::Heart, Rank::Ace);
    let three = Card::new(Suit::Club, Rank::Three);
    let deck = Deck::from_cards(vec![Card::new(Suit::Spade, Rank::Ten)], 11);
    let mut game = GameState::from_parts(deck, pile, vec![ace], vec![three], Seat::Human);
    let total = game.total_cards();

    let mut responder = |v: &DefenseView<'_>| offer_top_card(v);
    game.play_card(Seat::Human, ace, None, &mut responder)
        .unwrap();

    assert_eq!(game.hand(Seat::Ai).len(), 4);
    assert_eq!(game.discard().cards(), &[ace], "lead stays on the pile");
    assert_eq!(game.deck().remaining(), 2);
    assert!(!game.deck().cards().contains(&ace));
    assert!(!game.hand(Seat::Ai).contains(ace));
    assert_eq!(game.lead(), Some(ace));
    assert!(game.events().contains(&GameEvent::Reclaimed { cards: 4 }));
    assert_eq!(game.total_cards(), total);
}

#[test]
fn penalty_with_no_stock_left_draws_what_exists() {
    let two = Card::new(Suit::Heart, Rank::Two);
    let five = Card::new(Suit::Club, Rank::Five);
    let mut game = GameState::from_parts(
        Deck::from_cards(Vec::new(), 1),
        DiscardPile::new(),
        vec![two],
        vec![five],
        Seat::Human,
    );
    let total = game.total_cards();

    let mut responder = |v: &DefenseView<'_>| offer_top_card(v);
    let volley = game
        .play_card(Seat::Human, two, None, &mut responder)
        .unwrap()
        .resolution
        .volley
        .unwrap();

    // the played Two is the lead, so nothing can be recycled
    assert_eq!(volley.drawn, 0);
    assert_eq!(game.hand(Seat::Ai).cards(), &[five]);
    assert!(game.events().contains(&GameEvent::StockExhausted {
        seat: Seat::Ai,
        missing: 2
    }));
    assert_eq!(game.lead(), Some(two));
    assert_eq!(game.discard().cards(), &[two]);
    assert_eq!(game.total_cards(), total);
}
