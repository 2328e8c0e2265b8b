use tracing::{debug, info, warn};

use crate::cards::{Card, Suit, DECK_SIZE};
use crate::deck::Deck;
use crate::discard::{draw_with_reclaim, DiscardPile};
use crate::errors::GameError;
use crate::hand::Hand;
use crate::logger::GameEvent;
use crate::player::{Seat, TurnView};
use crate::resolver::{resolve_abilities, DefenseResponder, Resolution};
use crate::rules::is_playable;
use crate::turn::{TurnAdvance, TurnCoordinator};

/// Whether the game is still accepting moves.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    InProgress,
    Conceded { by: Seat },
}

/// Suit constraint set by a change-suit card, valid on one turn only.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct ActiveSuit {
    suit: Suit,
    turn: u32,
}

/// Result of a successful [`GameState::play_card`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlayOutcome {
    pub card: Card,
    pub resolution: Resolution,
}

/// Everything one game owns: deck, discard pile, both hands, turn order and
/// the event log. Passed explicitly to every operation.
#[derive(Debug)]
pub struct GameState {
    deck: Deck,
    discard: DiscardPile,
    hands: [Hand; 2],
    turn: TurnCoordinator,
    active_suit: Option<ActiveSuit>,
    status: GameStatus,
    events: Vec<GameEvent>,
}

/// Builds a shuffled 54-card deck and deals `hand_size` cards to each seat.
/// The human seat moves first.
///
/// ```
/// use onecard_engine::game::new_game;
/// use onecard_engine::player::Seat;
///
/// let game = new_game(42, 7);
/// assert_eq!(game.hand(Seat::Human).len(), 7);
/// assert_eq!(game.hand(Seat::Ai).len(), 7);
/// assert_eq!(game.deck().remaining(), 40);
/// assert_eq!(game.total_cards(), 54);
/// ```
pub fn new_game(seed: u64, hand_size: usize) -> GameState {
    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();
    let mut state = GameState::from_parts(
        deck,
        DiscardPile::new(),
        Vec::new(),
        Vec::new(),
        Seat::Human,
    );
    let per_hand = hand_size.min(DECK_SIZE / 2);
    for seat in [Seat::Human, Seat::Ai] {
        state.deal(seat, per_hand);
    }
    info!(seed, hand_size = per_hand, "new game dealt");
    state
}

impl GameState {
    /// Assembles a game from explicit parts. The lead card is the top of
    /// `discard`. Used for stacked scenarios and replays.
    pub fn from_parts(
        deck: Deck,
        discard: DiscardPile,
        human: Vec<Card>,
        ai: Vec<Card>,
        first: Seat,
    ) -> Self {
        Self {
            deck,
            discard,
            hands: [Hand::with_cards(human), Hand::with_cards(ai)],
            turn: TurnCoordinator::new(first),
            active_suit: None,
            status: GameStatus::InProgress,
            events: Vec::new(),
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn discard(&self) -> &DiscardPile {
        &self.discard
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.index()]
    }

    pub fn current_seat(&self) -> Seat {
        self.turn.current()
    }

    pub fn turn_number(&self) -> u32 {
        self.turn.turn_number()
    }

    pub fn skip_pending(&self) -> bool {
        self.turn.skip_pending()
    }

    /// Top of the discard pile. A reclaim never moves it.
    pub fn lead(&self) -> Option<Card> {
        self.discard.top()
    }

    /// Suit forced by a change-suit card for the current turn, if any.
    pub fn active_suit(&self) -> Option<Suit> {
        self.active_suit
            .filter(|a| a.turn == self.turn.turn_number())
            .map(|a| a.suit)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Cards across deck, discard pile and both hands; always 54 for a full game.
    pub fn total_cards(&self) -> usize {
        self.deck.remaining()
            + self.discard.len()
            + self.hands.iter().map(Hand::len).sum::<usize>()
    }

    pub fn view(&self, seat: Seat) -> TurnView<'_> {
        TurnView {
            seat,
            hand: self.hand(seat),
            lead: self.lead(),
            active_suit: self.active_suit(),
            opponent_cards: self.hand(seat.opponent()).len(),
            deck_remaining: self.deck.remaining(),
            turn_number: self.turn.turn_number(),
        }
    }

    /// Plays `card` for `seat` and resolves every ability it carries,
    /// including the full defend volley, before returning.
    ///
    /// Fails without touching any state when the game is over, it is not
    /// `seat`'s turn, the card is not held, or the card does not follow the lead.
    pub fn play_card(
        &mut self,
        seat: Seat,
        card: Card,
        suit: Option<Suit>,
        responder: &mut dyn DefenseResponder,
    ) -> Result<PlayOutcome, GameError> {
        self.ensure_turn(seat)?;
        if !self.hand(seat).contains(card) {
            return Err(GameError::CardNotInHand { card });
        }
        if !is_playable(card, self.lead(), self.active_suit()) {
            return Err(GameError::IllegalCard { card });
        }
        self.hand_mut(seat).remove(card)?;
        self.discard_card(card);
        info!(%seat, %card, "card played");
        self.record(GameEvent::Played { seat, card });

        let resolution = resolve_abilities(self, seat, card, suit, responder);
        Ok(PlayOutcome { card, resolution })
    }

    /// Takes one card for `seat`, reclaiming the discard pile if the deck is empty.
    pub fn draw_card(&mut self, seat: Seat) -> Result<Card, GameError> {
        self.ensure_turn(seat)?;
        let before = self.discard.len();
        let idx = seat.index();
        let card = self.hands[idx].draw(&mut self.deck, &mut self.discard)?;
        if self.discard.len() < before {
            self.record(GameEvent::Reclaimed {
                cards: before - self.discard.len(),
            });
        }
        debug!(%seat, %card, "card drawn");
        self.record(GameEvent::Drew { seat, card });
        Ok(card)
    }

    /// Ends the game for good. Every later operation fails with [`GameError::GameOver`].
    pub fn concede(&mut self, seat: Seat) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        self.status = GameStatus::Conceded { by: seat };
        info!(%seat, "game conceded");
        self.record(GameEvent::Conceded { seat });
        Ok(())
    }

    /// Passes the turn, consuming the skip flag if it is set.
    pub fn end_turn(&mut self) -> TurnAdvance {
        let advance = self.turn.end_turn();
        if let TurnAdvance::Skipped { skipped, .. } = advance {
            info!(%skipped, "turn skipped");
            self.record(GameEvent::TurnSkipped { skipped });
        }
        let now = self.turn.turn_number();
        if self.active_suit.is_some_and(|a| a.turn < now) {
            self.active_suit = None;
        }
        advance
    }

    fn ensure_turn(&self, seat: Seat) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let expected = self.turn.current();
        if seat != expected {
            return Err(GameError::NotPlayersTurn {
                expected,
                actual: seat,
            });
        }
        Ok(())
    }

    /// Deals up to `count` cards to `seat` and returns how many arrived.
    /// A shortfall is recorded as [`GameEvent::StockExhausted`].
    pub fn deal(&mut self, seat: Seat, count: usize) -> usize {
        let hand = &mut self.hands[seat.index()];
        let dealt = match hand.draw_initial(&mut self.deck, &mut self.discard, count) {
            Ok(dealt) => dealt,
            Err(e) => {
                warn!(%seat, count, error = %e, "nothing left to deal");
                0
            }
        };
        if dealt < count {
            self.record(GameEvent::StockExhausted {
                seat,
                missing: count - dealt,
            });
        }
        self.record(GameEvent::Dealt { seat, count: dealt });
        dealt
    }

    pub(crate) fn hand_mut(&mut self, seat: Seat) -> &mut Hand {
        &mut self.hands[seat.index()]
    }

    pub(crate) fn discard_card(&mut self, card: Card) {
        self.discard.add(card);
    }

    pub(crate) fn record(&mut self, event: GameEvent) {
        debug!(turn = self.turn.turn_number(), "{event}");
        self.events.push(event);
    }

    pub(crate) fn arm_skip(&mut self) {
        self.turn.set_skip();
    }

    /// Constrains the next turn to `suit`.
    pub(crate) fn set_active_suit(&mut self, suit: Suit) {
        self.active_suit = Some(ActiveSuit {
            suit,
            turn: self.turn.turn_number() + 1,
        });
    }

    /// Penalty draw of `count` cards for `seat`. Draws whatever exists when
    /// the stock runs dry and returns the number of cards received.
    pub(crate) fn force_draw(&mut self, seat: Seat, count: u32) -> usize {
        let wanted = count as usize;
        let idx = seat.index();
        let drawn = match draw_with_reclaim(&mut self.deck, &mut self.discard, wanted) {
            Ok(refill) => {
                if refill.reclaimed > 0 {
                    self.record(GameEvent::Reclaimed {
                        cards: refill.reclaimed,
                    });
                }
                let got = refill.cards.len();
                self.hands[idx].extend(refill.cards);
                got
            }
            Err(_) => 0,
        };
        if drawn < wanted {
            let missing = wanted - drawn;
            warn!(%seat, missing, "stock exhausted during penalty draw");
            self.record(GameEvent::StockExhausted { seat, missing });
        }
        info!(%seat, requested = count, drawn, "forced draw");
        self.record(GameEvent::ForcedDraw {
            seat,
            requested: count,
            drawn,
        });
        drawn
    }
}
