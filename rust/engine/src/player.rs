use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::{Card, Suit};
use crate::hand::Hand;
use crate::rules::is_playable;

/// Which side of the table a hand belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Seat {
    Human,
    Ai,
}

impl Seat {
    pub fn opponent(self) -> Seat {
        match self {
            Seat::Human => Seat::Ai,
            Seat::Ai => Seat::Human,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Seat::Human => 0,
            Seat::Ai => 1,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seat::Human => f.write_str("human"),
            Seat::Ai => f.write_str("ai"),
        }
    }
}

/// A move chosen by a participant for its turn.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Move {
    /// Play a card from hand. `suit` is the target suit for a change-suit card.
    Play { card: Card, suit: Option<Suit> },
    /// Take one card from the deck.
    Draw,
    /// End the game immediately.
    Concede,
}

/// Read-only snapshot handed to a participant when it must pick a move.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    pub seat: Seat,
    pub hand: &'a Hand,
    pub lead: Option<Card>,
    pub active_suit: Option<Suit>,
    pub opponent_cards: usize,
    pub deck_remaining: usize,
    pub turn_number: u32,
}

impl TurnView<'_> {
    /// Cards in hand that may legally be played this turn.
    pub fn playable(&self) -> Vec<Card> {
        self.hand
            .cards()
            .iter()
            .copied()
            .filter(|c| is_playable(*c, self.lead, self.active_suit))
            .collect()
    }
}

/// Snapshot handed to a participant that is under attack.
#[derive(Debug, Clone, Copy)]
pub struct DefenseView<'a> {
    pub seat: Seat,
    pub hand: &'a Hand,
    /// Cards this side must draw unless it counters.
    pub pending: u32,
}

/// External decision provider for one seat (stdin for a person, a policy for the AI).
///
/// The coordinator calls these synchronously during the turn; nothing polls.
pub trait Participant {
    /// Choose the move for this turn.
    fn choose_move(&mut self, view: &TurnView<'_>) -> Move;

    /// Offer a card to counter a pending attack, or `None` to take the draw.
    ///
    /// The engine validates the offer: a card that is not held, cannot defend,
    /// or is worth less than the pending value is treated as a failed defence.
    fn choose_defense(&mut self, view: &DefenseView<'_>) -> Option<Card>;

    fn name(&self) -> &str;
}

/// Mechanical defence: offer the top card of the hand, whatever it is.
pub fn offer_top_card(view: &DefenseView<'_>) -> Option<Card> {
    view.hand.cards().last().copied()
}
