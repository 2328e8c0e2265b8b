//! Ability resolution for a played card.
//!
//! Every ability on the card is applied in order. Attack opens a volley
//! against the opponent. Defend has no effect on the play itself; it marks
//! the card as a valid counter inside a volley:
//!
//! 1. The side under attack is asked for a counter card.
//! 2. A held Defend card worth at least the pending value is discarded, its
//!    value is added to the pending total and the attack turns around.
//! 3. Anything else (no offer, empty hand, a weak or foreign card) makes that
//!    side draw the pending total and ends the volley. The offered card stays
//!    in hand.
//!
//! Each counter removes one card from a hand, so the loop is bounded by the
//! cards in play.

use tracing::info;

use crate::cards::{Ability, Card, Suit};
use crate::game::GameState;
use crate::logger::GameEvent;
use crate::player::{DefenseView, Seat};

/// Answers "which card do you counter with?" for whichever side is under attack.
pub trait DefenseResponder {
    fn respond(&mut self, view: &DefenseView<'_>) -> Option<Card>;
}

impl<F> DefenseResponder for F
where
    F: FnMut(&DefenseView<'_>) -> Option<Card>,
{
    fn respond(&mut self, view: &DefenseView<'_>) -> Option<Card> {
        self(view)
    }
}

/// How an attack volley ended.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Volley {
    /// Counters in the order they were played.
    pub counters: Vec<(Seat, Card)>,
    /// Side that failed to counter and took the penalty.
    pub loser: Seat,
    /// Final pending value when the volley stopped.
    pub penalty: u32,
    /// Cards the loser actually received.
    pub drawn: usize,
}

/// Effects applied by one play.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Resolution {
    pub volley: Option<Volley>,
    pub suit_changed: Option<Suit>,
    pub skip_armed: bool,
}

pub(crate) fn resolve_abilities(
    state: &mut GameState,
    seat: Seat,
    card: Card,
    suit: Option<Suit>,
    responder: &mut dyn DefenseResponder,
) -> Resolution {
    let mut resolution = Resolution::default();

    for ability in card.abilities() {
        match ability {
            Ability::Attack => {
                if let Some(value) = card.attack_value() {
                    info!(%seat, %card, value, "attack launched");
                    state.record(GameEvent::AttackLaunched { seat, card, value });
                    resolution.volley = Some(run_volley(state, seat.opponent(), value, responder));
                }
            }
            Ability::Defend => {}
            Ability::ChangeSuit => {
                if let Some(target) = suit.or(card.suit) {
                    state.set_active_suit(target);
                    info!(%seat, suit = %target, "suit changed");
                    state.record(GameEvent::SuitChanged { seat, suit: target });
                    resolution.suit_changed = Some(target);
                }
            }
            Ability::Skip => {
                state.arm_skip();
                info!(%seat, "next turn will be skipped");
                state.record(GameEvent::SkipArmed { seat });
                resolution.skip_armed = true;
            }
        }
    }

    resolution
}

fn run_volley(
    state: &mut GameState,
    first_defender: Seat,
    opening: u32,
    responder: &mut dyn DefenseResponder,
) -> Volley {
    let mut side = first_defender;
    let mut pending = opening;
    let mut counters = Vec::new();

    loop {
        let offered = responder.respond(&DefenseView {
            seat: side,
            hand: state.hand(side),
            pending,
        });
        let counter = offered.and_then(|c| counter_value(c, pending).map(|v| (c, v)));

        if let Some((card, value)) = counter {
            if state.hand_mut(side).remove(card).is_ok() {
                state.discard_card(card);
                pending += value;
                info!(seat = %side, %card, pending, "attack countered");
                state.record(GameEvent::Countered {
                    seat: side,
                    card,
                    pending,
                });
                counters.push((side, card));
                side = side.opponent();
                continue;
            }
        }

        info!(seat = %side, pending, "defence failed");
        state.record(GameEvent::DefenseFailed {
            seat: side,
            offered,
            pending,
        });
        let drawn = state.force_draw(side, pending);
        return Volley {
            counters,
            loser: side,
            penalty: pending,
            drawn,
        };
    }
}

/// Value of `card` as a counter against `pending`, if it qualifies.
fn counter_value(card: Card, pending: u32) -> Option<u32> {
    if !card.has(Ability::Defend) {
        return None;
    }
    card.attack_value().filter(|v| *v >= pending)
}
