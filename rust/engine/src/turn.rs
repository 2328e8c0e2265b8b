use serde::{Deserialize, Serialize};

use crate::player::Seat;

/// How the turn changed hands when [`TurnCoordinator::end_turn`] ran.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum TurnAdvance {
    /// Normal alternation.
    Passed { to: Seat },
    /// The skip flag was consumed: `skipped` loses the turn and `to` goes again.
    Skipped { skipped: Seat, to: Seat },
}

impl TurnAdvance {
    pub fn next(&self) -> Seat {
        match *self {
            TurnAdvance::Passed { to } | TurnAdvance::Skipped { to, .. } => to,
        }
    }
}

/// Strict two-seat alternation with a one-shot skip flag.
///
/// Turns are numbered from 1; a skipped turn still consumes a number so
/// effects scoped to "the following turn" expire with it.
#[derive(Debug, Clone)]
pub struct TurnCoordinator {
    current: Seat,
    turn_number: u32,
    skip_next: bool,
}

impl TurnCoordinator {
    pub fn new(first: Seat) -> Self {
        Self {
            current: first,
            turn_number: 1,
            skip_next: false,
        }
    }

    pub fn current(&self) -> Seat {
        self.current
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn set_skip(&mut self) {
        self.skip_next = true;
    }

    pub fn skip_pending(&self) -> bool {
        self.skip_next
    }

    /// Hands the turn to the opponent, or consumes the skip flag and keeps the
    /// current seat for one more turn.
    pub fn end_turn(&mut self) -> TurnAdvance {
        let opponent = self.current.opponent();
        if self.skip_next {
            self.skip_next = false;
            self.turn_number += 2;
            TurnAdvance::Skipped {
                skipped: opponent,
                to: self.current,
            }
        } else {
            self.turn_number += 1;
            self.current = opponent;
            TurnAdvance::Passed { to: opponent }
        }
    }
}
