use tracing::info;

use crate::cards::Card;
use crate::errors::GameError;
use crate::game::{new_game, GameState, PlayOutcome};
use crate::logger::GameEvent;
use crate::player::{DefenseView, Move, Participant, Seat};
use crate::resolver::DefenseResponder;
use crate::turn::TurnAdvance;

/// Default seed used when the caller does not provide one.
pub const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// Routes defence requests to whichever participant sits on the attacked side.
struct Seats<'a> {
    human: &'a mut dyn Participant,
    ai: &'a mut dyn Participant,
}

impl DefenseResponder for Seats<'_> {
    fn respond(&mut self, view: &DefenseView<'_>) -> Option<Card> {
        match view.seat {
            Seat::Human => self.human.choose_defense(view),
            Seat::Ai => self.ai.choose_defense(view),
        }
    }
}

/// What the active seat did on its turn.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TurnAction {
    Played(PlayOutcome),
    Drew(Card),
    Conceded,
}

/// Summary of one completed turn.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TurnReport {
    pub seat: Seat,
    pub turn_number: u32,
    pub action: TurnAction,
    /// `None` once the game has ended.
    pub advance: Option<TurnAdvance>,
    /// Events recorded during this turn, in order.
    pub events: Vec<GameEvent>,
}

/// Turn coordinator: owns the game and asks the seated participants for
/// decisions one synchronous call at a time.
///
/// # Examples
///
/// ```
/// use onecard_engine::engine::Engine;
///
/// let engine = Engine::new(Some(12345), 7);
/// assert_eq!(engine.state().total_cards(), 54);
/// assert_eq!(engine.seed(), 12345);
/// ```
#[derive(Debug)]
pub struct Engine {
    state: GameState,
    seed: u64,
}

impl Engine {
    pub fn new(seed: Option<u64>, hand_size: usize) -> Self {
        let seed = seed.unwrap_or(DEFAULT_SEED);
        Self {
            state: new_game(seed, hand_size),
            seed,
        }
    }

    /// Wraps an already assembled game.
    pub fn from_state(state: GameState, seed: u64) -> Self {
        Self { state, seed }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current_seat(&self) -> Seat {
        self.state.current_seat()
    }

    /// Runs one turn: asks the active seat for a move, applies it with all
    /// of its effects, then advances turn order.
    ///
    /// A rejected move (`CardNotInHand`, `IllegalCard`) returns the error and
    /// leaves both the state and the turn untouched so the caller can ask again.
    pub fn play_turn(
        &mut self,
        human: &mut dyn Participant,
        ai: &mut dyn Participant,
    ) -> Result<TurnReport, GameError> {
        if self.state.is_over() {
            return Err(GameError::GameOver);
        }
        let seat = self.state.current_seat();
        let turn_number = self.state.turn_number();
        let mark = self.state.events().len();

        let mv = {
            let view = self.state.view(seat);
            match seat {
                Seat::Human => human.choose_move(&view),
                Seat::Ai => ai.choose_move(&view),
            }
        };

        let action = match mv {
            Move::Play { card, suit } => {
                let mut seats = Seats { human, ai };
                TurnAction::Played(self.state.play_card(seat, card, suit, &mut seats)?)
            }
            Move::Draw => TurnAction::Drew(self.state.draw_card(seat)?),
            Move::Concede => {
                self.state.concede(seat)?;
                TurnAction::Conceded
            }
        };

        let advance = if self.state.is_over() {
            None
        } else {
            Some(self.state.end_turn())
        };

        Ok(TurnReport {
            seat,
            turn_number,
            action,
            advance,
            events: self.state.events()[mark..].to_vec(),
        })
    }

    /// Plays turns until the game ends or `max_turns` turns have been taken.
    /// Returns the number of turns played.
    pub fn run(
        &mut self,
        human: &mut dyn Participant,
        ai: &mut dyn Participant,
        max_turns: u32,
    ) -> Result<u32, GameError> {
        let mut played = 0;
        while played < max_turns && !self.state.is_over() {
            self.play_turn(human, ai)?;
            played += 1;
        }
        info!(played, seed = self.seed, "run finished");
        Ok(played)
    }

    /// Ends the game from any state on behalf of `seat`.
    pub fn concede(&mut self, seat: Seat) -> Result<(), GameError> {
        self.state.concede(seat)
    }
}
