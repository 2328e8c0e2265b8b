//! Stdin-driven participant for the human seat.

use std::io::{BufRead, Write};

use onecard_engine::cards::Card;
use onecard_engine::player::{DefenseView, Move, Participant, TurnView};

use crate::formatters::{format_card, format_cards, format_hand_indexed, format_suit};
use crate::io_utils::read_stdin_line;
use crate::validation::{DefenseInput, ParseResult, parse_defense, parse_move};

/// Prompts on `out` and reads decisions from `input`, re-prompting until
/// the line parses.
///
/// `q` and end of input set [`quit_requested`](Self::quit_requested); the
/// turn in progress then concedes (or declines to defend) so the caller can
/// stop. End of input additionally sets [`input_closed`](Self::input_closed).
/// I/O failures are kept for the caller via [`take_io_error`](Self::take_io_error).
pub struct HumanParticipant<'a> {
    input: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
    quit: bool,
    input_closed: bool,
    io_error: Option<std::io::Error>,
}

impl<'a> HumanParticipant<'a> {
    pub fn new(input: &'a mut dyn BufRead, out: &'a mut dyn Write) -> Self {
        Self {
            input,
            out,
            quit: false,
            input_closed: false,
            io_error: None,
        }
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn input_closed(&self) -> bool {
        self.input_closed
    }

    pub fn take_io_error(&mut self) -> Option<std::io::Error> {
        self.io_error.take()
    }

    fn show_turn(&mut self, view: &TurnView<'_>) -> std::io::Result<()> {
        let lead = view
            .lead
            .map(|c| format_card(&c))
            .unwrap_or_else(|| "-".to_string());
        write!(self.out, "Turn {} | Lead: {}", view.turn_number, lead)?;
        if let Some(suit) = view.active_suit {
            write!(self.out, " | Suit: {}", format_suit(&suit))?;
        }
        writeln!(
            self.out,
            " | Opponent: {} cards | Deck: {}",
            view.opponent_cards, view.deck_remaining
        )?;
        writeln!(self.out, "Hand: {}", format_hand_indexed(view.hand.cards()))?;
        writeln!(self.out, "Playable: {}", format_cards(&view.playable()))?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        let line = read_stdin_line(self.input)?;
        if line.is_none() {
            self.quit = true;
            self.input_closed = true;
        }
        Ok(line)
    }

    fn try_move(&mut self, view: &TurnView<'_>) -> std::io::Result<Move> {
        self.show_turn(view)?;
        loop {
            let Some(line) = self.ask("Enter move (play <n> [suit]/draw/concede/q): ")? else {
                return Ok(Move::Concede);
            };
            match parse_move(&line, view.hand.cards()) {
                ParseResult::Move(mv) => return Ok(mv),
                ParseResult::Quit => {
                    self.quit = true;
                    return Ok(Move::Concede);
                }
                ParseResult::Invalid(msg) => writeln!(self.out, "Error: {}", msg)?,
            }
        }
    }

    fn try_defense(&mut self, view: &DefenseView<'_>) -> std::io::Result<Option<Card>> {
        let defenders = view.hand.defenders(view.pending);
        if defenders.is_empty() {
            writeln!(
                self.out,
                "Attack for {}: no card can defend, drawing.",
                view.pending
            )?;
            return Ok(None);
        }
        writeln!(
            self.out,
            "Attack for {}! Defenders: {}",
            view.pending,
            format_hand_indexed(&defenders)
        )?;
        loop {
            let Some(line) = self.ask("Defend with (number/draw/q): ")? else {
                return Ok(None);
            };
            match parse_defense(&line, &defenders) {
                DefenseInput::Counter(card) => return Ok(Some(card)),
                DefenseInput::Pass => return Ok(None),
                DefenseInput::Quit => {
                    self.quit = true;
                    return Ok(None);
                }
                DefenseInput::Invalid(msg) => writeln!(self.out, "Error: {}", msg)?,
            }
        }
    }
}

impl Participant for HumanParticipant<'_> {
    fn choose_move(&mut self, view: &TurnView<'_>) -> Move {
        if self.quit {
            return Move::Concede;
        }
        match self.try_move(view) {
            Ok(mv) => mv,
            Err(e) => {
                self.io_error = Some(e);
                self.quit = true;
                Move::Concede
            }
        }
    }

    fn choose_defense(&mut self, view: &DefenseView<'_>) -> Option<Card> {
        if self.quit {
            return None;
        }
        self.try_defense(view).unwrap_or_else(|e| {
            self.io_error = Some(e);
            self.quit = true;
            None
        })
    }

    fn name(&self) -> &str {
        "human"
    }
}
