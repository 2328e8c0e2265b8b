use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

use crate::cards::{Card, Suit};
use crate::player::Seat;

/// Observable things that happen during a game.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEvent {
    Dealt { seat: Seat, count: usize },
    Played { seat: Seat, card: Card },
    Drew { seat: Seat, card: Card },
    SuitChanged { seat: Seat, suit: Suit },
    SkipArmed { seat: Seat },
    TurnSkipped { skipped: Seat },
    AttackLaunched { seat: Seat, card: Card, value: u32 },
    /// `pending` is the escalated value now aimed at the other side.
    Countered { seat: Seat, card: Card, pending: u32 },
    DefenseFailed { seat: Seat, offered: Option<Card>, pending: u32 },
    ForcedDraw { seat: Seat, requested: u32, drawn: usize },
    Reclaimed { cards: usize },
    StockExhausted { seat: Seat, missing: usize },
    Conceded { seat: Seat },
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::Dealt { seat, count } => write!(f, "{seat} is dealt {count} cards"),
            GameEvent::Played { seat, card } => write!(f, "{seat} plays {card}"),
            GameEvent::Drew { seat, card } => write!(f, "{seat} draws {card}"),
            GameEvent::SuitChanged { seat, suit } => {
                write!(f, "{seat} changes the suit to {suit}")
            }
            GameEvent::SkipArmed { seat } => {
                write!(f, "{seat} skips the next player's turn")
            }
            GameEvent::TurnSkipped { skipped } => write!(f, "{skipped}'s turn is skipped"),
            GameEvent::AttackLaunched { seat, card, value } => {
                write!(f, "{seat} attacks with {card} for {value}")
            }
            GameEvent::Countered {
                seat,
                card,
                pending,
            } => write!(f, "{seat} defends with {card}, passing {pending} back"),
            GameEvent::DefenseFailed {
                seat,
                offered: Some(card),
                pending,
            } => write!(f, "{card} is not a valid defence; {seat} must draw {pending}"),
            GameEvent::DefenseFailed {
                seat,
                offered: None,
                pending,
            } => write!(f, "{seat} cannot defend and must draw {pending}"),
            GameEvent::ForcedDraw {
                seat,
                requested,
                drawn,
            } => write!(f, "{seat} draws {drawn} of {requested} penalty cards"),
            GameEvent::Reclaimed { cards } => {
                write!(f, "discard pile shuffled back into the deck ({cards} cards)")
            }
            GameEvent::StockExhausted { seat, missing } => {
                write!(f, "deck and discard pile are empty; {seat} is spared {missing}")
            }
            GameEvent::Conceded { seat } => write!(f, "{seat} concedes"),
        }
    }
}

/// One event as written to a JSON-lines stream.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub seq: u64,
    pub turn: u32,
    #[serde(default)]
    pub ts: Option<String>,
    pub event: GameEvent,
}

/// Writes events as JSON lines (LF only) to any writer.
pub struct EventWriter<W: Write> {
    writer: W,
    seq: u64,
}

impl<W: Write> EventWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, seq: 0 }
    }

    pub fn write(&mut self, turn: u32, event: &GameEvent) -> std::io::Result<()> {
        self.seq += 1;
        let rec = EventRecord {
            seq: self.seq,
            turn,
            ts: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)),
            event: event.clone(),
        };
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    #[test]
    fn writes_jsonl_with_lf_only() {
        let mut w = EventWriter::new(Vec::new());
        w.write(
            1,
            &GameEvent::Played {
                seat: Seat::Human,
                card: Card::new(Suit::Club, Rank::Ace),
            },
        )
        .unwrap();
        w.write(2, &GameEvent::Conceded { seat: Seat::Ai }).unwrap();
        let bytes = w.into_inner();
        assert!(bytes.ends_with(b"\n"));
        assert!(!bytes.contains(&b'\r'));

        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        let rec: EventRecord = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(rec.seq, 2);
        assert_eq!(rec.event, GameEvent::Conceded { seat: Seat::Ai });
        assert!(lines[0].contains("\"kind\":\"played\""));
    }
}
