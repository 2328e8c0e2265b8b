//! Input parsing for the interactive `play` command.
//!
//! Turn input (case-insensitive):
//! - `play <n> [suit]` or `p <n> [suit]` plays the n-th card of the hand
//!   (1-based); `suit` names the new suit for a Seven
//! - `draw` or `d` draws one card
//! - `concede`
//! - `q` or `quit`
//!
//! Defence input: a 1-based index into the listed defenders, or `pass`/`draw`
//! to take the penalty (an empty line also passes).

use onecard_engine::cards::{Card, Suit};
use onecard_engine::player::Move;

/// Outcome of parsing one line of turn input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Move(Move),
    Quit,
    Invalid(String),
}

/// Outcome of parsing one line of defence input.
#[derive(Debug, PartialEq)]
pub enum DefenseInput {
    Counter(Card),
    Pass,
    Quit,
    Invalid(String),
}

/// Parse a line of turn input against the cards currently in hand.
///
/// # Example
///
/// ```rust
/// # use onecard_cli::validation::{parse_move, ParseResult};
/// use onecard_engine::cards::{Card, Rank, Suit};
/// use onecard_engine::player::Move;
///
/// let hand = [Card::new(Suit::Heart, Rank::Seven)];
/// assert_eq!(
///     parse_move("play 1 spade", &hand),
///     ParseResult::Move(Move::Play { card: hand[0], suit: Some(Suit::Spade) })
/// );
/// assert_eq!(parse_move("draw", &hand), ParseResult::Move(Move::Draw));
/// assert_eq!(parse_move("q", &hand), ParseResult::Quit);
/// assert!(matches!(parse_move("play 9", &hand), ParseResult::Invalid(_)));
/// ```
pub fn parse_move(input: &str, hand: &[Card]) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    match parts[0] {
        "q" | "quit" => ParseResult::Quit,
        "draw" | "d" => ParseResult::Move(Move::Draw),
        "concede" => ParseResult::Move(Move::Concede),
        "play" | "p" => {
            let Some(index) = parts.get(1) else {
                return ParseResult::Invalid(
                    "Play requires a card number (e.g., 'play 2')".to_string(),
                );
            };
            let card = match select_card(index, hand) {
                Ok(card) => card,
                Err(msg) => return ParseResult::Invalid(msg),
            };
            let suit = match parts.get(2) {
                Some(name) => match Suit::parse(name) {
                    Some(suit) => Some(suit),
                    None => {
                        return ParseResult::Invalid(format!(
                            "Unknown suit '{}' (expected heart, diamond, spade or club)",
                            name
                        ));
                    }
                },
                None => None,
            };
            if parts.len() > 3 {
                return ParseResult::Invalid("Too many arguments for play".to_string());
            }
            ParseResult::Move(Move::Play { card, suit })
        }
        other => ParseResult::Invalid(format!(
            "Unrecognized command '{}'. Use: play <n> [suit], draw, concede, q",
            other
        )),
    }
}

/// Parse a line of defence input against the cards able to defend.
pub fn parse_defense(input: &str, defenders: &[Card]) -> DefenseInput {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "" | "n" | "no" | "pass" | "d" | "draw" => DefenseInput::Pass,
        "q" | "quit" => DefenseInput::Quit,
        index => match select_card(index, defenders) {
            Ok(card) => DefenseInput::Counter(card),
            Err(msg) => DefenseInput::Invalid(msg),
        },
    }
}

fn select_card(index: &str, cards: &[Card]) -> Result<Card, String> {
    let n: usize = index
        .parse()
        .map_err(|_| format!("Invalid card number '{}'", index))?;
    if n == 0 || n > cards.len() {
        return Err(format!("Card number must be within 1..={}", cards.len()));
    }
    Ok(cards[n - 1])
}
