//! Card and hand formatters for terminal display.
//!
//! Suits render as ♥ ♦ ♠ ♣ where the terminal supports Unicode, with an
//! ASCII letter fallback (h d s c) on legacy Windows consoles.
//!
//! ## Example
//!
//! ```rust
//! use onecard_engine::cards::{Card, Rank, Suit};
//! use onecard_cli::formatters::{format_card, format_cards};
//!
//! let ace_spades = Card::new(Suit::Spade, Rank::Ace);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//!
//! let hand = vec![ace_spades];
//! assert!(format_cards(&hand).starts_with("[A"));
//! ```

use onecard_engine::cards::{Card, Rank, Suit};

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Unix-like systems are
/// assumed to support Unicode.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Heart => "♥",
            Suit::Diamond => "♦",
            Suit::Spade => "♠",
            Suit::Club => "♣",
        }
        .to_string()
    } else {
        match suit {
            Suit::Heart => "h",
            Suit::Diamond => "d",
            Suit::Spade => "s",
            Suit::Club => "c",
        }
        .to_string()
    }
}

/// Short rank label: 2-10, J, Q, K, A, and JK1/JK2 for the Jokers.
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        Rank::Ace => "A".to_string(),
        Rank::JokerOne => "JK1".to_string(),
        Rank::JokerTwo => "JK2".to_string(),
        other => (*other as u8).to_string(),
    }
}

/// String like "A♠" (Unicode), "As" (ASCII) or "JK1" for a Joker.
pub fn format_card(card: &Card) -> String {
    match &card.suit {
        Some(suit) => format!("{}{}", format_rank(&card.rank), format_suit(suit)),
        None => format_rank(&card.rank),
    }
}

/// Bracketed card list, e.g. "[A♠ 7♥ JK2]" or "[]".
pub fn format_cards(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// Numbered hand listing for prompts, 1-based: "1:A♠ 2:7♥".
pub fn format_hand_indexed(cards: &[Card]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}:{}", i + 1, format_card(c)))
        .collect::<Vec<_>>()
        .join(" ")
}
