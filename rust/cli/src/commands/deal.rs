//! Deal command: shuffle, deal both hands and print the table.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_card, format_cards};
use onecard_engine::engine::Engine;
use onecard_engine::player::Seat;
use std::io::Write;

/// Deals a fresh game and prints both hands, the deck size and the top of
/// the stock. The same seed always prints the same deal.
pub fn handle_deal_command(
    seed: Option<u64>,
    hand_size: Option<usize>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load()?;
    let hand_size = hand_size.unwrap_or(cfg.hand_size);
    config::validate(&config::Config {
        hand_size,
        ..cfg.clone()
    })?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let eng = Engine::new(Some(seed), hand_size);
    let state = eng.state();
    writeln!(out, "Seed: {}", seed)?;
    writeln!(
        out,
        "Human: {}",
        format_cards(state.hand(Seat::Human).cards())
    )?;
    writeln!(out, "AI: {}", format_cards(state.hand(Seat::Ai).cards()))?;
    let top = state
        .deck()
        .cards()
        .last()
        .map(format_card)
        .unwrap_or_else(|| "-".to_string());
    writeln!(out, "Deck: {} cards (top {})", state.deck().remaining(), top)?;
    Ok(())
}
