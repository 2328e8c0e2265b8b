//! # onecard-engine: One Card Rules Engine
//!
//! Rules engine for a two-seat "One Card" shedding game (a Mau-Mau/Uno
//! relative): a shared 54-card deck, a discard pile that is shuffled back in
//! when the deck runs out, and special cards that attack, defend, change the
//! suit or skip a turn.
//!
//! ## Core Modules
//!
//! - [`cards`] - Suit, Rank, Ability and Card; the 54-card set
//! - [`deck`] - Seeded ChaCha20 shuffling and short-aware draws
//! - [`discard`] - Discard pile and reclaim-on-empty draws
//! - [`hand`] - One hand type for both seats
//! - [`player`] - Seats, moves and the [`player::Participant`] decision trait
//! - [`resolver`] - Ability resolution and the attack/defend volley
//! - [`turn`] - Turn order and the one-shot skip flag
//! - [`rules`] - Play legality against the lead card and active suit
//! - [`game`] - [`game::GameState`], the single owner of all game data
//! - [`engine`] - Turn coordinator driving two participants
//! - [`logger`] - Game events and JSON-lines output
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use onecard_engine::cards::{Card, Rank, Suit};
//! use onecard_engine::deck::Deck;
//! use onecard_engine::discard::DiscardPile;
//! use onecard_engine::game::GameState;
//! use onecard_engine::player::{DefenseView, Seat};
//!
//! // Human attacks with an Ace; the AI holds only a Two and cannot counter.
//! let ace = Card::new(Suit::Spade, Rank::Ace);
//! let two = Card::new(Suit::Heart, Rank::Two);
//! let mut game = GameState::from_parts(
//!     Deck::new_with_seed(42),
//!     DiscardPile::new(),
//!     vec![ace],
//!     vec![two],
//!     Seat::Human,
//! );
//!
//! let mut top_card = |v: &DefenseView<'_>| v.hand.cards().last().copied();
//! game.play_card(Seat::Human, ace, None, &mut top_card).unwrap();
//! assert_eq!(game.hand(Seat::Ai).len(), 4);
//! assert_eq!(game.deck().remaining(), 51);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Every shuffle in a game, including reclaims, draws from one seeded RNG:
//!
//! ```rust
//! use onecard_engine::game::new_game;
//! use onecard_engine::player::Seat;
//!
//! let a = new_game(7, 7);
//! let b = new_game(7, 7);
//! assert_eq!(a.hand(Seat::Human).cards(), b.hand(Seat::Human).cards());
//! ```

pub mod cards;
pub mod deck;
pub mod discard;
pub mod engine;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod player;
pub mod resolver;
pub mod rules;
pub mod turn;
