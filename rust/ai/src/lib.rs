//! # onecard-ai: Decision Providers for the AI Seat
//!
//! The engine resolves every rule mechanically; this crate supplies the
//! "which card?" decisions for a computer-controlled seat through the
//! engine's [`Participant`] trait.
//!
//! ## Core Components
//!
//! - [`baseline`] - Mechanical placeholder: first legal card, otherwise draw
//! - [`random`] - Uniformly random legal move, seeded for reproducibility
//! - [`create_ai`] - Factory that builds a provider by name
//!
//! ## Quick Start
//!
//! ```rust
//! use onecard_ai::create_ai;
//! use onecard_engine::engine::Engine;
//!
//! let mut human = create_ai("baseline", 1).expect("known ai");
//! let mut ai = create_ai("random", 2).expect("known ai");
//!
//! let mut engine = Engine::new(Some(42), 7);
//! let played = engine.run(human.as_mut(), ai.as_mut(), 10).unwrap();
//! assert_eq!(played, 10);
//! assert_eq!(engine.state().total_cards(), 54);
//! ```

pub use onecard_engine::player::Participant;

pub mod baseline;
pub mod random;

/// Names accepted by [`create_ai`].
pub const AI_KINDS: &[&str] = &["baseline", "random"];

/// Builds a decision provider by name. `seed` feeds providers that use randomness.
///
/// Returns `None` for an unknown name.
///
/// ```rust
/// use onecard_ai::create_ai;
///
/// let ai = create_ai("baseline", 0).unwrap();
/// assert_eq!(ai.name(), "BaselineAI");
/// assert!(create_ai("grandmaster", 0).is_none());
/// ```
pub fn create_ai(kind: &str, seed: u64) -> Option<Box<dyn Participant + Send>> {
    match kind {
        "baseline" => Some(Box::new(baseline::BaselineAI::new())),
        "random" => Some(Box::new(random::RandomAI::new(seed))),
        _ => None,
    }
}
