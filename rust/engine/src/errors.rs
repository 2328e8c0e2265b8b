use thiserror::Error;

use crate::cards::Card;
use crate::player::Seat;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck is empty and the discard pile has nothing to reclaim")]
    DeckExhaustedAndDiscardEmpty,
    #[error("Card {card} is not in hand")]
    CardNotInHand { card: Card },
    #[error("Card {card} cannot be played on the current lead")]
    IllegalCard { card: Card },
    #[error("It's not {actual}'s turn (expected {expected})")]
    NotPlayersTurn { expected: Seat, actual: Seat },
    #[error("Game is over")]
    GameOver,
}
