use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four suits. Jokers carry no suit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts (♥)
    Heart,
    /// Diamonds (♦)
    Diamond,
    /// Spades (♠)
    Spade,
    /// Clubs (♣)
    Club,
}

impl Suit {
    /// Parses a suit name or its first letter, case-insensitively.
    ///
    /// ```
    /// use onecard_engine::cards::Suit;
    ///
    /// assert_eq!(Suit::parse("spade"), Some(Suit::Spade));
    /// assert_eq!(Suit::parse("H"), Some(Suit::Heart));
    /// assert_eq!(Suit::parse("stars"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Suit> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h" | "heart" | "hearts" => Some(Suit::Heart),
            "d" | "diamond" | "diamonds" => Some(Suit::Diamond),
            "s" | "spade" | "spades" => Some(Suit::Spade),
            "c" | "club" | "clubs" => Some(Suit::Club),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Suit::Heart => "Heart",
            Suit::Diamond => "Diamond",
            Suit::Spade => "Spade",
            Suit::Club => "Club",
        };
        f.write_str(name)
    }
}

/// Card rank: the thirteen standard ranks plus the two Jokers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
    /// First Joker
    JokerOne,
    /// Second Joker
    JokerTwo,
}

impl Rank {
    pub fn is_joker(self) -> bool {
        matches!(self, Rank::JokerOne | Rank::JokerTwo)
    }

    /// Abilities granted by this rank.
    pub fn abilities(self) -> &'static [Ability] {
        match self {
            Rank::Two | Rank::Ace | Rank::JokerOne | Rank::JokerTwo => {
                &[Ability::Attack, Ability::Defend]
            }
            Rank::Jack | Rank::Queen | Rank::King => &[Ability::Skip],
            Rank::Seven => &[Ability::ChangeSuit],
            _ => &[],
        }
    }

    /// Number of cards an attack with this rank forces the opponent to draw.
    pub fn attack_value(self) -> Option<u32> {
        match self {
            Rank::Two => Some(2),
            Rank::Ace => Some(3),
            Rank::JokerOne | Rank::JokerTwo => Some(5),
            _ => None,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Jack => f.write_str("Jack"),
            Rank::Queen => f.write_str("Queen"),
            Rank::King => f.write_str("King"),
            Rank::Ace => f.write_str("Ace"),
            Rank::JokerOne => f.write_str("Joker 1"),
            Rank::JokerTwo => f.write_str("Joker 2"),
            other => write!(f, "{}", *other as u8),
        }
    }
}

/// Named effect attached to a card by its rank.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Ability {
    /// Opponent must draw the card's attack value unless they counter.
    Attack,
    /// The card can absorb and escalate a pending attack.
    Defend,
    /// Sets the suit the next turn must follow.
    ChangeSuit,
    /// Opponent loses their next turn.
    Skip,
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Ability::Attack => "attack",
            Ability::Defend => "defend",
            Ability::ChangeSuit => "change-suit",
            Ability::Skip => "skip",
        };
        f.write_str(name)
    }
}

/// A single playing card. `suit` is `None` exactly for the two Jokers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    pub suit: Option<Suit>,
    pub rank: Rank,
}

impl Card {
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Card {
            suit: Some(suit),
            rank,
        }
    }

    pub const fn joker(rank: Rank) -> Self {
        Card { suit: None, rank }
    }

    pub fn abilities(&self) -> &'static [Ability] {
        self.rank.abilities()
    }

    pub fn has(&self, ability: Ability) -> bool {
        self.abilities().contains(&ability)
    }

    pub fn attack_value(&self) -> Option<u32> {
        self.rank.attack_value()
    }

    pub fn is_joker(&self) -> bool {
        self.rank.is_joker()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.suit {
            Some(suit) => write!(f, "{} of {}", self.rank, suit),
            None => write!(f, "{}", self.rank),
        }
    }
}

/// Total number of cards in a game: 52 standard cards and two Jokers.
pub const DECK_SIZE: usize = 54;

pub fn all_suits() -> [Suit; 4] {
    [Suit::Heart, Suit::Diamond, Suit::Spade, Suit::Club]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// The full 54-card set in a fixed, unshuffled order.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card::new(s, r));
        }
    }
    v.push(Card::joker(Rank::JokerOne));
    v.push(Card::joker(Rank::JokerTwo));
    v
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn full_deck_has_54_unique_cards() {
        let deck = full_deck();
        assert_eq!(deck.len(), DECK_SIZE);
        let set: HashSet<Card> = deck.iter().copied().collect();
        assert_eq!(set.len(), DECK_SIZE);
        assert_eq!(deck.iter().filter(|c| c.suit.is_none()).count(), 2);
    }

    #[test]
    fn abilities_follow_rank() {
        assert_eq!(
            Card::new(Suit::Heart, Rank::Two).abilities(),
            &[Ability::Attack, Ability::Defend]
        );
        assert_eq!(
            Card::joker(Rank::JokerTwo).abilities(),
            &[Ability::Attack, Ability::Defend]
        );
        assert_eq!(Card::new(Suit::Club, Rank::Queen).abilities(), &[Ability::Skip]);
        assert_eq!(
            Card::new(Suit::Club, Rank::Seven).abilities(),
            &[Ability::ChangeSuit]
        );
        assert!(Card::new(Suit::Club, Rank::Nine).abilities().is_empty());
    }

    #[test]
    fn attack_values() {
        assert_eq!(Rank::Two.attack_value(), Some(2));
        assert_eq!(Rank::Ace.attack_value(), Some(3));
        assert_eq!(Rank::JokerOne.attack_value(), Some(5));
        assert_eq!(Rank::King.attack_value(), None);
    }

    #[test]
    fn display_names() {
        assert_eq!(Card::new(Suit::Spade, Rank::Ace).to_string(), "Ace of Spade");
        assert_eq!(Card::new(Suit::Heart, Rank::Ten).to_string(), "10 of Heart");
        assert_eq!(Card::joker(Rank::JokerOne).to_string(), "Joker 1");
    }
}
