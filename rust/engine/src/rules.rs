use crate::cards::{Card, Suit};

/// Whether `card` may be played on `lead` under an optional active-suit constraint.
///
/// Jokers can always be played and anything may follow a Joker or an empty
/// lead. While a change-suit is in force only that suit is accepted;
/// otherwise the card must match the lead's suit or rank.
///
/// # Examples
///
/// ```
/// use onecard_engine::cards::{Card, Rank, Suit};
/// use onecard_engine::rules::is_playable;
///
/// let lead = Card::new(Suit::Heart, Rank::Nine);
/// assert!(is_playable(Card::new(Suit::Heart, Rank::Three), Some(lead), None));
/// assert!(is_playable(Card::new(Suit::Club, Rank::Nine), Some(lead), None));
/// assert!(!is_playable(Card::new(Suit::Club, Rank::Three), Some(lead), None));
///
/// // A change-suit to Spade overrides the lead.
/// assert!(is_playable(Card::new(Suit::Spade, Rank::Three), Some(lead), Some(Suit::Spade)));
/// assert!(!is_playable(Card::new(Suit::Heart, Rank::Three), Some(lead), Some(Suit::Spade)));
/// ```
pub fn is_playable(card: Card, lead: Option<Card>, active_suit: Option<Suit>) -> bool {
    if card.is_joker() {
        return true;
    }
    if let Some(suit) = active_suit {
        return card.suit == Some(suit);
    }
    match lead {
        None => true,
        Some(lead) if lead.is_joker() => true,
        Some(lead) => lead.suit == card.suit || lead.rank == card.rank,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    #[test]
    fn anything_goes_on_empty_lead_or_joker() {
        let c = Card::new(Suit::Diamond, Rank::Five);
        assert!(is_playable(c, None, None));
        assert!(is_playable(c, Some(Card::joker(Rank::JokerTwo)), None));
    }

    #[test]
    fn joker_ignores_active_suit() {
        let lead = Card::new(Suit::Heart, Rank::Seven);
        assert!(is_playable(Card::joker(Rank::JokerOne), Some(lead), Some(Suit::Club)));
    }

    #[test]
    fn active_suit_beats_rank_match() {
        let lead = Card::new(Suit::Heart, Rank::Seven);
        assert!(!is_playable(
            Card::new(Suit::Diamond, Rank::Seven),
            Some(lead),
            Some(Suit::Club)
        ));
    }
}
