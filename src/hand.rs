use crate::cards::{parse_cards, Card};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Largest hand any supported variant deals to one player.
pub const MAX_HAND_SIZE: usize = 7;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("a hand needs at least one card")]
    Empty,
    #[error("too many cards in hand: {0}")]
    TooManyCards(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Orders cards by rank descending, aces high, suit ranking breaking ties.
pub fn aces_high_desc(a: &Card, b: &Card) -> Ordering {
    b.cmp(a)
}

/// Orders cards by rank descending with the ace below Two, suit ranking breaking ties.
pub fn aces_low_desc(a: &Card, b: &Card) -> Ordering {
    b.rank().low_value().cmp(&a.rank().low_value()).then(b.suit().cmp(&a.suit()))
}

/// The cards held by one player: between one and seven of them.
///
/// Short hands come from stripped-deck games where not every street has been
/// dealt yet; long hands are evaluated as their best five cards.
///
/// ```
/// use poker_logic::cards::Rank;
/// use poker_logic::hand::Hand;
///
/// let mut hand: Hand = "7S AC 9H".parse().unwrap();
/// hand.sort_desc(false);
/// assert_eq!(hand.cards()[0].rank(), Rank::Ace);
/// hand.sort_desc(true);
/// assert_eq!(hand.cards()[2].rank(), Rank::Ace);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.is_empty() {
            return Err(HandError::Empty);
        }
        if cards.len() > MAX_HAND_SIZE {
            return Err(HandError::TooManyCards(cards.len()));
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a constructed hand; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Sort by rank, highest first. With `aces_low` the ace sorts last.
    pub fn sort_desc(&mut self, aces_low: bool) {
        if aces_low {
            self.cards.sort_by(aces_low_desc);
        } else {
            self.cards.sort_by(aces_high_desc);
        }
    }

    /// Sort by rank, lowest first. With `aces_low` the ace sorts first.
    pub fn sort_asc(&mut self, aces_low: bool) {
        self.sort_desc(aces_low);
        self.cards.reverse();
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Hand::try_new(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl AsRef<[Card]> for Hand {
    fn as_ref(&self) -> &[Card] {
        &self.cards
    }
}
