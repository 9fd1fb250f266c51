use crate::cards::Rank;
use crate::evaluator::Category;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const STANDARD_ORDER: [Category; 9] = [
    Category::StraightFlush,
    Category::FourOfAKind,
    Category::FullHouse,
    Category::Flush,
    Category::Straight,
    Category::ThreeOfAKind,
    Category::TwoPair,
    Category::Pair,
    Category::HighCard,
];

// A flush is harder than a full house once the deck is stripped to 32 cards.
const TELESINA_ORDER: [Category; 9] = [
    Category::StraightFlush,
    Category::FourOfAKind,
    Category::Flush,
    Category::FullHouse,
    Category::Straight,
    Category::ThreeOfAKind,
    Category::TwoPair,
    Category::Pair,
    Category::HighCard,
];

/// Ranking rules that differ between the games the evaluator serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Variant {
    /// Conventional category order.
    #[default]
    Standard,
    /// Stripped-deck game: flush over full house, flush ties go to the better suit.
    Telesina,
}

impl Variant {
    /// Categories strongest first; the order hands are classified in.
    pub const fn check_order(self) -> &'static [Category; 9] {
        match self {
            Variant::Standard => &STANDARD_ORDER,
            Variant::Telesina => &TELESINA_ORDER,
        }
    }

    /// Relative strength of a category in this variant, higher is stronger.
    ///
    /// ```
    /// use poker_logic::evaluator::Category;
    /// use poker_logic::variants::Variant;
    ///
    /// let (plain, tel) = (Variant::Standard, Variant::Telesina);
    /// assert!(plain.strength(Category::FullHouse) > plain.strength(Category::Flush));
    /// assert!(tel.strength(Category::Flush) > tel.strength(Category::FullHouse));
    /// ```
    pub fn strength(self, category: Category) -> u8 {
        let order = self.check_order();
        let pos = order.iter().position(|&c| c == category).unwrap_or(order.len() - 1);
        (order.len() - 1 - pos) as u8
    }

    /// Whether two flushes compare by suit before rank.
    pub const fn flush_suit_decides(self) -> bool {
        matches!(self, Variant::Telesina)
    }

    /// Lowest rank in the deck this variant is usually dealt from.
    pub const fn default_deck_floor(self) -> Rank {
        match self {
            Variant::Standard => Rank::Two,
            Variant::Telesina => Rank::Seven,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Standard => f.write_str("standard"),
            Variant::Telesina => f.write_str("telesina"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VariantParseError {
    #[error("unknown variant: '{0}'")]
    Unknown(String),
}

impl FromStr for Variant {
    type Err = VariantParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Variant::Standard),
            "telesina" => Ok(Variant::Telesina),
            _ => Err(VariantParseError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_strength_matches_category_order() {
        for c in STANDARD_ORDER {
            assert_eq!(Variant::Standard.strength(c), c.ordinal());
        }
    }

    #[test]
    fn telesina_swaps_flush_and_full_house_only() {
        let t = Variant::Telesina;
        assert_eq!(t.strength(Category::Flush), Category::FullHouse.ordinal());
        assert_eq!(t.strength(Category::FullHouse), Category::Flush.ordinal());
        assert_eq!(t.strength(Category::Straight), Category::Straight.ordinal());
        assert!(t.flush_suit_decides());
        assert!(!Variant::Standard.flush_suit_decides());
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("Telesina".parse::<Variant>().unwrap(), Variant::Telesina);
        assert_eq!(Variant::Standard.to_string(), "standard");
        assert!("omaha".parse::<Variant>().is_err());
        assert_eq!(Variant::default().default_deck_floor(), Rank::Two);
    }
}
