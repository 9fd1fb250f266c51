//! Hand classification and comparison.
//!
//! [`HandTypeCheckCalculator`] tests cards for one category at a time and builds a
//! [`HandStrength`] whose tie-break groups fully describe how two hands of the
//! same category compare. [`HandComparator`] runs the checks strongest-first for a
//! [`Variant`](crate::variants::Variant) and orders the results.

mod calculator;
mod comparator;
mod strength;

pub use calculator::{HandTypeCheckCalculator, BEST_HAND_SIZE};
pub use comparator::HandComparator;
pub use strength::{compare_groups, HandStrength};

use crate::hand::HandError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Poker hand category from weakest to strongest.
///
/// The declaration order is the conventional ranking; variants may reorder
/// categories when comparing (see [`Variant::strength`](crate::variants::Variant::strength)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "high card",
            Category::Pair => "pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "four of a kind",
            Category::StraightFlush => "straight flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
}
