use super::calculator::HandTypeCheckCalculator;
use super::strength::{compare_groups, HandStrength};
use super::{Category, EvalError};
use crate::cards::{Card, Rank};
use crate::hand::{HandError, MAX_HAND_SIZE};
use crate::variants::Variant;
use core::cmp::Ordering;

/// Total order over hands of one to seven cards.
///
/// Each hand is classified by running the variant's category checks strongest
/// first. A stronger category wins outright; equal categories fall through to
/// the tie-break groups. Hands of different sizes compare directly: hands over
/// five cards play as their best five.
///
/// ```
/// use poker_logic::cards::Rank;
/// use poker_logic::evaluator::HandComparator;
/// use poker_logic::hand::Hand;
/// use poker_logic::variants::Variant;
/// use std::cmp::Ordering;
///
/// let comp = HandComparator::new(Variant::Telesina, Rank::Seven);
/// let trips: Hand = "AS AC AD 7S 8D".parse().unwrap();
/// let pair: Hand = "AS AC KH QS JH".parse().unwrap();
/// assert_eq!(comp.compare(&trips, &pair).unwrap(), Ordering::Greater);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandComparator {
    variant: Variant,
    calculator: HandTypeCheckCalculator,
}

impl Default for HandComparator {
    fn default() -> Self {
        Self::new(Variant::Standard, Rank::Two)
    }
}

impl HandComparator {
    pub const fn new(variant: Variant, deck_lowest_rank: Rank) -> Self {
        Self { variant, calculator: HandTypeCheckCalculator::new(deck_lowest_rank) }
    }

    pub const fn variant(&self) -> Variant {
        self.variant
    }

    pub const fn deck_lowest_rank(&self) -> Rank {
        self.calculator.deck_lowest_rank()
    }

    pub const fn calculator(&self) -> &HandTypeCheckCalculator {
        &self.calculator
    }

    /// Classify a hand: the first category in the variant's order it satisfies.
    pub fn evaluate<H: AsRef<[Card]> + ?Sized>(&self, hand: &H) -> Result<HandStrength, EvalError> {
        let cards = hand.as_ref();
        if cards.len() > MAX_HAND_SIZE {
            return Err(HandError::TooManyCards(cards.len()).into());
        }
        self.calculator
            .classify(cards, self.variant.check_order())
            .ok_or_else(|| HandError::Empty.into())
    }

    /// Order two hands; `Greater` means `a` beats `b`.
    pub fn compare<H: AsRef<[Card]> + ?Sized>(&self, a: &H, b: &H) -> Result<Ordering, EvalError> {
        let sa = self.evaluate(a)?;
        let sb = self.evaluate(b)?;
        Ok(self.compare_strengths(&sa, &sb))
    }

    /// Order two already classified hands.
    pub fn compare_strengths(&self, a: &HandStrength, b: &HandStrength) -> Ordering {
        let strength = |s: &HandStrength| self.variant.strength(s.category());
        strength(a)
            .cmp(&strength(b))
            .then_with(|| {
                if a.category() == Category::Flush && self.variant.flush_suit_decides() {
                    let suit = |s: &HandStrength| s.cards_used_in_hand().first().map(|c| c.suit());
                    suit(a).cmp(&suit(b))
                } else {
                    Ordering::Equal
                }
            })
            .then_with(|| compare_groups(a.groups(), b.groups()))
    }

    /// Indices of the strongest hands; more than one on a tie.
    pub fn best_hands<H: AsRef<[Card]>>(&self, hands: &[H]) -> Result<Vec<usize>, EvalError> {
        let strengths = hands.iter().map(|h| self.evaluate(h)).collect::<Result<Vec<_>, _>>()?;
        let Some(best) = strengths.iter().max_by(|a, b| self.compare_strengths(a, b)) else {
            return Ok(Vec::new());
        };
        Ok(strengths
            .iter()
            .enumerate()
            .filter(|(_, s)| self.compare_strengths(s, best) == Ordering::Equal)
            .map(|(i, _)| i)
            .collect())
    }
}
