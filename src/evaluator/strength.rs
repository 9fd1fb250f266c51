use super::Category;
use crate::cards::{Card, Rank};
use core::cmp::Ordering;
use serde::Serialize;

/// Result of a successful category check.
///
/// `groups` is what decides ties: two strengths of the same category carry
/// groups of the same shape, and comparing them group by group, card by card
/// (rank first, then suit ranking) gives the order between the two hands.
///
/// | category        | groups                                                   |
/// |-----------------|----------------------------------------------------------|
/// | straight (flush)| `[top card]`, `[second card]`                            |
/// | flush, high card| all cards, highest first                                 |
/// | n of a kind     | `[rank]`, kickers, every card of the rank                |
/// | two pair, full  | `[top rank]`, `[second rank]`, kickers, top-rank cards   |
///
/// A `[rank]` group holds one hearts card of that rank so that the rank alone is
/// compared at that position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandStrength {
    pub(super) category: Category,
    pub(super) highest_rank: Rank,
    pub(super) second_rank: Option<Rank>,
    pub(super) kicker_cards: Vec<Card>,
    pub(super) cards_used_in_hand: Vec<Card>,
    pub(super) groups: Vec<Vec<Card>>,
}

impl HandStrength {
    pub fn category(&self) -> Category {
        self.category
    }

    /// Rank defining the category: the pair, the trips, the top of the run.
    pub fn highest_rank(&self) -> Rank {
        self.highest_rank
    }

    /// Second defining rank where one exists (lower pair, the full house pair).
    pub fn second_rank(&self) -> Option<Rank> {
        self.second_rank
    }

    pub fn kicker_cards(&self) -> &[Card] {
        &self.kicker_cards
    }

    pub fn cards_used_in_hand(&self) -> &[Card] {
        &self.cards_used_in_hand
    }

    pub fn groups(&self) -> &[Vec<Card>] {
        &self.groups
    }

    pub(super) fn into_category(self, category: Category) -> Self {
        Self { category, ..self }
    }
}

/// Lexicographic comparison of tie-break groups.
///
/// Groups are compared in order; within a group cards are compared in order.
/// When one group is a prefix of the other the longer group is stronger.
pub fn compare_groups(a: &[Vec<Card>], b: &[Vec<Card>]) -> Ordering {
    for (ga, gb) in a.iter().zip(b) {
        let ord = ga.iter().cmp(gb.iter());
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.len().cmp(&b.len())
}
