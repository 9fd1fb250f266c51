use super::strength::{compare_groups, HandStrength};
use super::Category;
use crate::cards::{Card, Rank, Suit};
use crate::hand::{aces_high_desc, aces_low_desc};
use core::cmp::Ordering;

/// Number of cards a finished poker hand is made of.
pub const BEST_HAND_SIZE: usize = 5;

/// Category checks shared by every variant.
///
/// The only configuration is the lowest rank present in the deck, which decides
/// which run an ace may complete from below, and the size of a finished hand.
/// Each check returns `None` when the cards do not form the category.
///
/// The `check_*` methods test the exact cards given. The `find_*` methods look
/// for the best five-card straight, flush or straight flush inside a larger set
/// and hand the chosen cards to the matching `check_*`.
///
/// ```
/// use poker_logic::cards::{parse_cards, Rank};
/// use poker_logic::evaluator::{Category, HandTypeCheckCalculator};
///
/// let calc = HandTypeCheckCalculator::new(Rank::Seven);
/// let cards = parse_cards("AC 7D 8C 9H TS").unwrap();
/// let s = calc.check_straight(&cards, true).unwrap();
/// assert_eq!(s.category(), Category::Straight);
/// assert_eq!(s.highest_rank(), Rank::Ten);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandTypeCheckCalculator {
    deck_lowest_rank: Rank,
    hand_size: usize,
}

impl Default for HandTypeCheckCalculator {
    fn default() -> Self {
        Self::new(Rank::Two)
    }
}

impl HandTypeCheckCalculator {
    pub const fn new(deck_lowest_rank: Rank) -> Self {
        Self { deck_lowest_rank, hand_size: BEST_HAND_SIZE }
    }

    /// Override the finished hand size. Panics below two cards.
    pub const fn with_hand_size(self, hand_size: usize) -> Self {
        assert!(hand_size >= 2, "a finished hand needs at least two cards");
        Self { hand_size, ..self }
    }

    pub const fn deck_lowest_rank(&self) -> Rank {
        self.deck_lowest_rank
    }

    pub const fn hand_size(&self) -> usize {
        self.hand_size
    }

    /// Run the check for one category, using best-subset search where the
    /// category allows it.
    pub fn check(&self, category: Category, cards: &[Card]) -> Option<HandStrength> {
        match category {
            Category::StraightFlush => self.find_straight_flush(cards),
            Category::FourOfAKind => self.check_many_of_a_kind(cards, 4),
            Category::FullHouse => self.check_full_house(cards),
            Category::Flush => self.find_flush(cards),
            Category::Straight => self.find_straight(cards),
            Category::ThreeOfAKind => self.check_many_of_a_kind(cards, 3),
            Category::TwoPair => self.check_two_pairs(cards),
            Category::Pair => self.check_many_of_a_kind(cards, 2),
            Category::HighCard => self.check_high_card(cards),
        }
    }

    /// First category in `order` the cards satisfy.
    pub fn classify(&self, cards: &[Card], order: &[Category]) -> Option<HandStrength> {
        order.iter().find_map(|&category| self.check(category, cards))
    }

    /// All cards are one run and one suit.
    pub fn check_straight_flush(&self, cards: &[Card]) -> Option<HandStrength> {
        self.check_flush(cards, 1)?;
        let straight =
            self.check_straight(cards, false).or_else(|| self.check_straight(cards, true))?;
        Some(straight.into_category(Category::StraightFlush))
    }

    /// All cards share a suit and there are at least `min_cards` of them.
    pub fn check_flush(&self, cards: &[Card], min_cards: usize) -> Option<HandStrength> {
        let first = cards.first()?;
        if cards.len() < min_cards || cards.iter().any(|c| c.suit() != first.suit()) {
            return None;
        }
        let sorted = sorted_desc(cards);
        Some(HandStrength {
            category: Category::Flush,
            highest_rank: sorted[0].rank(),
            second_rank: sorted.get(1).map(|c| c.rank()),
            kicker_cards: Vec::new(),
            cards_used_in_hand: sorted.clone(),
            groups: vec![sorted],
        })
    }

    /// All cards form one run of consecutive ranks.
    ///
    /// With `aces_low` an ace may sit directly below the deck's lowest rank.
    /// Any two or more cards are accepted, so short runs can be tested too.
    pub fn check_straight(&self, cards: &[Card], aces_low: bool) -> Option<HandStrength> {
        if cards.len() < 2 {
            return None;
        }
        let order: fn(&Card, &Card) -> Ordering =
            if aces_low { aces_low_desc } else { aces_high_desc };
        let mut sorted = cards.to_vec();
        sorted.sort_by(order);

        let floor = self.deck_lowest_rank;
        let consecutive = sorted.windows(2).all(|w| {
            let (upper, lower) = (w[0].rank(), w[1].rank());
            lower.value() + 1 == upper.value() || (aces_low && lower == Rank::Ace && upper == floor)
        });
        if !consecutive {
            return None;
        }

        let (top, second) = (sorted[0], sorted[1]);
        sorted.reverse();
        Some(HandStrength {
            category: Category::Straight,
            highest_rank: top.rank(),
            second_rank: Some(second.rank()),
            kicker_cards: Vec::new(),
            cards_used_in_hand: sorted,
            groups: vec![vec![top], vec![second]],
        })
    }

    /// Highest rank held at least `n` times.
    ///
    /// Panics unless `n` is 2, 3 or 4: no other count names a category.
    pub fn check_many_of_a_kind(&self, cards: &[Card], n: usize) -> Option<HandStrength> {
        let category = of_a_kind_category(n);
        let sorted = sorted_desc(cards);
        let rank = highest_rank_with_count(&sorted, n)?;

        let (set, mut kickers): (Vec<Card>, Vec<Card>) =
            sorted.into_iter().partition(|c| c.rank() == rank);
        kickers.truncate(self.hand_size.saturating_sub(n));

        let mut used = set.clone();
        used.extend_from_slice(&kickers);
        Some(HandStrength {
            category,
            highest_rank: rank,
            second_rank: None,
            kicker_cards: kickers.clone(),
            cards_used_in_hand: used,
            groups: vec![vec![rank_marker(rank)], kickers, set],
        })
    }

    pub fn check_full_house(&self, cards: &[Card]) -> Option<HandStrength> {
        self.check_double_many_cards(cards, 3)
    }

    pub fn check_two_pairs(&self, cards: &[Card]) -> Option<HandStrength> {
        self.check_double_many_cards(cards, 2)
    }

    /// Best `n` of a kind, then the best pair among the remaining ranks.
    fn check_double_many_cards(&self, cards: &[Card], n: usize) -> Option<HandStrength> {
        let category = match n {
            2 => Category::TwoPair,
            3 => Category::FullHouse,
            _ => panic!("no two-group category is built from {n} of a kind"),
        };
        let first = self.check_many_of_a_kind(cards, n)?;
        let top = first.highest_rank;
        let rest: Vec<Card> = cards.iter().copied().filter(|c| c.rank() != top).collect();
        let second = self.check_many_of_a_kind(&rest, 2)?;
        let low = second.highest_rank;

        let mut kickers =
            sorted_desc(&rest.iter().copied().filter(|c| c.rank() != low).collect::<Vec<_>>());
        kickers.truncate(self.hand_size.saturating_sub(n + 2));
        let top_set =
            sorted_desc(&cards.iter().copied().filter(|c| c.rank() == top).collect::<Vec<_>>());

        let mut used = top_set.clone();
        used.extend(second.groups[2].iter().take(2));
        used.extend_from_slice(&kickers);
        Some(HandStrength {
            category,
            highest_rank: top,
            second_rank: Some(low),
            kicker_cards: kickers.clone(),
            cards_used_in_hand: used,
            groups: vec![vec![rank_marker(top)], vec![rank_marker(low)], kickers, top_set],
        })
    }

    /// Succeeds for any non-empty set of cards.
    pub fn check_high_card(&self, cards: &[Card]) -> Option<HandStrength> {
        let mut sorted = sorted_desc(cards);
        sorted.truncate(self.hand_size);
        let highest_rank = sorted.first()?.rank();
        Some(HandStrength {
            category: Category::HighCard,
            highest_rank,
            second_rank: sorted.get(1).map(|c| c.rank()),
            kicker_cards: sorted.clone(),
            cards_used_in_hand: sorted.clone(),
            groups: vec![sorted],
        })
    }

    /// Best run of `hand_size` ranks, taking the strongest suit of each rank.
    pub fn find_straight(&self, cards: &[Card]) -> Option<HandStrength> {
        let len = self.hand_size as u8;
        if cards.len() < self.hand_size {
            return None;
        }
        let mut best: [Option<Card>; 15] = [None; 15];
        for &c in cards {
            let slot = &mut best[c.rank().value() as usize];
            if slot.map_or(true, |b| c > b) {
                *slot = Some(c);
            }
        }

        let ace = Rank::Ace.value();
        for top in (len + 1..=ace).rev() {
            let run: Option<Vec<Card>> = (0..len).map(|i| best[(top - i) as usize]).collect();
            if let Some(run) = run {
                return self.check_straight(&run, false);
            }
        }

        // the ace completes the lowest run from below the deck floor
        let floor = self.deck_lowest_rank.value();
        let mut run: Vec<Card> = (0..len - 1)
            .map(|i| best.get((floor + i) as usize).copied().flatten())
            .collect::<Option<_>>()?;
        run.push(best[ace as usize]?);
        self.check_straight(&run, true)
    }

    /// Best `hand_size` cards of a suit holding at least that many.
    pub fn find_flush(&self, cards: &[Card]) -> Option<HandStrength> {
        Suit::ALL
            .iter()
            .filter_map(|&suit| {
                let mut suited = cards_of_suit(cards, suit);
                suited.sort_by(aces_high_desc);
                suited.truncate(self.hand_size);
                self.check_flush(&suited, self.hand_size)
            })
            .max_by(|a, b| compare_groups(&a.groups, &b.groups))
    }

    /// Best run found inside a single suit.
    pub fn find_straight_flush(&self, cards: &[Card]) -> Option<HandStrength> {
        Suit::ALL
            .iter()
            .filter_map(|&suit| {
                let straight = self.find_straight(&cards_of_suit(cards, suit))?;
                self.check_straight_flush(&straight.cards_used_in_hand)
            })
            .max_by(|a, b| compare_groups(&a.groups, &b.groups))
    }
}

fn of_a_kind_category(n: usize) -> Category {
    match n {
        2 => Category::Pair,
        3 => Category::ThreeOfAKind,
        4 => Category::FourOfAKind,
        _ => panic!("no hand category is made of {n} cards of a kind"),
    }
}

fn sorted_desc(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by(aces_high_desc);
    sorted
}

fn cards_of_suit(cards: &[Card], suit: Suit) -> Vec<Card> {
    cards.iter().copied().filter(|c| c.suit() == suit).collect()
}

/// Stands in for "any card of this rank" in a tie-break group.
fn rank_marker(rank: Rank) -> Card {
    Card::new(rank, Suit::Hearts)
}

/// Scans cards sorted highest first; the first rank to reach `n` is the highest.
fn highest_rank_with_count(sorted: &[Card], n: usize) -> Option<Rank> {
    let mut last = None;
    let mut count = 0;
    for card in sorted {
        if last == Some(card.rank()) {
            count += 1;
        } else {
            last = Some(card.rank());
            count = 1;
        }
        if count == n {
            return last;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn cards(s: &str) -> Vec<Card> {
        parse_cards(s).expect("valid cards")
    }

    fn seven() -> HandTypeCheckCalculator {
        HandTypeCheckCalculator::new(Rank::Seven)
    }

    #[test]
    fn flush_requires_one_suit_and_min_cards() {
        let calc = seven();
        let s = calc.check_flush(&cards("8D AD TD"), 3).unwrap();
        assert_eq!(s.category(), Category::Flush);
        assert_eq!(s.highest_rank(), Rank::Ace);
        assert_eq!(s.groups(), &[cards("AD TD 8D")]);
        assert!(calc.check_flush(&cards("8D AD TD"), 4).is_none());
        assert!(calc.check_flush(&cards("8D AD TH"), 1).is_none());
        assert!(calc.check_flush(&[], 0).is_none());
    }

    #[test]
    fn straight_groups_are_top_two_cards() {
        let s = seven().check_straight(&cards("9H JD 7C TS 8S"), false).unwrap();
        assert_eq!(s.highest_rank(), Rank::Jack);
        assert_eq!(s.second_rank(), Some(Rank::Ten));
        assert_eq!(s.groups(), &[cards("JD"), cards("TS")]);
        assert_eq!(s.cards_used_in_hand(), &cards("7C 8S 9H TS JD")[..]);
    }

    #[test]
    fn straight_rejects_gaps_pairs_and_single_cards() {
        let calc = seven();
        assert!(calc.check_straight(&cards("7C 8S TH JD QS"), false).is_none());
        assert!(calc.check_straight(&cards("7C 8S 8H 9D TS"), false).is_none());
        assert!(calc.check_straight(&cards("AS"), false).is_none());
        assert!(calc.check_straight(&cards("9S TD"), false).is_some());
    }

    #[test]
    fn ace_low_follows_deck_floor() {
        let floor_seven = seven();
        assert!(floor_seven.check_straight(&cards("AC 7D 8C 9H TS"), true).is_some());
        assert!(floor_seven.check_straight(&cards("AC 7D 8C 9H TS"), false).is_none());

        let floor_five = HandTypeCheckCalculator::new(Rank::Five);
        assert!(floor_five.check_straight(&cards("AC 5D 6C 7H 8S"), true).is_some());
        assert!(floor_five.check_straight(&cards("AC 6D 7C 8H 9S"), true).is_none());

        let standard = HandTypeCheckCalculator::default();
        let wheel = standard.check_straight(&cards("AC 2D 3C 4H 5S"), true).unwrap();
        assert_eq!(wheel.highest_rank(), Rank::Five);
        assert_eq!(wheel.cards_used_in_hand()[0], cards("AC")[0]);
    }

    #[test]
    fn ace_high_run_is_not_accepted_in_low_mode() {
        assert!(seven().check_straight(&cards("AC KD QC JH TS"), true).is_none());
        assert!(seven().check_straight(&cards("AC KD QC JH TS"), false).is_some());
    }

    #[test]
    fn straight_flush_needs_both_properties() {
        let calc = seven();
        let s = calc.check_straight_flush(&cards("7S 8S 9S TS JS")).unwrap();
        assert_eq!(s.category(), Category::StraightFlush);
        assert_eq!(s.highest_rank(), Rank::Jack);
        assert!(calc.check_straight_flush(&cards("7S 8S 9S TS JH")).is_none());
        assert!(calc.check_straight_flush(&cards("7S 8S 9S TS QS")).is_none());
        let low = calc.check_straight_flush(&cards("AS 7S 8S 9S TS")).unwrap();
        assert_eq!(low.highest_rank(), Rank::Ten);
    }

    #[test]
    fn many_of_a_kind_trips_with_paired_kickers() {
        let s = seven().check_many_of_a_kind(&cards("8S 8H 8D 9S 9D"), 3).unwrap();
        assert_eq!(s.category(), Category::ThreeOfAKind);
        assert_eq!(s.highest_rank(), Rank::Eight);
        assert_eq!(s.kicker_cards(), &cards("9D 9S")[..]);
        assert_eq!(s.groups(), &[cards("8H"), cards("9D 9S"), cards("8H 8D 8S")]);
        assert_eq!(s.cards_used_in_hand(), &cards("8H 8D 8S 9D 9S")[..]);
    }

    #[test]
    fn many_of_a_kind_finds_highest_rank() {
        let s = seven().check_many_of_a_kind(&cards("7S 7H KD KC 9S"), 2).unwrap();
        assert_eq!(s.highest_rank(), Rank::King);
        assert_eq!(s.kicker_cards(), &cards("9S 7H 7S")[..]);
        assert!(seven().check_many_of_a_kind(&cards("7S 8H KD"), 2).is_none());
    }

    #[test]
    fn kickers_fill_up_to_five_cards() {
        let s = seven().check_many_of_a_kind(&cards("TS TC QS 9C 8S 7D"), 2).unwrap();
        assert_eq!(s.kicker_cards(), &cards("QS 9C 8S")[..]);
    }

    #[test]
    fn hand_size_limits_kickers() {
        let calc = seven().with_hand_size(3);
        assert_eq!(calc.hand_size(), 3);
        let s = calc.check_many_of_a_kind(&cards("TS TC QS 9C 8S"), 2).unwrap();
        assert_eq!(s.kicker_cards(), &cards("QS")[..]);
    }

    #[test]
    #[should_panic(expected = "no hand category")]
    fn five_of_a_kind_is_a_defect() {
        let _ = seven().check_many_of_a_kind(&cards("AS AH"), 5);
    }

    #[test]
    fn full_house_and_two_pairs() {
        let calc = seven();
        let fh = calc.check_full_house(&cards("9D 9S 8D 8H 8C")).unwrap();
        assert_eq!(fh.category(), Category::FullHouse);
        assert_eq!(fh.highest_rank(), Rank::Eight);
        assert_eq!(fh.second_rank(), Some(Rank::Nine));
        assert_eq!(fh.groups(), &[cards("8H"), cards("9H"), vec![], cards("8H 8D 8C")]);

        let tp = calc.check_two_pairs(&cards("AH AD KS KC JD")).unwrap();
        assert_eq!(tp.category(), Category::TwoPair);
        assert_eq!(tp.highest_rank(), Rank::Ace);
        assert_eq!(tp.second_rank(), Some(Rank::King));
        assert_eq!(tp.kicker_cards(), &cards("JD")[..]);
        assert_eq!(tp.groups()[3], cards("AH AD"));

        assert!(calc.check_two_pairs(&cards("AH AD KS QC JD")).is_none());
        assert!(calc.check_full_house(&cards("AH AD AS QC JD")).is_none());
    }

    #[test]
    fn three_pairs_keep_best_two_and_best_kicker() {
        let tp = seven().check_two_pairs(&cards("8H 8S 9C 9D KC KD")).unwrap();
        assert_eq!(tp.highest_rank(), Rank::King);
        assert_eq!(tp.second_rank(), Some(Rank::Nine));
        assert_eq!(tp.kicker_cards(), &cards("8H")[..]);
    }

    #[test]
    fn high_card_always_succeeds_when_non_empty() {
        let calc = seven();
        let s = calc.check_high_card(&cards("TS")).unwrap();
        assert_eq!(s.highest_rank(), Rank::Ten);
        assert_eq!(s.second_rank(), None);
        let s = calc.check_high_card(&cards("7S 9D QH 8C KS AD")).unwrap();
        assert_eq!(s.groups(), &[cards("AD KS QH 9D 8C")]);
        assert!(calc.check_high_card(&[]).is_none());
    }

    #[test]
    fn find_straight_picks_best_run_and_suits() {
        let calc = seven();
        let s = calc.find_straight(&cards("JC 9H 7D 8C TS JH")).unwrap();
        assert_eq!(s.groups(), &[cards("JH"), cards("TS")]);
        let s = calc.find_straight(&cards("AS 7D 8C 9H QH TS")).unwrap();
        assert_eq!(s.highest_rank(), Rank::Ten);
        assert!(calc.find_straight(&cards("8C 9C TC JC")).is_none());
        assert!(calc.find_straight(&cards("AS 8D 9C TH JS")).is_none());
    }

    #[test]
    fn find_straight_flush_stays_in_one_suit() {
        let calc = seven();
        // run 7-J exists, but only across two suits
        assert!(calc.find_straight_flush(&cards("7S 8S 9S TS JH QS")).is_none());
        let s = calc.find_straight_flush(&cards("7S 8S 9S TS TC JS")).unwrap();
        assert_eq!(s.category(), Category::StraightFlush);
        assert_eq!(s.cards_used_in_hand(), &cards("7S 8S 9S TS JS")[..]);
    }

    #[test]
    fn find_flush_takes_top_five_of_suit() {
        let s = seven().find_flush(&cards("7D 8C 9D TD JD QD AD")).unwrap();
        assert_eq!(s.groups(), &[cards("AD QD JD TD 9D")]);
        assert!(seven().find_flush(&cards("7D 9D TD JD")).is_none());
    }

    #[test]
    fn classify_is_idempotent() {
        let calc = seven();
        let hand = cards("KD KC KS JH TH 8C 7D");
        let order = [Category::ThreeOfAKind, Category::HighCard];
        assert_eq!(calc.classify(&hand, &order), calc.classify(&hand, &order));
        assert_eq!(calc.classify(&hand, &order).unwrap().category(), Category::ThreeOfAKind);
    }
}
