use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A deck, possibly stripped of its low ranks.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    lowest_rank: Rank,
}

impl Deck {
    /// ```
    /// use poker_logic::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        Self::stripped(Rank::Two)
    }

    /// Every card ranked `lowest_rank` or above.
    ///
    /// ```
    /// use poker_logic::cards::Rank;
    /// use poker_logic::deck::Deck;
    ///
    /// let deck = Deck::stripped(Rank::Seven);
    /// assert_eq!(deck.len(), 32);
    /// assert_eq!(deck.lowest_rank(), Rank::Seven);
    /// ```
    pub fn stripped(lowest_rank: Rank) -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&s| {
                Rank::ALL.iter().filter(move |&&r| r >= lowest_rank).map(move |&r| Card::new(r, s))
            })
            .collect();
        Self { cards, lowest_rank }
    }

    pub fn lowest_rank(&self) -> Rank {
        self.lowest_rank
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        self.shuffle_with(&mut ChaCha8Rng::seed_from_u64(seed));
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }
}
