//! poker-logic: hand strength and forced bets
//!
//! Goals:
//! - Deterministic total order over hands of one to seven cards
//! - Stripped decks: straights wrap the ace below whatever rank the deck starts at
//! - Forced bets validated against externally offered options, with an audit trail
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: compare two hands
//! ```
//! use poker_logic::cards::Rank;
//! use poker_logic::evaluator::{Category, HandComparator};
//! use poker_logic::hand::Hand;
//! use poker_logic::variants::Variant;
//! use std::cmp::Ordering;
//!
//! // Telesina deck: seven through ace, so 7-8-9-T-A is a straight
//! let comp = HandComparator::new(Variant::Telesina, Rank::Seven);
//! let low_straight: Hand = "AS 7D 8C 9H TS".parse().unwrap();
//! let trips: Hand = "KS KD KC 8H 9S".parse().unwrap();
//!
//! assert_eq!(comp.evaluate(&low_straight).unwrap().category(), Category::Straight);
//! assert_eq!(comp.compare(&low_straight, &trips).unwrap(), Ordering::Greater);
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin poker-logic -- classify "AS KS QS JS TS"
//! ```

pub mod blinds;
pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod settings;
pub mod variants;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
