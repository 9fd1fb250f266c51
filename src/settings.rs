use crate::cards::Rank;
use crate::evaluator::HandComparator;
use crate::variants::Variant;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("cannot read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Table configuration read by the evaluator and the blind machine.
///
/// Missing fields fall back to [`TableSettings::default`].
///
/// ```
/// use poker_logic::cards::Rank;
/// use poker_logic::settings::TableSettings;
/// use poker_logic::variants::Variant;
///
/// let s = TableSettings::from_json_str(
///     r#"{ "big_blind_amount": 40, "small_blind_amount": 20, "variant": "telesina", "deck_lowest_rank": "Seven" }"#,
/// ).unwrap();
/// assert_eq!(s.variant, Variant::Telesina);
/// assert_eq!(s.deck_lowest_rank, Rank::Seven);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
    pub small_blind_amount: u64,
    pub big_blind_amount: u64,
    pub deck_lowest_rank: Rank,
    pub variant: Variant,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            small_blind_amount: 10,
            big_blind_amount: 20,
            deck_lowest_rank: Rank::Two,
            variant: Variant::Standard,
        }
    }
}

impl TableSettings {
    pub fn from_json_str(s: &str) -> Result<Self, SettingsError> {
        let settings: TableSettings = serde_json::from_str(s)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.small_blind_amount == 0 {
            return Err(SettingsError::Invalid("small blind must be positive".into()));
        }
        if self.small_blind_amount > self.big_blind_amount {
            return Err(SettingsError::Invalid(format!(
                "small blind {} exceeds big blind {}",
                self.small_blind_amount, self.big_blind_amount
            )));
        }
        // five ranks are needed for a straight: Ten to Ace at the least
        if self.deck_lowest_rank > Rank::Ten {
            return Err(SettingsError::Invalid(format!(
                "deck floor {} leaves fewer than five ranks",
                self.deck_lowest_rank
            )));
        }
        Ok(())
    }

    pub fn comparator(&self) -> HandComparator {
        HandComparator::new(self.variant, self.deck_lowest_rank)
    }
}
