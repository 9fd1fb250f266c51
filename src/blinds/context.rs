//! Collaborators the blind machine reads from and writes to.
//!
//! The table controller owns players, pots and the legal-action computation;
//! the blind machine only sees them through these traits.

use crate::settings::TableSettings;
use serde::{Deserialize, Serialize};
use std::fmt;

pub type PlayerId = u32;

/// Forced-bet actions a player may be offered before normal betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum PokerActionType {
    SmallBlind,
    BigBlind,
    DeadSmallBlind,
    BigBlindPlusDeadSmallBlind,
    DeclineEntryBet,
}

impl PokerActionType {
    pub fn label(self) -> &'static str {
        match self {
            PokerActionType::SmallBlind => "small blind",
            PokerActionType::BigBlind => "big blind",
            PokerActionType::DeadSmallBlind => "dead small blind",
            PokerActionType::BigBlindPlusDeadSmallBlind => "big blind plus dead small blind",
            PokerActionType::DeclineEntryBet => "decline entry bet",
        }
    }
}

impl fmt::Display for PokerActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One offered action with its bet bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PossibleAction {
    pub action_type: PokerActionType,
    pub min_amount: u64,
    pub max_amount: u64,
}

/// The actions currently offered to a player, as computed by turn management.
///
/// ```
/// use poker_logic::blinds::{ActionRequest, PokerActionType};
///
/// let req = ActionRequest::default()
///     .with_option(PokerActionType::BigBlind, 20, 20)
///     .with_option(PokerActionType::DeclineEntryBet, 0, 0);
/// assert!(req.is_option_enabled(PokerActionType::BigBlind));
/// assert!(!req.is_option_enabled(PokerActionType::DeadSmallBlind));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRequest {
    options: Vec<PossibleAction>,
}

impl ActionRequest {
    pub fn new(options: Vec<PossibleAction>) -> Self {
        Self { options }
    }

    pub fn with_option(mut self, action_type: PokerActionType, min: u64, max: u64) -> Self {
        self.options.push(PossibleAction { action_type, min_amount: min, max_amount: max });
        self
    }

    pub fn is_option_enabled(&self, action_type: PokerActionType) -> bool {
        self.option(action_type).is_some()
    }

    pub fn option(&self, action_type: PokerActionType) -> Option<&PossibleAction> {
        self.options.iter().find(|o| o.action_type == action_type)
    }

    pub fn options(&self) -> &[PossibleAction] {
        &self.options
    }
}

impl fmt::Display for ActionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, o) in self.options.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}..{}", o.action_type, o.min_amount, o.max_amount)?;
        }
        f.write_str("]")
    }
}

/// A seated player taking part in the current hand.
pub trait PokerPlayer {
    fn id(&self) -> PlayerId;

    fn balance(&self) -> u64;

    fn action_request(&self) -> &ActionRequest;

    fn set_has_posted_entry_bet(&mut self, posted: bool);

    /// Move up to `amount` from the balance into the player's live bet.
    /// Returns the amount moved, less than `amount` when the player goes all in.
    fn add_bet_or_go_all_in(&mut self, amount: u64) -> u64;

    /// Remove up to `amount` from the balance without adding it to the live bet.
    /// Returns the amount removed.
    fn take_chips_or_go_all_in(&mut self, amount: u64) -> u64;
}

/// The pot currently collecting chips.
pub trait Pot {
    fn bet(&mut self, player: PlayerId, amount: u64);
}

/// Per-table state shared by every operation of one hand.
pub trait PokerContext {
    fn settings(&self) -> &TableSettings;

    fn player_in_current_hand(&self, id: PlayerId) -> Option<&dyn PokerPlayer>;

    fn player_in_current_hand_mut(&mut self, id: PlayerId) -> Option<&mut dyn PokerPlayer>;

    fn active_pot(&mut self) -> &mut dyn Pot;
}
