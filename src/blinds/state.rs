use super::context::PokerActionType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a round of forced bets stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlindsPhase {
    WaitingForSmallBlind,
    WaitingForBigBlind,
    WaitingForEntryBet,
    /// All forced bets are in; normal betting may start.
    Finished,
    /// The hand cannot start.
    Canceled,
}

impl BlindsPhase {
    pub const fn is_terminal(self) -> bool {
        matches!(self, BlindsPhase::Finished | BlindsPhase::Canceled)
    }
}

impl fmt::Display for BlindsPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BlindsPhase::WaitingForSmallBlind => "waiting for small blind",
            BlindsPhase::WaitingForBigBlind => "waiting for big blind",
            BlindsPhase::WaitingForEntryBet => "waiting for entry bet",
            BlindsPhase::Finished => "finished",
            BlindsPhase::Canceled => "canceled",
        };
        f.write_str(s)
    }
}

/// What an accepted action does to the acting player's chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Small blind as a live bet.
    PostSmallBlind,
    /// Big blind as a live bet; `entry_bet` when posted to enter the hand.
    PostBigBlind { entry_bet: bool },
    /// Small blind taken as dead chips straight into the pot.
    PostDeadSmallBlind,
    /// Big blind live and small blind dead.
    PostBigBlindPlusDeadSmallBlind,
    /// The player sits this hand out.
    SitOut,
}

impl Effect {
    pub const fn posts_entry_bet(self) -> bool {
        matches!(
            self,
            Effect::PostBigBlind { entry_bet: true }
                | Effect::PostDeadSmallBlind
                | Effect::PostBigBlindPlusDeadSmallBlind
        )
    }

    pub const fn has_dead_chips(self) -> bool {
        matches!(self, Effect::PostDeadSmallBlind | Effect::PostBigBlindPlusDeadSmallBlind)
    }
}

/// The forced-bet protocol in one table.
///
/// Given the current phase, the action and whether any entry-better other than
/// the actor is still waiting, returns the next phase and the effect to apply,
/// or `None` when the phase does not accept the action. Whether the player was
/// offered the action is checked separately by the caller.
///
/// ```
/// use poker_logic::blinds::{transition, BlindsPhase, Effect, PokerActionType};
///
/// let step = transition(BlindsPhase::WaitingForBigBlind, PokerActionType::BigBlind, true);
/// assert_eq!(
///     step,
///     Some((BlindsPhase::WaitingForEntryBet, Effect::PostBigBlind { entry_bet: false }))
/// );
/// assert_eq!(transition(BlindsPhase::Finished, PokerActionType::BigBlind, false), None);
/// ```
pub fn transition(
    phase: BlindsPhase,
    action: PokerActionType,
    entry_betters_remaining: bool,
) -> Option<(BlindsPhase, Effect)> {
    use BlindsPhase::*;
    use PokerActionType as A;

    let after_entry = if entry_betters_remaining { WaitingForEntryBet } else { Finished };
    let step = match (phase, action) {
        (WaitingForSmallBlind, A::SmallBlind) => (WaitingForBigBlind, Effect::PostSmallBlind),
        (WaitingForSmallBlind, A::DeclineEntryBet) => (WaitingForBigBlind, Effect::SitOut),

        (WaitingForBigBlind, A::BigBlind) => {
            (after_entry, Effect::PostBigBlind { entry_bet: false })
        }
        (WaitingForBigBlind, A::DeclineEntryBet) => (Canceled, Effect::SitOut),

        (WaitingForEntryBet, A::BigBlind) => {
            (after_entry, Effect::PostBigBlind { entry_bet: true })
        }
        (WaitingForEntryBet, A::DeadSmallBlind) => (after_entry, Effect::PostDeadSmallBlind),
        (WaitingForEntryBet, A::BigBlindPlusDeadSmallBlind) => {
            (after_entry, Effect::PostBigBlindPlusDeadSmallBlind)
        }
        (WaitingForEntryBet, A::DeclineEntryBet) => (after_entry, Effect::SitOut),

        _ => return None,
    };
    Some(step)
}
