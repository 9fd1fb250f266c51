//! Forced bets at the start of a hand.
//!
//! A [`BlindsRound`] walks the small blind, the big blind and any players who
//! must post an entry bet before they may join the hand. What each player may
//! do is decided elsewhere and arrives as their [`ActionRequest`]; the round
//! only checks that the action was offered and that the current phase accepts
//! it, then moves the chips.

mod context;
mod record;
mod state;

pub use context::{
    ActionRequest, PlayerId, PokerActionType, PokerContext, PokerPlayer, Pot, PossibleAction,
};
pub use record::{BlindsRecord, Outcome};
pub use state::{transition, BlindsPhase, Effect};

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BlindsError {
    #[error("cannot {action} while {phase}")]
    NotInPhase { action: PokerActionType, phase: BlindsPhase },
    #[error("player {player} acted out of turn, waiting for {pending}")]
    OutOfTurn { player: PlayerId, pending: PlayerId },
    #[error("player {player} was not offered {action}, options were {offered}")]
    OptionNotOffered { player: PlayerId, action: PokerActionType, offered: String },
    #[error("player {0} is not in the current hand")]
    UnknownPlayer(PlayerId),
}

/// Who owes what in one round of forced bets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlindsPlan {
    /// `None` when the small blind seat is dead and the round starts at the big blind.
    pub small_blind: Option<PlayerId>,
    pub big_blind: PlayerId,
    /// Players owing an entry bet, asked in this order after the big blind.
    #[serde(default)]
    pub entry_betters: Vec<PlayerId>,
}

impl BlindsPlan {
    pub fn new(small_blind: PlayerId, big_blind: PlayerId) -> Self {
        Self { small_blind: Some(small_blind), big_blind, entry_betters: Vec::new() }
    }

    /// A round with no live small blind; it opens at the big blind.
    pub fn without_small_blind(big_blind: PlayerId) -> Self {
        Self { small_blind: None, big_blind, entry_betters: Vec::new() }
    }

    pub fn with_entry_betters(mut self, players: impl IntoIterator<Item = PlayerId>) -> Self {
        self.entry_betters.extend(players);
        self
    }
}

/// Chips moved by an accepted action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    pub player: PlayerId,
    pub action: PokerActionType,
    pub live: u64,
    pub dead: u64,
    /// Phase after the action.
    pub phase: BlindsPhase,
}

/// State of the forced bets for one hand.
///
/// ```
/// use poker_logic::blinds::{BlindsPhase, BlindsPlan, BlindsRound};
///
/// let round = BlindsRound::new(BlindsPlan::new(1, 2).with_entry_betters([5]));
/// assert_eq!(round.phase(), BlindsPhase::WaitingForSmallBlind);
/// assert_eq!(round.pending_player(), Some(1));
/// assert_eq!(round.pending_entry_better_id(), None);
/// ```
#[derive(Debug, Clone)]
pub struct BlindsRound {
    phase: BlindsPhase,
    small_blind: Option<PlayerId>,
    big_blind: PlayerId,
    entry_betters: VecDeque<PlayerId>,
    entry_bets_posted: usize,
    declined: Vec<PlayerId>,
    history: Vec<BlindsRecord>,
}

impl BlindsRound {
    pub fn new(plan: BlindsPlan) -> Self {
        let phase = if plan.small_blind.is_some() {
            BlindsPhase::WaitingForSmallBlind
        } else {
            BlindsPhase::WaitingForBigBlind
        };
        Self {
            phase,
            small_blind: plan.small_blind,
            big_blind: plan.big_blind,
            entry_betters: plan.entry_betters.into(),
            entry_bets_posted: 0,
            declined: Vec::new(),
            history: Vec::new(),
        }
    }

    pub fn phase(&self) -> BlindsPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == BlindsPhase::Finished
    }

    pub fn is_canceled(&self) -> bool {
        self.phase == BlindsPhase::Canceled
    }

    /// The player the round is waiting on, whatever the phase.
    pub fn pending_player(&self) -> Option<PlayerId> {
        match self.phase {
            BlindsPhase::WaitingForSmallBlind => self.small_blind,
            BlindsPhase::WaitingForBigBlind => Some(self.big_blind),
            BlindsPhase::WaitingForEntryBet => self.entry_betters.front().copied(),
            BlindsPhase::Finished | BlindsPhase::Canceled => None,
        }
    }

    /// The entry-better currently asked to post, if the round is at that stage.
    pub fn pending_entry_better_id(&self) -> Option<PlayerId> {
        match self.phase {
            BlindsPhase::WaitingForEntryBet => self.entry_betters.front().copied(),
            _ => None,
        }
    }

    /// Players who declined or timed out; they sit this hand out.
    pub fn declined_players(&self) -> &[PlayerId] {
        &self.declined
    }

    pub fn entry_bets_posted(&self) -> usize {
        self.entry_bets_posted
    }

    pub fn history(&self) -> &[BlindsRecord] {
        &self.history
    }

    pub fn history_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.history)
    }

    pub fn small_blind(&mut self, ctx: &mut dyn PokerContext, player: PlayerId) -> bool {
        self.try_act(ctx, player, PokerActionType::SmallBlind).is_ok()
    }

    pub fn big_blind(&mut self, ctx: &mut dyn PokerContext, player: PlayerId) -> bool {
        self.try_act(ctx, player, PokerActionType::BigBlind).is_ok()
    }

    pub fn dead_small_blind(&mut self, ctx: &mut dyn PokerContext, player: PlayerId) -> bool {
        self.try_act(ctx, player, PokerActionType::DeadSmallBlind).is_ok()
    }

    pub fn big_blind_plus_dead_small_blind(
        &mut self,
        ctx: &mut dyn PokerContext,
        player: PlayerId,
    ) -> bool {
        self.try_act(ctx, player, PokerActionType::BigBlindPlusDeadSmallBlind).is_ok()
    }

    pub fn decline_entry_bet(&mut self, ctx: &mut dyn PokerContext, player: PlayerId) -> bool {
        self.try_act(ctx, player, PokerActionType::DeclineEntryBet).is_ok()
    }

    /// Validate and apply one player action.
    ///
    /// On error nothing but the audit trail changes: no chips move and the
    /// phase stays put.
    pub fn try_act(
        &mut self,
        ctx: &mut dyn PokerContext,
        player: PlayerId,
        action: PokerActionType,
    ) -> Result<Posting, BlindsError> {
        let phase_before = self.phase;
        match self.validate(ctx, player, action) {
            Ok((next, effect)) => {
                let (live, dead) = self.apply(ctx, player, effect);
                self.advance(next, effect);
                log::debug!(
                    "player {player} posted {action}: live {live}, dead {dead}; {phase_before} -> {}",
                    self.phase
                );
                self.record(player, action, false, phase_before, Outcome::Accepted { live, dead });
                Ok(Posting { player, action, live, dead, phase: self.phase })
            }
            Err(err) => {
                log::info!("{err}");
                self.record(
                    player,
                    action,
                    false,
                    phase_before,
                    Outcome::Rejected { reason: err.to_string() },
                );
                Err(err)
            }
        }
    }

    /// Resolve a stalled wait by declining for the pending player.
    ///
    /// The decline goes through the same gate as [`decline_entry_bet`]: if the
    /// pending player was not offered it, nothing but the audit trail changes.
    /// Always reports success. A timeout with nobody pending does nothing.
    ///
    /// [`decline_entry_bet`]: BlindsRound::decline_entry_bet
    pub fn timeout(&mut self, ctx: &mut dyn PokerContext) -> bool {
        let Some(player) = self.pending_player() else {
            log::debug!("timeout with nobody pending while {}", self.phase);
            return true;
        };
        let phase_before = self.phase;
        let action = PokerActionType::DeclineEntryBet;
        let outcome = match self.validate(ctx, player, action) {
            Ok((next, effect)) => {
                let (live, dead) = self.apply(ctx, player, effect);
                self.advance(next, effect);
                log::info!("player {player} timed out while {phase_before}; now {}", self.phase);
                Outcome::Accepted { live, dead }
            }
            Err(err) => {
                log::info!("player {player} timed out while {phase_before}, left as is: {err}");
                Outcome::Rejected { reason: err.to_string() }
            }
        };
        self.record(player, action, true, phase_before, outcome);
        true
    }

    fn validate(
        &self,
        ctx: &dyn PokerContext,
        player: PlayerId,
        action: PokerActionType,
    ) -> Result<(BlindsPhase, Effect), BlindsError> {
        let step = transition(self.phase, action, self.others_waiting(player))
            .ok_or(BlindsError::NotInPhase { action, phase: self.phase })?;
        match self.pending_player() {
            Some(pending) if pending != player => {
                return Err(BlindsError::OutOfTurn { player, pending });
            }
            _ => {}
        }
        let p = ctx.player_in_current_hand(player).ok_or(BlindsError::UnknownPlayer(player))?;
        let request = p.action_request();
        if !request.is_option_enabled(action) {
            return Err(BlindsError::OptionNotOffered {
                player,
                action,
                offered: request.to_string(),
            });
        }
        Ok(step)
    }

    /// Move chips for an accepted action. Returns (live, dead).
    fn apply(
        &mut self,
        ctx: &mut dyn PokerContext,
        player: PlayerId,
        effect: Effect,
    ) -> (u64, u64) {
        let small = ctx.settings().small_blind_amount;
        let big = ctx.settings().big_blind_amount;

        if effect == Effect::SitOut {
            self.declined.push(player);
            return (0, 0);
        }

        let (live, dead) = match ctx.player_in_current_hand_mut(player) {
            Some(p) => {
                if effect.posts_entry_bet() {
                    p.set_has_posted_entry_bet(true);
                }
                // live leg before the dead leg
                let live = match effect {
                    Effect::PostSmallBlind => p.add_bet_or_go_all_in(small),
                    Effect::PostBigBlind { .. } | Effect::PostBigBlindPlusDeadSmallBlind => {
                        p.add_bet_or_go_all_in(big)
                    }
                    Effect::PostDeadSmallBlind | Effect::SitOut => 0,
                };
                let dead =
                    if effect.has_dead_chips() { p.take_chips_or_go_all_in(small) } else { 0 };
                (live, dead)
            }
            None => (0, 0),
        };
        if effect.has_dead_chips() {
            ctx.active_pot().bet(player, dead);
        }
        (live, dead)
    }

    fn advance(&mut self, next: BlindsPhase, effect: Effect) {
        if self.phase == BlindsPhase::WaitingForEntryBet {
            self.entry_betters.pop_front();
        }
        if effect.posts_entry_bet() {
            self.entry_bets_posted += 1;
        }
        self.phase = next;
    }

    fn others_waiting(&self, player: PlayerId) -> bool {
        self.entry_betters.iter().any(|&p| p != player)
    }

    fn record(
        &mut self,
        player: PlayerId,
        action: PokerActionType,
        timeout: bool,
        phase_before: BlindsPhase,
        outcome: Outcome,
    ) {
        self.history.push(BlindsRecord {
            seq: self.history.len(),
            player,
            action,
            timeout,
            phase_before,
            phase_after: self.phase,
            outcome,
        });
    }
}
