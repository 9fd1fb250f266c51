use super::context::{PlayerId, PokerActionType};
use super::state::BlindsPhase;
use serde::{Deserialize, Serialize};

/// What became of an attempted action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// `live` chips went into the player's bet, `dead` chips straight into the pot.
    Accepted { live: u64, dead: u64 },
    Rejected { reason: String },
}

/// One entry of a round's audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlindsRecord {
    pub seq: usize,
    pub player: PlayerId,
    pub action: PokerActionType,
    /// Set when the table resolved the action on the player's behalf.
    #[serde(default)]
    pub timeout: bool,
    pub phase_before: BlindsPhase,
    pub phase_after: BlindsPhase,
    pub outcome: Outcome,
}

impl BlindsRecord {
    pub fn is_accepted(&self) -> bool {
        matches!(self.outcome, Outcome::Accepted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_serialize_with_tagged_outcome() {
        let rec = BlindsRecord {
            seq: 3,
            player: 7,
            action: PokerActionType::DeadSmallBlind,
            timeout: false,
            phase_before: BlindsPhase::WaitingForEntryBet,
            phase_after: BlindsPhase::Finished,
            outcome: Outcome::Accepted { live: 0, dead: 10 },
        };
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains(r#""kind":"accepted""#));
        assert!(json.contains(r#""dead":10"#));
        let back: BlindsRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rec);
        assert!(back.is_accepted());
    }
}
