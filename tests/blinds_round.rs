use poker_logic::blinds::{
    ActionRequest, BlindsError, BlindsPhase, BlindsPlan, BlindsRecord, BlindsRound, Outcome,
    PlayerId, PokerActionType as A, PokerContext, PokerPlayer, Pot,
};
use poker_logic::settings::TableSettings;

struct Player {
    id: PlayerId,
    balance: u64,
    bet: u64,
    posted_entry: bool,
    request: ActionRequest,
}

impl Player {
    fn new(id: PlayerId, balance: u64, offered: &[A]) -> Self {
        let request = offered.iter().fold(ActionRequest::default(), |r, &a| r.with_option(a, 0, 0));
        Self { id, balance, bet: 0, posted_entry: false, request }
    }
}

impl PokerPlayer for Player {
    fn id(&self) -> PlayerId {
        self.id
    }

    fn balance(&self) -> u64 {
        self.balance
    }

    fn action_request(&self) -> &ActionRequest {
        &self.request
    }

    fn set_has_posted_entry_bet(&mut self, posted: bool) {
        self.posted_entry = posted;
    }

    fn add_bet_or_go_all_in(&mut self, amount: u64) -> u64 {
        let moved = amount.min(self.balance);
        self.balance -= moved;
        self.bet += moved;
        moved
    }

    fn take_chips_or_go_all_in(&mut self, amount: u64) -> u64 {
        let moved = amount.min(self.balance);
        self.balance -= moved;
        moved
    }
}

#[derive(Default)]
struct MainPot {
    dead: Vec<(PlayerId, u64)>,
}

impl Pot for MainPot {
    fn bet(&mut self, player: PlayerId, amount: u64) {
        self.dead.push((player, amount));
    }
}

struct Table {
    settings: TableSettings,
    players: Vec<Player>,
    pot: MainPot,
}

impl Table {
    fn new(players: Vec<Player>) -> Self {
        Self { settings: TableSettings::default(), players, pot: MainPot::default() }
    }

    fn player(&self, id: PlayerId) -> &Player {
        self.players.iter().find(|p| p.id == id).expect("seated")
    }
}

impl PokerContext for Table {
    fn settings(&self) -> &TableSettings {
        &self.settings
    }

    fn player_in_current_hand(&self, id: PlayerId) -> Option<&dyn PokerPlayer> {
        self.players.iter().find(|p| p.id == id).map(|p| p as &dyn PokerPlayer)
    }

    fn player_in_current_hand_mut(&mut self, id: PlayerId) -> Option<&mut dyn PokerPlayer> {
        self.players.iter_mut().find(|p| p.id == id).map(|p| p as &mut dyn PokerPlayer)
    }

    fn active_pot(&mut self) -> &mut dyn Pot {
        &mut self.pot
    }
}

#[test]
fn big_blind_not_offered_leaves_chips_alone() {
    let mut table = Table::new(vec![
        Player::new(2, 500, &[A::BigBlind]),
        Player::new(5, 500, &[A::DeadSmallBlind, A::DeclineEntryBet]),
    ]);
    let plan = BlindsPlan::without_small_blind(2).with_entry_betters([5]);
    let mut round = BlindsRound::new(plan);
    assert!(round.big_blind(&mut table, 2));
    assert_eq!(round.phase(), BlindsPhase::WaitingForEntryBet);

    assert!(!round.big_blind(&mut table, 5));
    let p = table.player(5);
    assert_eq!((p.balance, p.bet, p.posted_entry), (500, 0, false));
    assert!(table.pot.dead.is_empty());
    assert_eq!(round.phase(), BlindsPhase::WaitingForEntryBet);
    assert_eq!(round.pending_entry_better_id(), Some(5));
}

#[test]
fn full_sequence_with_every_kind_of_entry_bet() {
    let mut table = Table::new(vec![
        Player::new(1, 1000, &[A::SmallBlind]),
        Player::new(2, 1000, &[A::BigBlind]),
        Player::new(5, 1000, &[A::BigBlind, A::DeclineEntryBet]),
        Player::new(6, 1000, &[A::DeadSmallBlind]),
        Player::new(7, 1000, &[A::BigBlindPlusDeadSmallBlind]),
        Player::new(8, 1000, &[A::BigBlind, A::DeclineEntryBet]),
    ]);
    let plan = BlindsPlan::new(1, 2).with_entry_betters([5, 6, 7, 8]);
    let mut round = BlindsRound::new(plan);

    assert!(round.small_blind(&mut table, 1));
    assert!(round.big_blind(&mut table, 2));
    assert!(round.big_blind(&mut table, 5));
    assert!(round.dead_small_blind(&mut table, 6));
    let posting = round.try_act(&mut table, 7, A::BigBlindPlusDeadSmallBlind).unwrap();
    assert_eq!((posting.live, posting.dead), (20, 10));
    assert!(round.decline_entry_bet(&mut table, 8));

    assert!(round.is_finished());
    assert_eq!(round.entry_bets_posted(), 3);
    assert_eq!(round.declined_players(), &[8]);

    assert_eq!(table.player(1).bet, 10);
    assert_eq!(table.player(2).bet, 20);
    assert_eq!(table.player(5).bet, 20);
    assert_eq!((table.player(6).bet, table.player(6).balance), (0, 990));
    assert_eq!((table.player(7).bet, table.player(7).balance), (20, 970));
    assert_eq!(table.player(8).balance, 1000);
    assert!(table.player(7).posted_entry);
    assert!(!table.player(8).posted_entry);
    assert_eq!(table.pot.dead, vec![(6, 10), (7, 10)]);
}

#[test]
fn combined_posting_goes_all_in_on_both_legs() {
    let mut table = Table::new(vec![
        Player::new(2, 1000, &[A::BigBlind]),
        Player::new(7, 25, &[A::BigBlindPlusDeadSmallBlind]),
    ]);
    let mut round = BlindsRound::new(BlindsPlan::without_small_blind(2).with_entry_betters([7]));
    assert!(round.big_blind(&mut table, 2));
    let posting = round.try_act(&mut table, 7, A::BigBlindPlusDeadSmallBlind).unwrap();
    assert_eq!((posting.live, posting.dead), (20, 5));
    assert_eq!(table.player(7).balance, 0);
    assert_eq!(table.pot.dead, vec![(7, 5)]);
}

#[test]
fn timeout_declines_for_the_pending_entry_better() {
    let mut table = Table::new(vec![
        Player::new(2, 1000, &[A::BigBlind]),
        Player::new(5, 1000, &[A::BigBlind, A::DeclineEntryBet]),
    ]);
    let mut round = BlindsRound::new(BlindsPlan::without_small_blind(2).with_entry_betters([5]));
    assert!(round.big_blind(&mut table, 2));
    assert!(round.timeout(&mut table));
    assert!(round.is_finished());
    assert_eq!(round.declined_players(), &[5]);
    assert_eq!(table.player(5).balance, 1000);
    let last = round.history().last().unwrap();
    assert!(last.timeout);
    assert_eq!(last.player, 5);
}

#[test]
fn timeout_leaves_a_player_without_the_decline_option_pending() {
    let mut table = Table::new(vec![
        Player::new(2, 1000, &[A::BigBlind]),
        Player::new(5, 1000, &[A::BigBlind]),
    ]);
    let mut round = BlindsRound::new(BlindsPlan::without_small_blind(2).with_entry_betters([5]));
    assert!(round.big_blind(&mut table, 2));
    assert!(round.timeout(&mut table));
    assert!(round.declined_players().is_empty());
    assert_eq!(round.pending_entry_better_id(), Some(5));
    assert!(matches!(round.history().last().unwrap().outcome, Outcome::Rejected { .. }));

    assert!(round.big_blind(&mut table, 5));
    assert!(round.is_finished());
    assert_eq!(table.player(5).bet, 20);
}

#[test]
fn entry_actions_not_offered_move_no_chips() {
    let mut table = Table::new(vec![
        Player::new(2, 1000, &[A::BigBlind]),
        Player::new(5, 1000, &[A::BigBlind]),
    ]);
    let mut round = BlindsRound::new(BlindsPlan::without_small_blind(2).with_entry_betters([5]));
    assert!(round.big_blind(&mut table, 2));

    assert!(!round.dead_small_blind(&mut table, 5));
    assert!(!round.big_blind_plus_dead_small_blind(&mut table, 5));
    assert!(!round.decline_entry_bet(&mut table, 5));

    let p = table.player(5);
    assert_eq!((p.balance, p.bet, p.posted_entry), (1000, 0, false));
    assert!(table.pot.dead.is_empty());
    assert!(round.declined_players().is_empty());
    assert_eq!(round.entry_bets_posted(), 0);
    assert_eq!(round.phase(), BlindsPhase::WaitingForEntryBet);
    assert_eq!(round.pending_entry_better_id(), Some(5));
    let rejected = round.history().iter().filter(|r| !r.is_accepted()).count();
    assert_eq!(rejected, 3);
}

#[test]
fn small_blind_declining_moves_on_to_big_blind() {
    let mut table = Table::new(vec![
        Player::new(1, 1000, &[A::SmallBlind, A::DeclineEntryBet]),
        Player::new(2, 1000, &[A::BigBlind]),
    ]);
    let mut round = BlindsRound::new(BlindsPlan::new(1, 2));
    assert!(round.decline_entry_bet(&mut table, 1));
    assert_eq!(round.phase(), BlindsPhase::WaitingForBigBlind);
    assert_eq!(round.declined_players(), &[1]);
    assert!(round.big_blind(&mut table, 2));
    assert!(round.is_finished());
}

#[test]
fn big_blind_timing_out_cancels_the_hand() {
    let mut table = Table::new(vec![
        Player::new(1, 1000, &[A::SmallBlind]),
        Player::new(2, 1000, &[A::BigBlind, A::DeclineEntryBet]),
    ]);
    let mut round = BlindsRound::new(BlindsPlan::new(1, 2).with_entry_betters([5]));
    assert!(round.small_blind(&mut table, 1));
    assert!(round.timeout(&mut table));
    assert!(round.is_canceled());
    assert_eq!(round.pending_player(), None);
    let err = round.try_act(&mut table, 5, A::BigBlind).unwrap_err();
    assert_eq!(err, BlindsError::NotInPhase { action: A::BigBlind, phase: BlindsPhase::Canceled });
}

#[test]
fn audit_trail_round_trips_through_json() {
    let mut table = Table::new(vec![
        Player::new(1, 1000, &[A::SmallBlind]),
        Player::new(2, 1000, &[A::BigBlind]),
    ]);
    let mut round = BlindsRound::new(BlindsPlan::new(1, 2));
    assert!(!round.big_blind(&mut table, 2));
    assert!(round.small_blind(&mut table, 1));
    assert!(round.big_blind(&mut table, 2));

    let json = round.history_json().unwrap();
    let records: Vec<BlindsRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(records, round.history());
    assert_eq!(records.len(), 3);
    assert!(matches!(records[0].outcome, Outcome::Rejected { .. }));
    assert_eq!(records[2].outcome, Outcome::Accepted { live: 20, dead: 0 });
    assert_eq!(records[2].phase_before, BlindsPhase::WaitingForBigBlind);
    assert_eq!(records[2].phase_after, BlindsPhase::Finished);
    assert_eq!(records.iter().map(|r| r.seq).collect::<Vec<_>>(), vec![0, 1, 2]);
}
