//! End-to-end pairing scenarios
//!
//! Exercises the engine the way clients drive the service: submit
//! requests, poll them for a match id, report results, reset.

use matchmaker::{Matchmaker, MatchmakerConfig, SubmitOutcome};
use types::errors::MatchmakingError;
use types::ids::{MatchId, MatchRequestId, PlayerId};

const TS: i64 = 1708123456789000000;

struct Client {
    player: PlayerId,
    submitted: usize,
}

impl Client {
    fn new(name: &str) -> Self {
        Self {
            player: PlayerId::new(name),
            submitted: 0,
        }
    }

    fn request_match(&mut self, engine: &mut Matchmaker) -> MatchRequestId {
        self.submitted += 1;
        let id = MatchRequestId::new(format!("{}{}", self.player, self.submitted));
        engine.submit(id.clone(), self.player.clone(), TS).unwrap();
        id
    }

    fn loses_to(&self, engine: &mut Matchmaker, winner: &Client, match_id: MatchId) {
        engine
            .record_result(&match_id, winner.player.clone(), self.player.clone(), TS)
            .unwrap();
    }
}

fn fulfilled(engine: &Matchmaker, id: &MatchRequestId) -> Option<MatchId> {
    engine.match_request(id).unwrap().match_id()
}

#[test]
fn test_lonely_player_cannot_be_matched() {
    let mut engine = Matchmaker::default();
    let mut williams = Client::new("williams");

    let request = williams.request_match(&mut engine);
    assert!(fulfilled(&engine, &request).is_none(), "a single player shouldn't be matched");
}

#[test]
fn test_two_players_can_be_matched() {
    let mut engine = Matchmaker::default();
    let mut williams = Client::new("williams");
    let mut sharapova = Client::new("sharapova");

    let request_1 = williams.request_match(&mut engine);
    let request_2 = sharapova.request_match(&mut engine);

    let match_id = fulfilled(&engine, &request_1).expect("williams was not matched");
    assert_eq!(fulfilled(&engine, &request_2), Some(match_id));

    let game = engine.get_match(&match_id).unwrap();
    assert_eq!(game.request_1_id, request_1);
    assert_eq!(game.request_2_id, request_2);
}

#[test]
fn test_entering_result_ensures_match_with_new_player() {
    let mut engine = Matchmaker::default();
    let mut williams = Client::new("williams");
    let mut sharapova = Client::new("sharapova");
    let mut navratilova = Client::new("navratilova");

    let williams_request = williams.request_match(&mut engine);
    sharapova.request_match(&mut engine);

    let match_id = fulfilled(&engine, &williams_request).unwrap();
    williams.loses_to(&mut engine, &sharapova, match_id);

    let williams_new = williams.request_match(&mut engine);
    let sharapova_new = sharapova.request_match(&mut engine);
    let navratilova_request = navratilova.request_match(&mut engine);

    let williams_match = fulfilled(&engine, &williams_new).expect("williams was not matched");
    assert!(
        fulfilled(&engine, &sharapova_new).is_none(),
        "sharapova just played williams, navratilova should have been picked"
    );
    assert_eq!(fulfilled(&engine, &navratilova_request), Some(williams_match));

    let game = engine.get_match(&williams_match).unwrap();
    assert_eq!(game.request_1_id, williams_new);
    assert_eq!(game.request_2_id, navratilova_request);
}

#[test]
fn test_waiting_request_paired_by_later_arrival() {
    let mut engine = Matchmaker::default();
    let mut williams = Client::new("williams");
    let mut sharapova = Client::new("sharapova");
    let mut navratilova = Client::new("navratilova");

    let first = williams.request_match(&mut engine);
    sharapova.request_match(&mut engine);
    let match_id = fulfilled(&engine, &first).unwrap();
    williams.loses_to(&mut engine, &sharapova, match_id);

    let williams_new = williams.request_match(&mut engine);
    let sharapova_new = sharapova.request_match(&mut engine);
    navratilova.request_match(&mut engine);

    // sharapova2 is still waiting and pairs with the next newcomer
    let mut evert = Client::new("evert");
    let evert_request = evert.request_match(&mut engine);

    assert!(fulfilled(&engine, &williams_new).is_some());
    let late_match = fulfilled(&engine, &evert_request).expect("evert was not matched");
    assert_eq!(fulfilled(&engine, &sharapova_new), Some(late_match));

    let game = engine.get_match(&late_match).unwrap();
    assert_eq!(game.request_1_id, sharapova_new);
    assert_eq!(game.request_2_id, evert_request);
}

#[test]
fn test_wider_window_keeps_older_opponents_apart() {
    let mut engine = Matchmaker::new(MatchmakerConfig::default().with_rematch_window(2));
    let mut a = Client::new("a");
    let mut b = Client::new("b");
    let mut c = Client::new("c");

    let r = a.request_match(&mut engine);
    b.request_match(&mut engine);
    let first_match = fulfilled(&engine, &r).unwrap();
    b.loses_to(&mut engine, &a, first_match);

    let r = a.request_match(&mut engine);
    c.request_match(&mut engine);
    let second_match = fulfilled(&engine, &r).unwrap();
    c.loses_to(&mut engine, &a, second_match);

    // a has played b and c within the window of two
    let a_again = a.request_match(&mut engine);
    let b_again = b.request_match(&mut engine);
    assert!(fulfilled(&engine, &a_again).is_none());
    assert!(fulfilled(&engine, &b_again).is_none());
}

#[test]
fn test_reset_forgets_everything() {
    let mut engine = Matchmaker::default();
    let mut williams = Client::new("williams");
    let mut sharapova = Client::new("sharapova");

    let request = williams.request_match(&mut engine);
    sharapova.request_match(&mut engine);
    let match_id = fulfilled(&engine, &request).unwrap();

    engine.clear_all();

    assert!(matches!(
        engine.match_request(&request),
        Err(MatchmakingError::NotFound(_))
    ));
    assert!(matches!(engine.get_match(&match_id), Err(MatchmakingError::NotFound(_))));
}

#[test]
fn test_submit_outcome_reports_pairing() {
    let mut engine = Matchmaker::default();
    let first = engine
        .submit(MatchRequestId::new("w1"), PlayerId::new("williams"), TS)
        .unwrap();
    let second = engine
        .submit(MatchRequestId::new("s1"), PlayerId::new("sharapova"), TS + 1)
        .unwrap();

    assert_eq!(first, SubmitOutcome::Waiting);
    match second {
        SubmitOutcome::Matched(event) => {
            assert_eq!(event.player_1, PlayerId::new("williams"));
            assert_eq!(event.player_2, PlayerId::new("sharapova"));
            assert_eq!(event.created_at, TS + 1);
        }
        other => panic!("Expected Matched outcome, got {:?}", other),
    }
}
