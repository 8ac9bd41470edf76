//! Opponent selection for a newly submitted request
//!
//! Scans the waiting queue in submission order and takes the first
//! eligible candidate. No other heuristic applies.

use types::request::MatchRequest;

use super::eligibility::can_pair;
use crate::history::HistoryTracker;
use crate::ledger::RequestLedger;

/// Find the earliest waiting request that `request` may be paired with
///
/// `request` itself is skipped if it is already in the waiting queue.
pub fn find_opponent<'a>(
    ledger: &'a RequestLedger,
    history: &HistoryTracker,
    request: &MatchRequest,
) -> Option<&'a MatchRequest> {
    ledger
        .list_waiting()
        .filter(|candidate| candidate.id != request.id)
        .find(|candidate| can_pair(history, &request.player, &candidate.player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::{MatchRequestId, PlayerId};

    const TS: i64 = 1708123456789000000;

    fn p(name: &str) -> PlayerId {
        PlayerId::new(name)
    }

    fn ledger_with(entries: &[(&str, &str)]) -> RequestLedger {
        let mut ledger = RequestLedger::new();
        for (id, player) in entries {
            ledger.submit(MatchRequestId::new(*id), p(player), TS);
        }
        ledger
    }

    fn lookup<'a>(ledger: &'a RequestLedger, id: &str) -> &'a MatchRequest {
        ledger.get(&MatchRequestId::new(id)).unwrap()
    }

    #[test]
    fn test_lonely_request_finds_nobody() {
        let ledger = ledger_with(&[("williams1", "williams")]);
        let history = HistoryTracker::new(1);

        let request = lookup(&ledger, "williams1");
        assert!(find_opponent(&ledger, &history, request).is_none());
    }

    #[test]
    fn test_earliest_eligible_wins() {
        let ledger = ledger_with(&[
            ("a1", "alice"),
            ("b1", "bob"),
            ("c1", "carol"),
        ]);
        let history = HistoryTracker::new(1);

        let request = lookup(&ledger, "c1");
        let opponent = find_opponent(&ledger, &history, request).unwrap();
        assert_eq!(opponent.id.as_str(), "a1");
    }

    #[test]
    fn test_skips_own_requests() {
        let ledger = ledger_with(&[
            ("w1", "williams"),
            ("s1", "sharapova"),
            ("w2", "williams"),
        ]);
        let history = HistoryTracker::new(1);

        let request = lookup(&ledger, "w2");
        let opponent = find_opponent(&ledger, &history, request).unwrap();
        assert_eq!(opponent.id.as_str(), "s1");
    }

    #[test]
    fn test_skips_recent_opponent() {
        let ledger = ledger_with(&[
            ("s2", "sharapova"),
            ("n1", "navratilova"),
            ("w2", "williams"),
        ]);
        let mut history = HistoryTracker::new(1);
        history.record_opponents(&p("sharapova"), &p("williams"));

        let request = lookup(&ledger, "w2");
        let opponent = find_opponent(&ledger, &history, request).unwrap();
        assert_eq!(opponent.id.as_str(), "n1");
    }

    #[test]
    fn test_no_eligible_candidate() {
        let ledger = ledger_with(&[("s2", "sharapova"), ("w2", "williams")]);
        let mut history = HistoryTracker::new(1);
        history.record_opponents(&p("sharapova"), &p("williams"));

        let request = lookup(&ledger, "w2");
        assert!(find_opponent(&ledger, &history, request).is_none());
    }
}
