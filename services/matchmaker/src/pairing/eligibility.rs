//! Eligibility check between a new request and a waiting candidate

use types::ids::PlayerId;

use crate::history::HistoryTracker;

/// Check if two players may be paired
///
/// A player never plays themselves, and two players who are each other's
/// recent opponents are kept apart.
pub fn can_pair(history: &HistoryTracker, player: &PlayerId, candidate: &PlayerId) -> bool {
    player != candidate && !history.is_recent_opponent(player, candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(name: &str) -> PlayerId {
        PlayerId::new(name)
    }

    #[test]
    fn test_fresh_players_can_pair() {
        let history = HistoryTracker::new(1);
        assert!(can_pair(&history, &p("williams"), &p("sharapova")));
    }

    #[test]
    fn test_same_player_cannot_pair() {
        let history = HistoryTracker::new(1);
        assert!(!can_pair(&history, &p("williams"), &p("williams")));
    }

    #[test]
    fn test_recent_opponents_cannot_pair() {
        let mut history = HistoryTracker::new(1);
        history.record_opponents(&p("sharapova"), &p("williams"));

        assert!(!can_pair(&history, &p("williams"), &p("sharapova")));
        assert!(!can_pair(&history, &p("sharapova"), &p("williams")));
        assert!(can_pair(&history, &p("williams"), &p("navratilova")));
    }

    #[test]
    fn test_zero_window_allows_rematch() {
        let mut history = HistoryTracker::new(0);
        history.record_opponents(&p("sharapova"), &p("williams"));
        assert!(can_pair(&history, &p("williams"), &p("sharapova")));
    }
}
