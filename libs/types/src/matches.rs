//! Match and result types

use crate::ids::{MatchId, MatchRequestId, PlayerId};
use serde::{Deserialize, Serialize};

/// Outcome of a played match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_id: MatchId,
    pub winner: PlayerId,
    pub loser: PlayerId,
    pub recorded_at: i64, // Unix nanos
}

/// A pairing of two match requests from two distinct players
///
/// `request_1_id` is always the earlier-submitted request. The owning
/// players are captured at pairing time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub request_1_id: MatchRequestId,
    pub request_2_id: MatchRequestId,
    pub player_1: PlayerId,
    pub player_2: PlayerId,
    pub result: Option<MatchResult>,
    pub created_at: i64, // Unix nanos
}

impl Match {
    /// Create a new match without a result
    pub fn new(
        request_1_id: MatchRequestId,
        player_1: PlayerId,
        request_2_id: MatchRequestId,
        player_2: PlayerId,
        timestamp: i64,
    ) -> Self {
        Self {
            id: MatchId::new(),
            request_1_id,
            request_2_id,
            player_1,
            player_2,
            result: None,
            created_at: timestamp,
        }
    }

    /// Check if the player is one of the two participants
    pub fn involves(&self, player: &PlayerId) -> bool {
        &self.player_1 == player || &self.player_2 == player
    }

    pub fn has_result(&self) -> bool {
        self.result.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_match() -> Match {
        Match::new(
            MatchRequestId::new("williams1"),
            PlayerId::new("williams"),
            MatchRequestId::new("sharapova1"),
            PlayerId::new("sharapova"),
            1708123456789000000,
        )
    }

    #[test]
    fn test_match_creation() {
        let m = sample_match();
        assert_eq!(m.request_1_id.as_str(), "williams1");
        assert_eq!(m.request_2_id.as_str(), "sharapova1");
        assert!(!m.has_result());
    }

    #[test]
    fn test_involves() {
        let m = sample_match();
        assert!(m.involves(&PlayerId::new("williams")));
        assert!(m.involves(&PlayerId::new("sharapova")));
        assert!(!m.involves(&PlayerId::new("navratilova")));
    }
}
