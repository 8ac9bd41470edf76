//! Match request lifecycle types
//!
//! A match request is a player's standing request to be paired for a game.
//! It starts out `Waiting` and moves to `Matched` at most once.

use crate::ids::{MatchId, MatchRequestId, PlayerId};
use serde::{Deserialize, Serialize};

/// Request status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "match_id")]
pub enum RequestStatus {
    /// In the waiting queue, not yet paired
    #[serde(rename = "WAITING")]
    Waiting,

    /// Paired into the given match (terminal)
    #[serde(rename = "MATCHED")]
    Matched(MatchId),
}

impl RequestStatus {
    pub fn is_waiting(&self) -> bool {
        matches!(self, RequestStatus::Waiting)
    }

    /// Match id, present iff matched
    pub fn match_id(&self) -> Option<MatchId> {
        match self {
            RequestStatus::Waiting => None,
            RequestStatus::Matched(id) => Some(*id),
        }
    }
}

/// Complete match request record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRequest {
    pub id: MatchRequestId,
    pub player: PlayerId,
    pub status: RequestStatus,
    /// Monotonic submission order, used for FIFO tie-breaking
    pub sequence: u64,
    pub submitted_at: i64, // Unix nanos
}

impl MatchRequest {
    /// Create a new waiting request
    pub fn new(id: MatchRequestId, player: PlayerId, sequence: u64, timestamp: i64) -> Self {
        Self {
            id,
            player,
            status: RequestStatus::Waiting,
            sequence,
            submitted_at: timestamp,
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.status.is_waiting()
    }

    pub fn match_id(&self) -> Option<MatchId> {
        self.status.match_id()
    }

    /// Transition Waiting -> Matched
    ///
    /// Returns false (and changes nothing) if the request is already matched.
    pub fn assign_match(&mut self, match_id: MatchId) -> bool {
        if !self.is_waiting() {
            return false;
        }
        self.status = RequestStatus::Matched(match_id);
        true
    }
}
