//! Event structures for the matchmaking engine
//!
//! Emitted by every successful state transition and logged by the engine.

use serde::{Deserialize, Serialize};
use types::ids::{MatchId, MatchRequestId, PlayerId};

/// Two waiting requests were paired
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCreatedEvent {
    pub match_id: MatchId,
    pub request_1_id: MatchRequestId,
    pub request_2_id: MatchRequestId,
    pub player_1: PlayerId,
    pub player_2: PlayerId,
    pub created_at: i64,
}

/// A result was stored for a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecordedEvent {
    pub match_id: MatchId,
    pub winner: PlayerId,
    pub loser: PlayerId,
    pub recorded_at: i64,
}

/// All state was wiped by an admin reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearedEvent {
    pub requests: usize,
    pub matches: usize,
    pub players_with_history: usize,
}
