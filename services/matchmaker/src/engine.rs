//! Matchmaking engine core
//!
//! Single owner of the request ledger, match store and history tracker.
//! Every mutating call takes `&mut self`, so wrapping the engine in one
//! lock serializes all state transitions.

use tracing::{debug, info};
use types::errors::{InvalidError, MatchmakingError, NotFoundError};
use types::ids::{MatchId, MatchRequestId, PlayerId};
use types::matches::Match;
use types::request::MatchRequest;

use crate::config::MatchmakerConfig;
use crate::events::{ClearedEvent, MatchCreatedEvent, ResultRecordedEvent};
use crate::history::HistoryTracker;
use crate::ledger::{LedgerSubmit, RequestLedger};
use crate::pairing;
use crate::store::MatchStore;

/// Main matchmaking engine
#[derive(Debug, Clone)]
pub struct Matchmaker {
    ledger: RequestLedger,
    matches: MatchStore,
    history: HistoryTracker,
}

/// Result of submitting a match request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Request is queued, no eligible opponent yet
    Waiting,
    /// Request was paired on arrival
    Matched(MatchCreatedEvent),
    /// The id already existed; only its player was updated
    Resubmitted,
}

/// Counters over the engine state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchmakerStats {
    pub requests: usize,
    pub waiting: usize,
    pub matches: usize,
    pub results: usize,
}

impl Matchmaker {
    pub fn new(config: MatchmakerConfig) -> Self {
        Self {
            ledger: RequestLedger::new(),
            matches: MatchStore::new(),
            history: HistoryTracker::new(config.rematch_window),
        }
    }

    /// Submit a match request
    ///
    /// This is the main entry point. A new request is queued and paired
    /// with the earliest eligible waiting request before this returns.
    pub fn submit(
        &mut self,
        id: MatchRequestId,
        player: PlayerId,
        timestamp: i64,
    ) -> Result<SubmitOutcome, MatchmakingError> {
        if id.is_empty() {
            return Err(InvalidError::EmptyField { field: "id" }.into());
        }
        if player.is_empty() {
            return Err(InvalidError::EmptyField { field: "player" }.into());
        }

        let sequence = match self.ledger.submit(id.clone(), player.clone(), timestamp) {
            LedgerSubmit::Updated => {
                debug!(request_id = %id, player = %player, "match request resubmitted");
                return Ok(SubmitOutcome::Resubmitted);
            }
            LedgerSubmit::Inserted { sequence } => sequence,
        };

        let opponent = self
            .ledger
            .get(&id)
            .and_then(|request| pairing::find_opponent(&self.ledger, &self.history, request))
            .map(|candidate| (candidate.id.clone(), candidate.player.clone(), candidate.sequence));

        let Some((opponent_id, opponent_player, opponent_sequence)) = opponent else {
            debug!(request_id = %id, player = %player, sequence, "match request waiting");
            return Ok(SubmitOutcome::Waiting);
        };

        let (first, second) = if opponent_sequence < sequence {
            ((opponent_id, opponent_player), (id, player))
        } else {
            ((id, player), (opponent_id, opponent_player))
        };

        let event = self.pair(first, second, timestamp);
        info!(
            match_id = %event.match_id,
            request_1_id = %event.request_1_id,
            request_2_id = %event.request_2_id,
            player_1 = %event.player_1,
            player_2 = %event.player_2,
            "match created"
        );
        Ok(SubmitOutcome::Matched(event))
    }

    /// Create the match and move both requests out of the waiting queue
    fn pair(
        &mut self,
        first: (MatchRequestId, PlayerId),
        second: (MatchRequestId, PlayerId),
        timestamp: i64,
    ) -> MatchCreatedEvent {
        let created = self.matches.create_match(first, second, timestamp);
        let event = MatchCreatedEvent {
            match_id: created.id,
            request_1_id: created.request_1_id.clone(),
            request_2_id: created.request_2_id.clone(),
            player_1: created.player_1.clone(),
            player_2: created.player_2.clone(),
            created_at: created.created_at,
        };

        let first_marked = self.ledger.mark_matched(&event.request_1_id, event.match_id);
        let second_marked = self.ledger.mark_matched(&event.request_2_id, event.match_id);
        debug_assert!(first_marked && second_marked, "paired requests must both be waiting");

        event
    }

    /// Look up a match request
    pub fn match_request(&self, id: &MatchRequestId) -> Result<&MatchRequest, MatchmakingError> {
        self.ledger
            .get(id)
            .ok_or_else(|| NotFoundError::MatchRequest { id: id.to_string() }.into())
    }

    /// Look up a match
    pub fn get_match(&self, id: &MatchId) -> Result<&Match, MatchmakingError> {
        self.matches
            .get(id)
            .ok_or_else(|| NotFoundError::Match { id: id.to_string() }.into())
    }

    /// Record the result of a match and remember the pairing for
    /// rematch avoidance
    pub fn record_result(
        &mut self,
        match_id: &MatchId,
        winner: PlayerId,
        loser: PlayerId,
        timestamp: i64,
    ) -> Result<ResultRecordedEvent, MatchmakingError> {
        if winner.is_empty() {
            return Err(InvalidError::EmptyField { field: "winner" }.into());
        }
        if loser.is_empty() {
            return Err(InvalidError::EmptyField { field: "loser" }.into());
        }

        let result = self.matches.record_result(match_id, winner, loser, timestamp)?;
        self.history.record_opponents(&result.winner, &result.loser);

        info!(
            match_id = %result.match_id,
            winner = %result.winner,
            loser = %result.loser,
            "result recorded"
        );
        Ok(ResultRecordedEvent {
            match_id: result.match_id,
            winner: result.winner,
            loser: result.loser,
            recorded_at: result.recorded_at,
        })
    }

    /// Recent opponents of a player, most recent first
    pub fn recent_opponents(&self, player: &PlayerId) -> Vec<PlayerId> {
        self.history.recent_opponents(player)
    }

    /// Empty every store
    pub fn clear_all(&mut self) -> ClearedEvent {
        let event = ClearedEvent {
            requests: self.ledger.len(),
            matches: self.matches.len(),
            players_with_history: self.history.player_count(),
        };

        self.ledger.clear();
        self.matches.clear();
        self.history.clear();

        info!(
            requests = event.requests,
            matches = event.matches,
            players_with_history = event.players_with_history,
            "all matchmaking state cleared"
        );
        event
    }

    pub fn stats(&self) -> MatchmakerStats {
        MatchmakerStats {
            requests: self.ledger.len(),
            waiting: self.ledger.waiting_count(),
            matches: self.matches.len(),
            results: self.matches.completed_count(),
        }
    }
}

impl Default for Matchmaker {
    fn default() -> Self {
        Self::new(MatchmakerConfig::default())
    }
}
