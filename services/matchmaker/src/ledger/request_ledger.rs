//! Match request storage
//!
//! Holds every live match request keyed by id and keeps the waiting ones
//! in a FIFO queue for the pairing engine.

use std::collections::HashMap;
use types::ids::{MatchId, MatchRequestId, PlayerId};
use types::request::MatchRequest;

use super::waiting_queue::WaitingQueue;

/// Outcome of a ledger submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerSubmit {
    /// A new waiting request was stored with this sequence number
    Inserted { sequence: u64 },
    /// The id already existed; only the player was updated
    Updated,
}

/// Store of match requests with FIFO access to waiting entries
#[derive(Debug, Clone)]
pub struct RequestLedger {
    requests: HashMap<MatchRequestId, MatchRequest>,
    waiting: WaitingQueue,
    next_sequence: u64,
}

impl RequestLedger {
    pub fn new() -> Self {
        Self {
            requests: HashMap::new(),
            waiting: WaitingQueue::new(),
            next_sequence: 1,
        }
    }

    fn next_sequence(&mut self) -> u64 {
        let seq = self.next_sequence;
        self.next_sequence += 1;
        seq
    }

    /// Insert a new waiting request, or upsert the player of an existing one
    ///
    /// Resubmitting an existing id leaves its status, match id and sequence
    /// untouched.
    pub fn submit(&mut self, id: MatchRequestId, player: PlayerId, timestamp: i64) -> LedgerSubmit {
        if let Some(existing) = self.requests.get_mut(&id) {
            existing.player = player;
            return LedgerSubmit::Updated;
        }

        let sequence = self.next_sequence();
        self.waiting.push(sequence, id.clone());
        self.requests
            .insert(id.clone(), MatchRequest::new(id, player, sequence, timestamp));
        LedgerSubmit::Inserted { sequence }
    }

    pub fn get(&self, id: &MatchRequestId) -> Option<&MatchRequest> {
        self.requests.get(id)
    }

    /// Waiting requests in ascending sequence order
    pub fn list_waiting(&self) -> impl Iterator<Item = &MatchRequest> {
        self.waiting
            .iter()
            .filter_map(move |(_, id)| self.requests.get(id))
    }

    /// Transition a waiting request to matched and drop it from the queue
    ///
    /// Returns false without touching anything if the request is unknown
    /// or already matched.
    pub fn mark_matched(&mut self, id: &MatchRequestId, match_id: MatchId) -> bool {
        let Some(request) = self.requests.get_mut(id) else {
            return false;
        };
        if !request.assign_match(match_id) {
            return false;
        }
        self.waiting.remove(id);
        true
    }

    /// Number of stored requests, waiting or matched
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn waiting_count(&self) -> usize {
        self.waiting.len()
    }

    /// Drop every request and restart sequencing
    pub fn clear(&mut self) {
        self.requests.clear();
        self.waiting.clear();
        self.next_sequence = 1;
    }
}

impl Default for RequestLedger {
    fn default() -> Self {
        Self::new()
    }
}
