//! FIFO queue of waiting match requests
//!
//! Requests enter at the back in submission order, so iterating from the
//! front yields ascending sequence numbers.

use std::collections::VecDeque;
use types::ids::MatchRequestId;

/// Queue of request ids not yet paired
#[derive(Debug, Clone, Default)]
pub struct WaitingQueue {
    entries: VecDeque<WaitingEntry>,
}

#[derive(Debug, Clone)]
struct WaitingEntry {
    sequence: u64,
    request_id: MatchRequestId,
}

impl WaitingQueue {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
        }
    }

    /// Append a request at the back of the queue
    ///
    /// Sequences are handed out monotonically by the ledger, so pushing
    /// to the back keeps the queue sorted.
    pub fn push(&mut self, sequence: u64, request_id: MatchRequestId) {
        debug_assert!(
            self.entries.back().map_or(true, |last| last.sequence < sequence),
            "waiting queue sequences must increase"
        );
        self.entries.push_back(WaitingEntry {
            sequence,
            request_id,
        });
    }

    /// Remove a request by id, returning its sequence if it was queued
    pub fn remove(&mut self, request_id: &MatchRequestId) -> Option<u64> {
        let position = self
            .entries
            .iter()
            .position(|entry| &entry.request_id == request_id)?;
        self.entries.remove(position).map(|entry| entry.sequence)
    }

    /// Iterate over queued request ids, earliest first
    pub fn iter(&self) -> impl Iterator<Item = (u64, &MatchRequestId)> {
        self.entries
            .iter()
            .map(|entry| (entry.sequence, &entry.request_id))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
