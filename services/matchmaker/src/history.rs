//! Recent-opponent tracking for rematch avoidance
//!
//! Each player keeps a most-recent-first list of opponents bounded by the
//! rematch window. A window of 1 holds exactly the last opponent; a window
//! of 0 disables rematch avoidance.

use std::collections::{HashMap, VecDeque};
use types::ids::PlayerId;

/// Per-player history of recent opponents
#[derive(Debug, Clone)]
pub struct HistoryTracker {
    window: usize,
    recent: HashMap<PlayerId, VecDeque<PlayerId>>,
}

impl HistoryTracker {
    pub fn new(window: usize) -> Self {
        Self {
            window,
            recent: HashMap::new(),
        }
    }

    /// Record that two players just played each other
    pub fn record_opponents(&mut self, player_a: &PlayerId, player_b: &PlayerId) {
        if self.window == 0 {
            return;
        }
        self.push(player_a, player_b);
        self.push(player_b, player_a);
    }

    fn push(&mut self, player: &PlayerId, opponent: &PlayerId) {
        let window = self.window;
        let opponents = self.recent.entry(player.clone()).or_default();
        // A repeat opponent moves to the front instead of taking two slots
        opponents.retain(|p| p != opponent);
        opponents.push_front(opponent.clone());
        opponents.truncate(window);
    }

    /// True if either player appears in the other's recent opponents
    pub fn is_recent_opponent(&self, player_a: &PlayerId, player_b: &PlayerId) -> bool {
        self.has_played(player_a, player_b) || self.has_played(player_b, player_a)
    }

    fn has_played(&self, player: &PlayerId, opponent: &PlayerId) -> bool {
        self.recent
            .get(player)
            .is_some_and(|opponents| opponents.contains(opponent))
    }

    /// Recent opponents of a player, most recent first
    pub fn recent_opponents(&self, player: &PlayerId) -> Vec<PlayerId> {
        self.recent
            .get(player)
            .map(|opponents| opponents.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of players with at least one recorded opponent
    pub fn player_count(&self) -> usize {
        self.recent.len()
    }

    pub fn clear(&mut self) {
        self.recent.clear();
    }
}

impl Default for HistoryTracker {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_REMATCH_WINDOW)
    }
}
