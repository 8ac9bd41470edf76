//! Engine configuration

/// Opponents remembered per player for rematch avoidance
pub const DEFAULT_REMATCH_WINDOW: usize = 1;

/// Tunables for the matchmaking engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchmakerConfig {
    /// How many recent opponents a player is kept apart from. 0 disables
    /// rematch avoidance.
    pub rematch_window: usize,
}

impl MatchmakerConfig {
    pub fn with_rematch_window(mut self, window: usize) -> Self {
        self.rematch_window = window;
        self
    }
}

impl Default for MatchmakerConfig {
    fn default() -> Self {
        Self {
            rematch_window: DEFAULT_REMATCH_WINDOW,
        }
    }
}
