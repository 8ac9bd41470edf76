use matchmaker::{Matchmaker, MatchmakerConfig};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared application state
///
/// Mutating handlers hold the write lock for the whole engine call, so
/// submissions, results and resets are applied one at a time. Reads share
/// the read lock.
#[derive(Clone)]
pub struct AppState {
    pub matchmaker: Arc<RwLock<Matchmaker>>,
}

impl AppState {
    pub fn new(config: MatchmakerConfig) -> Self {
        Self {
            matchmaker: Arc::new(RwLock::new(Matchmaker::new(config))),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(MatchmakerConfig::default())
    }
}
