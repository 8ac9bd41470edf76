//! Matchmaking Engine
//!
//! Pairs waiting match requests for two-player pong games in FIFO order,
//! keeping recent opponents apart.
//!
//! **Key Invariants:**
//! - A request moves Waiting -> Matched at most once and never back
//! - A match always joins two requests from two distinct players
//! - `request_1_id` of a match is the earlier-submitted request
//! - A match holds at most one result, which never changes
//! - Pairing happens only when a new request arrives

pub mod config;
pub mod engine;
pub mod events;
pub mod history;
pub mod ledger;
pub mod pairing;
pub mod store;

pub use config::MatchmakerConfig;
pub use engine::{Matchmaker, MatchmakerStats, SubmitOutcome};
