//! Types library for the pong matchmaking service
//!
//! Core type definitions shared by the matchmaking engine and the HTTP
//! gateway.
//!
//! # Modules
//! - `ids`: Identifiers (MatchId, MatchRequestId, PlayerId)
//! - `request`: Match request lifecycle types
//! - `matches`: Match and result types
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod request;
pub mod matches;
pub mod errors;
