//! Error types for the matchmaking engine
//!
//! Three failure classes: an id is unknown, the input is invalid, or the
//! operation conflicts with already-recorded state.

use thiserror::Error;

/// Top-level matchmaking error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchmakingError {
    #[error("Not found: {0}")]
    NotFound(#[from] NotFoundError),

    #[error("Invalid input: {0}")]
    Invalid(#[from] InvalidError),

    #[error("Conflict: {0}")]
    Conflict(#[from] ConflictError),
}

impl MatchmakingError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            MatchmakingError::NotFound(_) => "NOT_FOUND",
            MatchmakingError::Invalid(_) => "INVALID",
            MatchmakingError::Conflict(_) => "CONFLICT",
        }
    }
}

/// Unknown identifiers
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NotFoundError {
    #[error("Match request not found: {id}")]
    MatchRequest { id: String },

    #[error("Match not found: {id}")]
    Match { id: String },
}

/// Rejected input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidError {
    #[error("Field must not be empty: {field}")]
    EmptyField { field: &'static str },

    #[error("Player {player} did not take part in match {match_id}")]
    NotAParticipant { player: String, match_id: String },

    #[error("Winner and loser are the same player: {player}")]
    SameWinnerAndLoser { player: String },
}

/// Operations that clash with recorded state
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConflictError {
    #[error("Result already recorded for match {match_id}")]
    ResultAlreadyRecorded { match_id: String },
}
