//! Match and result storage
//!
//! Results are validated in full before anything is written, so a failed
//! `record_result` leaves the match exactly as it was.

use std::collections::HashMap;
use types::errors::{ConflictError, InvalidError, MatchmakingError, NotFoundError};
use types::ids::{MatchId, MatchRequestId, PlayerId};
use types::matches::{Match, MatchResult};

/// Store of created matches and their results
#[derive(Debug, Clone, Default)]
pub struct MatchStore {
    matches: HashMap<MatchId, Match>,
    completed: usize,
}

impl MatchStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a match between two requests
    ///
    /// `request_1` must be the earlier-submitted request.
    pub fn create_match(
        &mut self,
        request_1: (MatchRequestId, PlayerId),
        request_2: (MatchRequestId, PlayerId),
        timestamp: i64,
    ) -> &Match {
        let (request_1_id, player_1) = request_1;
        let (request_2_id, player_2) = request_2;
        let created = Match::new(request_1_id, player_1, request_2_id, player_2, timestamp);
        let match_id = created.id;
        self.matches.entry(match_id).or_insert(created)
    }

    pub fn get(&self, match_id: &MatchId) -> Option<&Match> {
        self.matches.get(match_id)
    }

    /// Record the result of a match
    ///
    /// Fails with NotFound for an unknown match, Invalid if either player
    /// is not a participant or both are the same player, and Conflict if a
    /// result is already stored.
    pub fn record_result(
        &mut self,
        match_id: &MatchId,
        winner: PlayerId,
        loser: PlayerId,
        timestamp: i64,
    ) -> Result<MatchResult, MatchmakingError> {
        let game = self
            .matches
            .get_mut(match_id)
            .ok_or_else(|| NotFoundError::Match { id: match_id.to_string() })?;

        if winner == loser {
            return Err(InvalidError::SameWinnerAndLoser { player: winner.to_string() }.into());
        }
        for player in [&winner, &loser] {
            if !game.involves(player) {
                return Err(InvalidError::NotAParticipant {
                    player: player.to_string(),
                    match_id: match_id.to_string(),
                }
                .into());
            }
        }
        if game.has_result() {
            return Err(ConflictError::ResultAlreadyRecorded { match_id: match_id.to_string() }.into());
        }

        let result = MatchResult {
            match_id: *match_id,
            winner,
            loser,
            recorded_at: timestamp,
        };
        game.result = Some(result.clone());
        self.completed += 1;
        Ok(result)
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Matches that have a recorded result
    pub fn completed_count(&self) -> usize {
        self.completed
    }

    pub fn clear(&mut self) {
        self.matches.clear();
        self.completed = 0;
    }
}
