use serde::{Deserialize, Serialize};
use types::ids::{MatchId, MatchRequestId, PlayerId};
use types::matches::Match;
use types::request::MatchRequest;

/// Body of `PUT /match_requests/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitMatchRequest {
    pub player: PlayerId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRequestResponse {
    pub id: MatchRequestId,
    pub player: PlayerId,
    pub match_id: Option<MatchId>,
}

impl From<&MatchRequest> for MatchRequestResponse {
    fn from(request: &MatchRequest) -> Self {
        Self {
            id: request.id.clone(),
            player: request.player.clone(),
            match_id: request.match_id(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub id: MatchId,
    pub match_request_1_id: MatchRequestId,
    pub match_request_2_id: MatchRequestId,
}

impl From<&Match> for MatchResponse {
    fn from(game: &Match) -> Self {
        Self {
            id: game.id,
            match_request_1_id: game.request_1_id.clone(),
            match_request_2_id: game.request_2_id.clone(),
        }
    }
}

/// Body of `POST /results`
///
/// `match_id` stays a plain string so that an unparseable id is reported
/// as an unknown match rather than a malformed body.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordResultRequest {
    pub match_id: String,
    pub winner: PlayerId,
    pub loser: PlayerId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultResponse {
    pub match_id: MatchId,
    pub winner: PlayerId,
    pub loser: PlayerId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub requests: usize,
    pub waiting: usize,
    pub matches: usize,
    pub results: usize,
}
