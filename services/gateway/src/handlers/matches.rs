use crate::error::AppError;
use crate::models::MatchResponse;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use types::errors::{MatchmakingError, NotFoundError};
use types::ids::MatchId;

/// Parse a match id from client input
///
/// Anything that is not a UUID cannot name a match, so it is reported as
/// not found.
pub(crate) fn parse_match_id(raw: &str) -> Result<MatchId, MatchmakingError> {
    raw.parse::<MatchId>()
        .map_err(|_| NotFoundError::Match { id: raw.to_string() }.into())
}

pub async fn get_match(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MatchResponse>, AppError> {
    let match_id = parse_match_id(&id)?;

    let matchmaker = state.matchmaker.read().await;
    let game = matchmaker.get_match(&match_id)?;

    Ok(Json(MatchResponse::from(game)))
}
