use crate::error::AppError;
use crate::handlers::{now_nanos, parse_body};
use crate::models::{MatchRequestResponse, SubmitMatchRequest};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use types::errors::{InvalidError, MatchmakingError, NotFoundError};
use types::ids::MatchRequestId;

pub async fn submit_match_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<MatchRequestResponse>, AppError> {
    let payload: SubmitMatchRequest = parse_body(&body)?;
    let id = MatchRequestId::try_new(id)
        .ok_or(MatchmakingError::Invalid(InvalidError::EmptyField { field: "id" }))?;

    // Hold the write lock across submit and read-back so the response
    // reflects the pairing this call produced.
    let mut matchmaker = state.matchmaker.write().await;
    matchmaker.submit(id.clone(), payload.player, now_nanos())?;
    let request = matchmaker.match_request(&id)?;

    Ok(Json(MatchRequestResponse::from(request)))
}

pub async fn get_match_request(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MatchRequestResponse>, AppError> {
    let request_id = MatchRequestId::try_new(id.as_str())
        .ok_or_else(|| MatchmakingError::from(NotFoundError::MatchRequest { id: id.clone() }))?;

    let matchmaker = state.matchmaker.read().await;
    let request = matchmaker.match_request(&request_id)?;

    Ok(Json(MatchRequestResponse::from(request)))
}
