use crate::error::AppError;
use crate::handlers::matches::parse_match_id;
use crate::handlers::{now_nanos, parse_body};
use crate::models::{RecordResultRequest, ResultResponse};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    Json,
};

pub async fn record_result(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ResultResponse>), AppError> {
    let payload: RecordResultRequest = parse_body(&body)?;
    let match_id = parse_match_id(&payload.match_id)?;

    let event = state
        .matchmaker
        .write()
        .await
        .record_result(&match_id, payload.winner, payload.loser, now_nanos())?;

    Ok((
        StatusCode::CREATED,
        Json(ResultResponse {
            match_id: event.match_id,
            winner: event.winner,
            loser: event.loser,
        }),
    ))
}
