use crate::state::AppState;
use axum::{extract::State, http::StatusCode};

/// Wipe all requests, matches and history
pub async fn clear_all(State(state): State<AppState>) -> StatusCode {
    state.matchmaker.write().await.clear_all();
    StatusCode::OK
}
