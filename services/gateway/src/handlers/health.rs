use crate::models::HealthResponse;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let stats = state.matchmaker.read().await.stats();

    Json(HealthResponse {
        status: "ok".to_string(),
        requests: stats.requests,
        waiting: stats.waiting,
        matches: stats.matches,
        results: stats.results,
    })
}
