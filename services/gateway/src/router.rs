use crate::handlers::{admin, health, match_request, matches, result};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/match_requests/{id}",
            put(match_request::submit_match_request).get(match_request::get_match_request),
        )
        .route("/matches/{id}", get(matches::get_match))
        .route("/results", post(result::record_result))
        .route("/all", delete(admin::clear_all))
        .route("/health", get(health::health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
