//! HTTP gateway for the pong matchmaking service
//!
//! Thin axum layer over the matchmaking engine: routing, JSON schemas and
//! status-code mapping. All matching rules live in the `matchmaker` crate.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod state;

pub use config::GatewayConfig;
pub use router::create_router;
pub use state::AppState;
