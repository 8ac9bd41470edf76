pub mod admin;
pub mod health;
pub mod match_request;
pub mod matches;
pub mod result;

use crate::error::AppError;
use axum::body::Bytes;
use serde::de::DeserializeOwned;

/// Wall-clock time in Unix nanos for engine timestamps
pub(crate) fn now_nanos() -> i64 {
    nanos_or_epoch(chrono::Utc::now())
}

fn nanos_or_epoch(now: chrono::DateTime<chrono::Utc>) -> i64 {
    match now.timestamp_nanos_opt() {
        Some(nanos) => nanos,
        None => {
            tracing::warn!(%now, "clock outside the i64 nanosecond range, using epoch");
            0
        }
    }
}

/// Decode a JSON request body
///
/// Clients are not required to label the body `application/json`; form
/// and missing content types are read the same way.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    Ok(serde_json::from_slice(body)?)
}
