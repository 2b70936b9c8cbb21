//! Handler for aggregate click statistics.

use axum::{Json, extract::State};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the aggregate click counts.
///
/// # Endpoint
///
/// `GET /api/stats`
///
/// # Response
///
/// ```json
/// { "amazon": 2, "walmart": 1, "total": 3 }
/// ```
///
/// Three independent store queries; `total == amazon + walmart` holds at a
/// quiet store. Reads are not transactional with respect to concurrent
/// writes.
///
/// # Errors
///
/// Returns 500 Internal Server Error on store failures.
pub async fn stats_handler(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.snapshot().await?;
    Ok(Json(stats.into()))
}
