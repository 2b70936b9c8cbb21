//! Handler for the click tracking endpoint.

use axum::{
    Json,
    extract::{ConnectInfo, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect, Response},
};
use std::net::SocketAddr;

use crate::api::dto::track::{ReplyMode, TrackClickPayload, TrackClickResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Tracks one outbound click and answers in the caller's preferred mode.
///
/// # Endpoint
///
/// `POST /api/track-click`
///
/// # Request Flow
///
/// 1. Normalize the body (JSON or form-encoded) into one validated input
/// 2. Resolve the destination against the allow-list (fail-fast on miss)
/// 3. Append the click record (awaited; durable before any publish)
/// 4. Recompute the total and broadcast `newClick` to the dashboard group
/// 5. Respond: `303 See Other` for form callers, `200` + body for JSON callers
///
/// # Client Metadata
///
/// The `User-Agent` header and the peer socket address are captured alongside
/// the click when present.
///
/// # Errors
///
/// Returns 400 Bad Request when the URL is missing or not allow-listed;
/// nothing is written or broadcast in that case.
/// Returns 500 Internal Server Error when the store write or count fails.
pub async fn track_click_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    payload: TrackClickPayload,
) -> Result<Response, AppError> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string());

    let tracked = state
        .tracking_service
        .track_click(payload.link_url, user_agent, Some(addr.ip().to_string()))
        .await?;

    match payload.reply {
        ReplyMode::Redirect => Ok(Redirect::to(&tracked.click.link_url).into_response()),
        ReplyMode::Ack => Ok(Json(TrackClickResponse {
            link_url: tracked.click.link_url,
            timestamp: tracked.click.clicked_at,
            total: tracked.total,
        })
        .into_response()),
    }
}
