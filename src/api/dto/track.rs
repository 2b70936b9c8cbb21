//! DTOs and payload normalization for the track-click endpoint.
//!
//! Two client generations exist: the original landing page posts
//! form-encoded `linkUrl=<url>` and expects a server-side redirect, while
//! script callers post JSON `{"linkUrl": "<url>"}` and self-redirect after a
//! `200`. Both are normalized here into one validated input carrying the
//! reply mode implied by the payload format, so handler logic never branches
//! on the body encoding.

use axum::extract::{Form, FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::AppError;

/// Raw request body for `POST /api/track-click`.
///
/// `linkUrl` is optional at the parse stage so that a missing field surfaces
/// as the endpoint's validation error rather than a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct TrackClickBody {
    #[serde(rename = "linkUrl", default)]
    pub link_url: Option<String>,
}

/// How the caller expects to be answered on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyMode {
    /// Form submission: answer with `303 See Other` to the destination.
    Redirect,
    /// Script caller: answer `200` with an acknowledgment body.
    Ack,
}

/// Normalized track-click input: one payload type for both body encodings.
#[derive(Debug)]
pub struct TrackClickPayload {
    pub link_url: Option<String>,
    pub reply: ReplyMode,
}

impl<S> FromRequest<S> for TrackClickPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default();

        if content_type.starts_with("application/json") {
            let Json(body): Json<TrackClickBody> = Json::from_request(req, state)
                .await
                .map_err(|_| AppError::bad_request("Invalid Link URL Provided", json!({})))?;
            Ok(Self {
                link_url: body.link_url,
                reply: ReplyMode::Ack,
            })
        } else {
            let Form(body): Form<TrackClickBody> = Form::from_request(req, state)
                .await
                .map_err(|_| AppError::bad_request("Invalid Link URL Provided", json!({})))?;
            Ok(Self {
                link_url: body.link_url,
                reply: ReplyMode::Redirect,
            })
        }
    }
}

/// Acknowledgment body returned to script callers.
///
/// Mirrors the `newClick` broadcast payload so the caller can update its own
/// view before self-redirecting.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackClickResponse {
    pub link_url: String,
    pub timestamp: DateTime<Utc>,
    pub total: i64,
}
