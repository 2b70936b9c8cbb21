//! Click tracking service: the insert-then-broadcast core.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::domain::destination::{AllowList, Destination};
use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;
use crate::infrastructure::broadcast::{DashboardBroadcaster, DashboardMessage, NewClickMessage};

/// Outcome of a successfully tracked click.
#[derive(Debug, Clone)]
pub struct TrackedClick {
    pub click: Click,
    pub destination: Destination,
    /// Total click count across both destinations, recomputed after the insert.
    pub total: i64,
}

/// Service handling the tracked-click flow.
///
/// Ordering is fixed: validate, then persist, then recount, then broadcast.
/// Validation failures happen before any side effect; broadcast failures
/// never fail the flow once the write committed.
pub struct TrackingService {
    repository: Arc<dyn ClickRepository>,
    broadcaster: DashboardBroadcaster,
    allow_list: AllowList,
}

impl TrackingService {
    /// Creates a new tracking service.
    pub fn new(
        repository: Arc<dyn ClickRepository>,
        broadcaster: DashboardBroadcaster,
        allow_list: AllowList,
    ) -> Self {
        Self {
            repository,
            broadcaster,
            allow_list,
        }
    }

    /// Validates and records one click, then broadcasts the update.
    ///
    /// The destination URL must exactly equal one of the two allow-listed
    /// URLs. The insert and the follow-up total count are awaited before the
    /// `newClick` message is published, so every broadcast refers to a
    /// durable record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `link_url` is missing or not
    /// allow-listed; nothing is persisted or broadcast in that case.
    /// Returns [`AppError::Internal`] when the store fails.
    pub async fn track_click(
        &self,
        link_url: Option<String>,
        user_agent: Option<String>,
        ip: Option<String>,
    ) -> Result<TrackedClick, AppError> {
        let destination = match link_url.as_deref().and_then(|url| self.allow_list.resolve(url)) {
            Some(destination) => destination,
            None => {
                return Err(AppError::bad_request(
                    "Invalid Link URL Provided",
                    json!({ "linkUrl": link_url }),
                ));
            }
        };

        let click = self
            .repository
            .insert_click(NewClick {
                link_url: self.allow_list.url_for(destination).to_string(),
                user_agent,
                ip,
            })
            .await?;

        let total = self.repository.count_all().await?;

        metrics::counter!("clicks_tracked_total", "destination" => destination.key())
            .increment(1);

        let reached = self
            .broadcaster
            .publish(DashboardMessage::NewClick(NewClickMessage {
                link_url: click.link_url.clone(),
                timestamp: click.clicked_at,
                total,
            }));
        debug!(
            destination = destination.key(),
            total, reached, "Tracked click broadcast"
        );

        Ok(TrackedClick {
            click,
            destination,
            total,
        })
    }
}
