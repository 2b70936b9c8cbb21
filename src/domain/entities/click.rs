//! Click entity representing a single tracked outbound click.

use chrono::{DateTime, Utc};

/// A click event recorded when a visitor follows one of the tracked links.
///
/// Captures metadata about each click for analytics purposes, including
/// client information (user agent) and network details (IP address).
/// Records are append-only: never updated or deleted.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: i64,
    pub link_url: String,
    pub clicked_at: DateTime<Utc>,
    pub user_agent: Option<String>,
    pub ip: Option<String>,
}

impl Click {
    /// Creates a new Click instance.
    ///
    /// All metadata fields are optional to handle cases where client information
    /// is unavailable or privacy settings restrict data collection.
    pub fn new(
        id: i64,
        link_url: String,
        clicked_at: DateTime<Utc>,
        user_agent: Option<String>,
        ip: Option<String>,
    ) -> Self {
        Self {
            id,
            link_url,
            clicked_at,
            user_agent,
            ip,
        }
    }
}

/// Input data for recording a new click event.
///
/// The `link_url` must already be allow-list validated; the id and timestamp
/// are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub link_url: String,
    pub user_agent: Option<String>,
    pub ip: Option<String>,
}
