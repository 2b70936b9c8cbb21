//! Dashboard broadcast channel for real-time updates.
//!
//! A thin publish/subscribe wrapper over [`tokio::sync::broadcast`]. Every
//! joined dashboard WebSocket holds a receiver; the tracking service publishes
//! one [`DashboardMessage::NewClick`] per successful tracked click.
//!
//! Delivery is at-most-once / best-effort: a publish with no subscribers is
//! not an error, and a lagged or disconnected subscriber simply misses
//! messages and resyncs through the stats endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::domain::repositories::ClickStats;

/// Payload of a `newClick` message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClickMessage {
    pub link_url: String,
    pub timestamp: DateTime<Utc>,
    pub total: i64,
}

/// Payload of a `statsUpdate` message: a full aggregate snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsUpdateMessage {
    pub amazon: i64,
    pub walmart: i64,
    pub total: i64,
}

impl From<ClickStats> for StatsUpdateMessage {
    fn from(stats: ClickStats) -> Self {
        Self {
            amazon: stats.amazon,
            walmart: stats.walmart,
            total: stats.total,
        }
    }
}

/// Messages delivered to joined dashboard clients.
///
/// Serialized as tagged JSON text frames, e.g.
/// `{"type":"newClick","data":{"linkUrl":"...","timestamp":"...","total":3}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum DashboardMessage {
    /// Emitted once per successful tracked click.
    NewClick(NewClickMessage),
    /// Full stats snapshot, pushed to a client when it joins the group.
    StatsUpdate(StatsUpdateMessage),
}

/// Publish/subscribe handle for the dashboard group.
///
/// Cloning is cheap and all clones publish into the same channel.
#[derive(Clone)]
pub struct DashboardBroadcaster {
    tx: broadcast::Sender<DashboardMessage>,
}

impl DashboardBroadcaster {
    /// Creates a broadcaster whose channel buffers up to `capacity` messages
    /// per subscriber before older ones are dropped.
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribes a new dashboard client.
    ///
    /// The receiver only observes messages published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<DashboardMessage> {
        self.tx.subscribe()
    }

    /// Publishes a message to every current subscriber.
    ///
    /// Returns the number of subscribers the message was delivered to.
    /// Zero subscribers is not a failure; the message is simply dropped.
    pub fn publish(&self, message: DashboardMessage) -> usize {
        match self.tx.send(message) {
            Ok(receivers) => receivers,
            Err(_) => {
                tracing::debug!("Dashboard broadcast dropped: no subscribers");
                0
            }
        }
    }

    /// Number of currently subscribed dashboard clients.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}
