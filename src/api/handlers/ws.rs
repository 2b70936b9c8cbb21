//! WebSocket handler for the live dashboard feed.

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures::{sink::SinkExt, stream::StreamExt};
use serde::Deserialize;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use crate::infrastructure::broadcast::DashboardMessage;
use crate::state::AppState;

/// Messages a dashboard client may send to the server.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
enum ClientMessage {
    /// Join the dashboard group. No traffic is forwarded before this.
    JoinDashboard,
}

/// WebSocket upgrade handler.
///
/// # Endpoint
///
/// `GET /ws`
///
/// # Protocol
///
/// The client joins the dashboard group by sending a text frame
/// `{"type":"joinDashboard"}`. On join the server pushes a `statsUpdate`
/// snapshot, then forwards every broadcast message as a JSON text frame.
/// A client that never joins receives nothing.
///
/// Delivery is best-effort: a client that falls behind the channel capacity
/// misses the dropped messages and is expected to resync via `GET /api/stats`.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

/// Handle individual WebSocket connection.
async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = socket.split();
    let mut rx = state.broadcaster.subscribe();
    let mut joined = false;

    info!(
        subscribers = state.broadcaster.subscriber_count(),
        "WebSocket client connected"
    );

    loop {
        tokio::select! {
            message = rx.recv() => match message {
                Ok(message) if joined => {
                    if forward(&mut sender, &message).await.is_err() {
                        break;
                    }
                }
                // Not joined yet: dashboard traffic is not forwarded.
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "WebSocket client lagged; it must resync via /api/stats");
                }
                Err(RecvError::Closed) => break,
            },
            incoming = receiver.next() => match incoming {
                Some(Ok(Message::Text(text))) => {
                    match serde_json::from_str::<ClientMessage>(text.as_str()) {
                        Ok(ClientMessage::JoinDashboard) => {
                            if !joined {
                                joined = true;
                                info!("WebSocket client joined dashboard group");
                                push_snapshot(&mut sender, &state).await;
                            }
                        }
                        Err(_) => debug!("Ignoring unknown WebSocket message: {}", text.as_str()),
                    }
                }
                Some(Ok(Message::Ping(data))) => {
                    if sender.send(Message::Pong(data)).await.is_err() {
                        break;
                    }
                }
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(_)) => break,
            },
        }
    }

    info!("WebSocket client disconnected");
}

/// Serializes and sends one broadcast message to this client.
async fn forward(
    sender: &mut (impl SinkExt<Message> + Unpin),
    message: &DashboardMessage,
) -> Result<(), ()> {
    let json = match serde_json::to_string(message) {
        Ok(json) => json,
        Err(e) => {
            warn!("Failed to serialize dashboard message: {e}");
            return Ok(());
        }
    };

    sender.send(Message::Text(json.into())).await.map_err(|_| ())
}

/// Pushes a full stats snapshot to a freshly joined client.
///
/// A failed snapshot is logged and skipped; the client still receives live
/// updates and can pull `GET /api/stats` itself.
async fn push_snapshot(sender: &mut (impl SinkExt<Message> + Unpin), state: &AppState) {
    match state.stats_service.snapshot().await {
        Ok(stats) => {
            let _ = forward(sender, &DashboardMessage::StatsUpdate(stats.into())).await;
        }
        Err(e) => warn!("Failed to push stats snapshot on join: {e:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_message_parses() {
        let message: ClientMessage = serde_json::from_str(r#"{"type":"joinDashboard"}"#).unwrap();
        assert!(matches!(message, ClientMessage::JoinDashboard));
    }

    #[test]
    fn test_unknown_message_is_rejected() {
        assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"leaveDashboard"}"#).is_err());
        assert!(serde_json::from_str::<ClientMessage>("not json").is_err());
    }
}
