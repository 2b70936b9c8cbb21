//! End-to-end behavior of a dashboard viewer against the broadcast channel:
//! join, live increments, missed messages while disconnected, and resync.

mod common;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;
use axum_test::TestServer;
use click_tracker::api::handlers::track_click_handler;
use click_tracker::client::DashboardState;
use click_tracker::domain::destination::AllowList;
use common::{AMAZON, WALMART};

fn test_server(state: click_tracker::AppState) -> TestServer {
    let app = Router::new()
        .route("/api/track-click", post(track_click_handler))
        .layer(common::MockConnectInfoLayer)
        .with_state(state);

    TestServer::new(app).unwrap()
}

async fn track(server: &TestServer, url: &str) {
    server
        .post("/api/track-click")
        .form(&[("linkUrl", url)])
        .await
        .assert_status(StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_joined_viewer_follows_live_updates() {
    let (state, _repository) = common::create_test_state();
    let allow_list = AllowList::default();
    let mut rx = state.broadcaster.subscribe();
    let stats_service = state.stats_service.clone();
    let server = test_server(state);

    let mut viewer = DashboardState::default();
    viewer.set_connected(true);
    viewer.apply_snapshot(stats_service.snapshot().await.unwrap());

    track(&server, AMAZON).await;
    viewer.apply_message(&allow_list, &rx.recv().await.unwrap());
    assert_eq!((viewer.amazon, viewer.walmart, viewer.total), (1, 0, 1));

    track(&server, WALMART).await;
    viewer.apply_message(&allow_list, &rx.recv().await.unwrap());
    assert_eq!((viewer.amazon, viewer.walmart, viewer.total), (1, 1, 2));

    // The viewer's totals match a fresh server snapshot.
    let snapshot = stats_service.snapshot().await.unwrap();
    assert_eq!(viewer.amazon, snapshot.amazon);
    assert_eq!(viewer.walmart, snapshot.walmart);
    assert_eq!(viewer.total, snapshot.total);
}

#[tokio::test]
async fn test_disconnected_viewer_resyncs_from_snapshot() {
    let (state, _repository) = common::create_test_state();
    let stats_service = state.stats_service.clone();
    let broadcaster = state.broadcaster.clone();
    let server = test_server(state);

    let mut viewer = DashboardState::default();
    {
        // Connected for the first click only.
        let allow_list = AllowList::default();
        let mut rx = broadcaster.subscribe();
        viewer.set_connected(true);

        track(&server, AMAZON).await;
        viewer.apply_message(&allow_list, &rx.recv().await.unwrap());
        viewer.set_connected(false);
    }

    // Clicks tracked while the viewer is offline are missed entirely.
    track(&server, WALMART).await;
    track(&server, WALMART).await;
    assert_eq!((viewer.amazon, viewer.walmart, viewer.total), (1, 0, 1));

    // Reconnect and manually refresh: display equals the server aggregate.
    viewer.set_connected(true);
    viewer.apply_snapshot(stats_service.snapshot().await.unwrap());
    assert_eq!((viewer.amazon, viewer.walmart, viewer.total), (1, 2, 3));
}

#[tokio::test]
async fn test_late_subscriber_only_sees_new_clicks() {
    let (state, _repository) = common::create_test_state();
    let broadcaster = state.broadcaster.clone();
    let server = test_server(state);

    track(&server, AMAZON).await;

    // Subscribed after the first click: nothing buffered, only what follows.
    let mut rx = broadcaster.subscribe();
    assert!(rx.try_recv().is_err());

    track(&server, WALMART).await;
    let message = rx.recv().await.unwrap();
    match message {
        click_tracker::infrastructure::broadcast::DashboardMessage::NewClick(payload) => {
            assert_eq!(payload.link_url, WALMART);
            assert_eq!(payload.total, 2);
        }
        other => panic!("unexpected message: {other:?}"),
    }
}
