mod common;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use axum_test::TestServer;
use click_tracker::api::handlers::health_handler;

fn test_server(state: click_tracker::AppState) -> TestServer {
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_healthy_response() {
    let (state, _repository) = common::create_test_state();
    let server = test_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["broadcast"]["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_subscriber_count_is_reported() {
    let (state, _repository) = common::create_test_state();
    let _first = state.broadcaster.subscribe();
    let _second = state.broadcaster.subscribe();
    let server = test_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["checks"]["broadcast"]["message"],
        "Subscribers: 2"
    );
}

#[tokio::test]
async fn test_degraded_store_reports_unavailable() {
    let server = test_server(common::create_failing_state());

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}
