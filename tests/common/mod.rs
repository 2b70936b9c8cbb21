#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::ConnectInfo;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;

use click_tracker::AppError;
use click_tracker::domain::destination::AllowList;
use click_tracker::domain::entities::{Click, NewClick};
use click_tracker::domain::repositories::ClickRepository;
use click_tracker::infrastructure::broadcast::DashboardBroadcaster;
use click_tracker::infrastructure::persistence::InMemoryClickRepository;
use click_tracker::state::AppState;

pub const AMAZON: &str = "https://www.amazon.com";
pub const WALMART: &str = "https://www.walmart.com";

/// Builds an `AppState` over a fresh in-memory click store.
///
/// Returns the store handle alongside the state so tests can inspect
/// persisted records directly.
pub fn create_test_state() -> (AppState, Arc<InMemoryClickRepository>) {
    let repository = Arc::new(InMemoryClickRepository::new());
    let state = AppState::new(
        repository.clone(),
        DashboardBroadcaster::new(64),
        AllowList::default(),
    );
    (state, repository)
}

/// Builds an `AppState` whose store fails every operation.
pub fn create_failing_state() -> AppState {
    AppState::new(
        Arc::new(FailingClickRepository),
        DashboardBroadcaster::new(64),
        AllowList::default(),
    )
}

/// A click store where every operation reports a store failure.
pub struct FailingClickRepository;

#[async_trait]
impl ClickRepository for FailingClickRepository {
    async fn insert_click(&self, _new_click: NewClick) -> Result<Click, AppError> {
        Err(AppError::internal("Internal Server Error", Value::Null))
    }

    async fn count_by_url(&self, _link_url: &str) -> Result<i64, AppError> {
        Err(AppError::internal("Internal Server Error", Value::Null))
    }

    async fn count_all(&self) -> Result<i64, AppError> {
        Err(AppError::internal("Internal Server Error", Value::Null))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// Injects a fixed peer address so handlers using `ConnectInfo` work under
/// the mock transport.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
