//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, broadcast channel setup, and
//! Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::broadcast::DashboardBroadcaster;
use crate::infrastructure::persistence::PgClickRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (with exponential-backoff connect retry)
/// - Applies migrations
/// - Dashboard broadcast channel
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection fails after retries
/// - Migrations fail
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_with_retry(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let clicks = Arc::new(PgClickRepository::new(Arc::new(pool)));
    let broadcaster = DashboardBroadcaster::new(config.broadcast_capacity);

    let state = AppState::new(clicks, broadcaster, config.allow_list.clone());

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");
    tracing::info!("Landing page: http://{addr}/  Dashboard: http://{addr}/dashboard");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}

/// Connects to PostgreSQL, retrying transient startup failures with
/// exponential backoff (5 attempts, starting at 500ms).
async fn connect_with_retry(config: &Config) -> Result<PgPool> {
    let strategy = ExponentialBackoff::from_millis(500).map(jitter).take(5);

    let pool = Retry::spawn(strategy, || {
        let config = config.clone();
        async move {
            PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(Duration::from_secs(config.db_idle_timeout))
                .max_lifetime(Duration::from_secs(config.db_max_lifetime))
                .connect(&config.database_url)
                .await
        }
    })
    .await?;

    Ok(pool)
}
