//! PostgreSQL implementation of the click repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// Row shape shared by every query that returns full click records.
#[derive(sqlx::FromRow)]
struct ClickRow {
    id: i64,
    link_url: String,
    clicked_at: DateTime<Utc>,
    user_agent: Option<String>,
    ip: Option<String>,
}

impl From<ClickRow> for Click {
    fn from(row: ClickRow) -> Self {
        Click::new(row.id, row.link_url, row.clicked_at, row.user_agent, row.ip)
    }
}

/// PostgreSQL repository for the append-only click log.
///
/// The `clicks` table carries an index on `(link_url, clicked_at DESC)` for
/// per-destination, most-recent-first reads; the timestamp defaults to the
/// insertion time server-side.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn insert_click(&self, new_click: NewClick) -> Result<Click, AppError> {
        let row: ClickRow = sqlx::query_as(
            r#"
            INSERT INTO clicks (link_url, user_agent, ip)
            VALUES ($1, $2, $3)
            RETURNING id, link_url, clicked_at, user_agent, ip
            "#,
        )
        .bind(&new_click.link_url)
        .bind(&new_click.user_agent)
        .bind(&new_click.ip)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn count_by_url(&self, link_url: &str) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM clicks
            WHERE link_url = $1
            "#,
        )
        .bind(link_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn count_all(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM clicks
            "#,
        )
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }
}
