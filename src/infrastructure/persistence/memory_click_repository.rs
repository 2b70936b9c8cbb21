//! In-memory implementation of the click repository.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::debug;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// A click store backed by a process-local `Vec`.
///
/// Used by the integration test suite and for local runs without PostgreSQL.
/// Semantics match [`super::PgClickRepository`]: append-only, server-assigned
/// ids and timestamps, counts recomputed per query.
pub struct InMemoryClickRepository {
    clicks: RwLock<Vec<Click>>,
    next_id: AtomicI64,
}

impl Default for InMemoryClickRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryClickRepository {
    /// Creates an empty in-memory store.
    pub fn new() -> Self {
        debug!("Using InMemoryClickRepository (no database configured)");
        Self {
            clicks: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Snapshot of every stored click, insertion-ordered.
    pub fn all(&self) -> Vec<Click> {
        self.clicks.read().expect("click store lock poisoned").clone()
    }
}

#[async_trait]
impl ClickRepository for InMemoryClickRepository {
    async fn insert_click(&self, new_click: NewClick) -> Result<Click, AppError> {
        let click = Click::new(
            self.next_id.fetch_add(1, Ordering::Relaxed),
            new_click.link_url,
            Utc::now(),
            new_click.user_agent,
            new_click.ip,
        );

        self.clicks
            .write()
            .expect("click store lock poisoned")
            .push(click.clone());

        Ok(click)
    }

    async fn count_by_url(&self, link_url: &str) -> Result<i64, AppError> {
        let count = self
            .clicks
            .read()
            .expect("click store lock poisoned")
            .iter()
            .filter(|click| click.link_url == link_url)
            .count();

        Ok(count as i64)
    }

    async fn count_all(&self) -> Result<i64, AppError> {
        Ok(self.clicks.read().expect("click store lock poisoned").len() as i64)
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_click(url: &str) -> NewClick {
        NewClick {
            link_url: url.to_string(),
            user_agent: None,
            ip: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_timestamp() {
        let repo = InMemoryClickRepository::new();

        let first = repo
            .insert_click(new_click("https://www.amazon.com"))
            .await
            .unwrap();
        let second = repo
            .insert_click(new_click("https://www.amazon.com"))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(second.clicked_at >= first.clicked_at);
    }

    #[tokio::test]
    async fn test_counts_are_recomputed_per_query() {
        let repo = InMemoryClickRepository::new();

        repo.insert_click(new_click("https://www.amazon.com"))
            .await
            .unwrap();
        repo.insert_click(new_click("https://www.amazon.com"))
            .await
            .unwrap();
        repo.insert_click(new_click("https://www.walmart.com"))
            .await
            .unwrap();

        assert_eq!(
            repo.count_by_url("https://www.amazon.com").await.unwrap(),
            2
        );
        assert_eq!(
            repo.count_by_url("https://www.walmart.com").await.unwrap(),
            1
        );
        assert_eq!(repo.count_all().await.unwrap(), 3);
        assert_eq!(repo.count_by_url("https://evil.com").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_identical_inserts_create_distinct_records() {
        let repo = InMemoryClickRepository::new();

        repo.insert_click(new_click("https://www.walmart.com"))
            .await
            .unwrap();
        repo.insert_click(new_click("https://www.walmart.com"))
            .await
            .unwrap();

        let stored = repo.all();
        assert_eq!(stored.len(), 2);
        assert_ne!(stored[0].id, stored[1].id);
    }
}
