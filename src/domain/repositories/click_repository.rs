//! Repository trait for the append-only click log.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Aggregate click counts across both destinations.
///
/// Derived by query, never stored; `total` equals `amazon + walmart` at any
/// consistent read since no third destination exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClickStats {
    pub amazon: i64,
    pub walmart: i64,
    pub total: i64,
}

/// Repository interface for the click event log.
///
/// The log is append-only: `insert_click` is the sole mutating operation, and
/// counts are always recomputed by query rather than kept in a shared counter.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryClickRepository`] - in-memory
///   implementation for tests and database-less runs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends one click record and returns the stored row, including the
    /// server-assigned id and timestamp.
    ///
    /// The write is durable when this returns; callers rely on that ordering
    /// before broadcasting.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    async fn insert_click(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Counts stored records whose `link_url` equals `link_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    async fn count_by_url(&self, link_url: &str) -> Result<i64, AppError>;

    /// Counts all stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    async fn count_all(&self) -> Result<i64, AppError>;

    /// Connectivity probe for the health endpoint.
    async fn health_check(&self) -> bool;
}
