//! Aggregate click statistics service.

use std::sync::Arc;

use crate::domain::destination::{AllowList, Destination};
use crate::domain::repositories::{ClickRepository, ClickStats};
use crate::error::AppError;

/// Service computing aggregate counts over the click log.
///
/// A snapshot is three independent queries (one per destination plus the
/// overall total). The values are internally consistent at a quiet store;
/// concurrent writers only ever shift all three forward together, so no
/// transaction is taken.
pub struct StatsService {
    repository: Arc<dyn ClickRepository>,
    allow_list: AllowList,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<dyn ClickRepository>, allow_list: AllowList) -> Self {
        Self {
            repository,
            allow_list,
        }
    }

    /// Computes the current aggregate snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn snapshot(&self) -> Result<ClickStats, AppError> {
        let amazon = self
            .repository
            .count_by_url(self.allow_list.url_for(Destination::Amazon))
            .await?;
        let walmart = self
            .repository
            .count_by_url(self.allow_list.url_for(Destination::Walmart))
            .await?;
        let total = self.repository.count_all().await?;

        Ok(ClickStats {
            amazon,
            walmart,
            total,
        })
    }
}
