//! DTOs for the aggregate statistics endpoint.

use serde::Serialize;

use crate::domain::repositories::ClickStats;

/// Aggregate click counts, one field per destination plus the overall total.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub amazon: i64,
    pub walmart: i64,
    pub total: i64,
}

impl From<ClickStats> for StatsResponse {
    fn from(stats: ClickStats) -> Self {
        Self {
            amazon: stats.amazon,
            walmart: stats.walmart,
            total: stats.total,
        }
    }
}
