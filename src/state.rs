use std::sync::Arc;

use crate::application::services::{StatsService, TrackingService};
use crate::domain::destination::AllowList;
use crate::domain::repositories::ClickRepository;
use crate::infrastructure::broadcast::DashboardBroadcaster;

/// Shared application state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub tracking_service: Arc<TrackingService>,
    pub stats_service: Arc<StatsService>,
    pub clicks: Arc<dyn ClickRepository>,
    pub broadcaster: DashboardBroadcaster,
    pub allow_list: AllowList,
}

impl AppState {
    /// Wires services, the broadcast channel, and the allow-list around a
    /// click repository.
    pub fn new(
        clicks: Arc<dyn ClickRepository>,
        broadcaster: DashboardBroadcaster,
        allow_list: AllowList,
    ) -> Self {
        let tracking_service = Arc::new(TrackingService::new(
            clicks.clone(),
            broadcaster.clone(),
            allow_list.clone(),
        ));
        let stats_service = Arc::new(StatsService::new(clicks.clone(), allow_list.clone()));

        Self {
            tracking_service,
            stats_service,
            clicks,
            broadcaster,
            allow_list,
        }
    }
}
