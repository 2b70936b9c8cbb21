//! Dashboard client state model.
//!
//! A dashboard viewer joins the broadcast group, initializes from a stats
//! snapshot, and then applies incremental `newClick` updates. The total is
//! always taken from the message rather than re-derived locally, so a missed
//! per-destination increment cannot make the displayed total drift.

use crate::domain::destination::{AllowList, Destination};
use crate::domain::repositories::ClickStats;
use crate::infrastructure::broadcast::DashboardMessage;

/// Local display state of one dashboard viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub amazon: i64,
    pub walmart: i64,
    pub total: i64,
    /// Whether the live feed is currently connected. While offline the
    /// viewer relies on snapshot refreshes.
    pub connected: bool,
}

impl DashboardState {
    /// Replaces all counters from a full snapshot (initial load or resync).
    pub fn apply_snapshot(&mut self, stats: ClickStats) {
        self.amazon = stats.amazon;
        self.walmart = stats.walmart;
        self.total = stats.total;
    }

    /// Applies one broadcast message.
    ///
    /// `newClick` increments the counter matching the event's destination by
    /// one and adopts the message's total; `statsUpdate` replaces everything.
    /// A `newClick` for a URL outside the allow-list only updates the total.
    pub fn apply_message(&mut self, allow_list: &AllowList, message: &DashboardMessage) {
        match message {
            DashboardMessage::NewClick(payload) => {
                match allow_list.resolve(&payload.link_url) {
                    Some(Destination::Amazon) => self.amazon += 1,
                    Some(Destination::Walmart) => self.walmart += 1,
                    None => {}
                }
                self.total = payload.total;
            }
            DashboardMessage::StatsUpdate(snapshot) => {
                self.amazon = snapshot.amazon;
                self.walmart = snapshot.walmart;
                self.total = snapshot.total;
            }
        }
    }

    /// Marks the live feed online/offline.
    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::broadcast::{NewClickMessage, StatsUpdateMessage};
    use chrono::Utc;

    fn new_click(url: &str, total: i64) -> DashboardMessage {
        DashboardMessage::NewClick(NewClickMessage {
            link_url: url.to_string(),
            timestamp: Utc::now(),
            total,
        })
    }

    #[test]
    fn test_new_click_increments_matching_counter() {
        let allow_list = AllowList::default();
        let mut state = DashboardState::default();
        state.apply_snapshot(ClickStats {
            amazon: 2,
            walmart: 1,
            total: 3,
        });

        state.apply_message(&allow_list, &new_click("https://www.amazon.com", 4));

        assert_eq!(state.amazon, 3);
        assert_eq!(state.walmart, 1);
        // Total comes from the message, never re-derived.
        assert_eq!(state.total, 4);
    }

    #[test]
    fn test_new_click_for_other_destination() {
        let allow_list = AllowList::default();
        let mut state = DashboardState::default();

        state.apply_message(&allow_list, &new_click("https://www.walmart.com", 1));

        assert_eq!(state.amazon, 0);
        assert_eq!(state.walmart, 1);
        assert_eq!(state.total, 1);
    }

    #[test]
    fn test_stats_update_replaces_all_counters() {
        let allow_list = AllowList::default();
        let mut state = DashboardState {
            amazon: 9,
            walmart: 9,
            total: 18,
            connected: true,
        };

        state.apply_message(
            &allow_list,
            &DashboardMessage::StatsUpdate(StatsUpdateMessage {
                amazon: 2,
                walmart: 1,
                total: 3,
            }),
        );

        assert_eq!(
            state,
            DashboardState {
                amazon: 2,
                walmart: 1,
                total: 3,
                connected: true
            }
        );
    }

    #[test]
    fn test_connection_flag() {
        let mut state = DashboardState::default();
        assert!(!state.connected);

        state.set_connected(true);
        assert!(state.connected);

        state.set_connected(false);
        assert!(!state.connected);
    }
}
