//! Client-side models for dashboard consumers.
//!
//! The browser dashboard mirrors [`dashboard::DashboardState`]; keeping the
//! state transitions here makes the live-update contract testable without a
//! browser.

pub mod dashboard;

pub use dashboard::DashboardState;
