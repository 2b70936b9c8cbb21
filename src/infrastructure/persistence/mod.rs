//! Repository implementations for the click event log.
//!
//! # Repositories
//!
//! - [`PgClickRepository`] - PostgreSQL-backed production store
//! - [`InMemoryClickRepository`] - in-memory store for tests and
//!   database-less local runs

pub mod memory_click_repository;
pub mod pg_click_repository;

pub use memory_click_repository::InMemoryClickRepository;
pub use pg_click_repository::PgClickRepository;
