//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Click`] - One tracked click on an allow-listed destination
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with a separate struct for creation:
//! [`NewClick`] carries the caller-supplied fields; the store assigns the id
//! and timestamp. Records are immutable once created, so no update type exists.

pub mod click;

pub use click::{Click, NewClick};
