//! Data access layer.
//!
//! This module contains the database repository for tests and the [`store::TestStore`]
//! capability contract the test access service depends on, together with its
//! database-backed implementation.

pub mod store;
