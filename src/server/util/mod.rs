//! Utility functions and helpers for server operations.
//!
//! Currently holds the helpers shared by unit tests: an in-memory session and an
//! in-memory [`crate::server::data::store::TestStore`].
