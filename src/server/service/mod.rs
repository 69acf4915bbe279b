//! Service layer for business logic.
//!
//! This module contains the test access service, which enforces per-author ownership and the
//! create/update contract on top of a [`crate::server::data::store::TestStore`].
