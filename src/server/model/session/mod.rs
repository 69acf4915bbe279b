//! Session data models and utilities.
//!
//! This module provides type-safe wrappers for the session data this service reads using
//! tower-sessions. The session is written by the upstream authentication service through
//! the shared Redis-backed store; each submodule defines one piece of that state with
//! methods for inserting and retrieving it.

pub mod role;
pub mod user;
