//! Server application core modules.
//!
//! This module contains all server-side functionality for the test system service, including
//! configuration, HTTP routing, session-based caller identity, the test access service and
//! its database-backed store.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
