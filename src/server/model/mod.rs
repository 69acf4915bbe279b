//! Server application models and type definitions.
//!
//! This module contains data models for the server application, including application state,
//! database model type aliases, the mapping between stored tests and their API representation,
//! and session data structures written by the upstream authentication service.

pub mod app;
pub mod db;
pub mod session;
