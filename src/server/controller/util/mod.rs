//! Utility functions for controller request handling.
//!
//! This module provides reusable helper functions used across controllers, currently the
//! resolution of the calling author from the session for protected endpoints.

pub mod get_author;
