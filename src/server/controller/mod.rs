//! HTTP controller endpoints for the test system web API.
//!
//! This module contains Axum handlers for test management. Controllers resolve the caller
//! from the session, delegate to the test access service and return appropriate HTTP
//! responses. They use utoipa for OpenAPI documentation.

pub mod util;
