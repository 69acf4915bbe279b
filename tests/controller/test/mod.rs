//! Tests for test management endpoints.

mod get_tests;
mod update_test;

use super::*;
