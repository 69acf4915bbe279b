//! Test fixture modules for database record creation.
//!
//! This module contains fixture utilities for creating test data during test execution.
//!
//! - `test` - Test (quiz) records owned by an author
