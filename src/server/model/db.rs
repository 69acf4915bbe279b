//! Database model type aliases.
//!
//! This module provides type aliases for SeaORM database entity models used throughout the
//! application, without importing from the generated `entity` crate directly.

/// Type alias for the test database model.
///
/// # Fields (from `entity::test::Model`)
/// - `id` - Primary key, store-assigned UUID string
/// - `author_id` - ID of the user who created the test
/// - `name` - Display name
/// - `duration_minutes` - Time limit in minutes
/// - `questions_number` - Number of questions drawn per session
/// - `questions` - Ordered question references (JSON array)
/// - `test_sessions` - Ordered test session references (JSON array)
pub type TestModel = entity::test::Model;
