//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main testsystem crate to ensure consistency across tests.

/// Type alias for the test database model.
pub type TestModel = entity::test::Model;
