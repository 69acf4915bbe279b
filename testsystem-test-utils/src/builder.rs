//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::Schema;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// test record fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    include_test_tables: bool,

    // (author_id, name)
    tests: Vec<(String, String)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            include_test_tables: false,
            tests: Vec::new(),
        }
    }

    /// Add the tables required for test management to the test database.
    pub fn with_test_tables(mut self) -> Self {
        self.include_test_tables = true;
        self
    }

    /// Insert a mock test owned by `author_id` into the database.
    ///
    /// Implies [`TestBuilder::with_test_tables`]. Inserted fixtures can be read back
    /// from the database after `build()`.
    pub fn with_mock_test(mut self, author_id: &str, name: &str) -> Self {
        self.include_test_tables = true;
        self.tests.push((author_id.to_string(), name.to_string()));
        self
    }

    /// Build the test context, creating tables & inserting fixtures in order.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        let mut all_tables = Vec::new();
        if self.include_test_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.push(schema.create_table_from_entity(entity::prelude::Test));
        }

        setup.with_tables(all_tables).await?;

        for (author_id, name) in self.tests {
            setup.fixtures().insert_mock_test(&author_id, &name).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
