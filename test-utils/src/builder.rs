use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with
/// in-memory SQLite databases. Use the builder pattern to add entity tables,
/// then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Student, Subject};
///
/// let test = TestBuilder::new()
///     .with_table(Student)
///     .with_table(Subject)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema
    /// builder. Statements are executed in the order they were added during
    /// `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity
    /// using SQLite backend syntax. The table will be created when `build()`
    /// is called. Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for roster and grade operations.
    ///
    /// This convenience method adds the following tables:
    /// - Student
    /// - Subject
    /// - Enrollment
    /// - Grade
    ///
    /// Use this when testing enrollment or grade functionality that spans
    /// several tables. Note that the unique index on grade (student_id,
    /// subject_id) is created by the migration, not by the entity schema;
    /// tests exercising the index apply it with `grade_unique_index_sql()`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_school_tables(self) -> Self {
        self.with_table(Student)
            .with_table(Subject)
            .with_table(Enrollment)
            .with_table(Grade)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all
    /// CREATE TABLE statements that were added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// SQL for the unique grade index normally created by the migration.
///
/// `Schema::create_table_from_entity` cannot derive composite indexes, so
/// tests that exercise the storage-level duplicate protection execute this
/// statement after `build()`.
pub fn grade_unique_index_sql() -> &'static str {
    "CREATE UNIQUE INDEX idx_grade_student_subject ON grade (student_id, subject_id)"
}
