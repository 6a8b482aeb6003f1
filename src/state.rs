//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. Holding the database
//! handle here, rather than in a process-wide global, keeps every dependency
//! explicit and injectable in tests.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// `DatabaseConnection` is a connection pool, so clones share the pool and
/// the struct is cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state with the provided database handle.
    ///
    /// Called once during server startup after the database connection has
    /// been established and migrated.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
