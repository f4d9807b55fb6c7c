//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler through
//! Axum's state extraction.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// Handlers borrow the connection to build short-lived repositories and services per request.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool; clones share the pool.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool with migrations applied
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
