//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources needed
//! by request handlers. The state is initialized once during startup and then cloned
//! for each request through Axum's state extraction.

use sea_orm::DatabaseConnection;

use crate::server::model::progression::HealthGrowth;

/// Application state containing shared resources and dependencies.
///
/// Cloning is cheap: `DatabaseConnection` is a pool handle and clones share the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Level-up health policy, read once from configuration.
    pub health_growth: HealthGrowth,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `health_growth` - Health policy applied by level-ups
    pub fn new(db: DatabaseConnection, health_growth: HealthGrowth) -> Self {
        Self { db, health_growth }
    }
}
