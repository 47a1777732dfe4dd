use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection,
};
use std::{path::PathBuf, sync::Arc};
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{error::TestError, factory::helpers::next_id};

/// Test context containing database connection, session, and test environment setup.
///
/// Both the database and session are created lazily on first access and persist for
/// the lifetime of the test context.
pub struct TestContext {
    /// In-memory SQLite connection, created by `database()`.
    pub db: Option<DatabaseConnection>,

    /// Session backed by the same in-memory database, created by `session()`.
    pub session: Option<Session>,

    /// Temporary database file and pool size for pooled contexts; removed on drop.
    pool: Option<(PathBuf, u32)>,
}

impl TestContext {
    /// Creates a new empty test context with no connection yet.
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
            pool: None,
        }
    }

    /// Creates a context whose database is a temporary file shared by a pool of
    /// `max_connections`, so transactions can genuinely overlap.
    pub fn pooled(max_connections: u32) -> Self {
        let path = std::env::temp_dir().join(format!(
            "questboard-test-{}-{}.sqlite",
            std::process::id(),
            next_id()
        ));

        Self {
            db: None,
            session: None,
            pool: Some((path, max_connections)),
        }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = match &self.pool {
                    Some((path, max_connections)) => {
                        let mut opt =
                            ConnectOptions::new(format!("sqlite://{}?mode=rwc", path.display()));
                        opt.max_connections(*max_connections).sqlx_logging(false);

                        Database::connect(opt).await?
                    }
                    None => Database::connect("sqlite::memory:").await?,
                };

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Typically called by `TestBuilder::build()` rather than directly.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Gets or creates the test session instance.
    ///
    /// On first call this initializes the database if needed, migrates the session
    /// store table and creates a fresh session with a 7 day inactivity expiry.
    ///
    /// # Returns
    /// - `Ok(&Session)` - Reference to the session instance
    /// - `Err(TestError::Database)` - Failed to initialize database or session table
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        match self.session {
            Some(ref session) => Ok(session),
            None => {
                let db = self.database().await?;

                let pool = db.get_sqlite_connection_pool();
                let session_store = SqliteStore::new(pool.clone());

                session_store
                    .migrate()
                    .await
                    .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

                let session = Session::new(
                    None,
                    Arc::new(session_store),
                    Some(Expiry::OnInactivity(Duration::days(7))),
                );

                let session_ref = self.session.insert(session);

                Ok(&*session_ref)
            }
        }
    }

    /// Gets or creates both database and session references.
    ///
    /// Avoids borrow checker issues when calling `database()` and `session()` separately.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.database().await?;
        self.session().await?;

        Ok((self.db.as_ref().unwrap(), self.session.as_ref().unwrap()))
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        if let Some((path, _)) = &self.pool {
            let _ = std::fs::remove_file(path);
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
