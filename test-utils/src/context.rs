use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Isolated environment for a single test.
///
/// Holds an in-memory SQLite connection and, on demand, a tower-sessions `Session`
/// stored in that same database. Nothing is shared between contexts, so every test
/// starts from an empty schema.
pub struct TestContext {
    /// Connection to the in-memory database, created on first use.
    pub db: Option<DatabaseConnection>,

    /// Session backed by the in-memory database, created on first use.
    pub session: Option<Session>,
}

impl TestContext {
    /// Creates an empty context with neither database nor session.
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Returns the database connection, connecting on the first call.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Connection to `sqlite::memory:`
    /// - `Err(TestError::Database)` - The in-memory database could not be opened
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Executes the given CREATE TABLE statements in order.
    ///
    /// Called by `TestBuilder::build()`; statements must already be in foreign key
    /// dependency order.
    ///
    /// # Arguments
    /// - `stmts` - Table definitions generated from entities
    ///
    /// # Returns
    /// - `Ok(())` - Every table was created
    /// - `Err(TestError::Database)` - A statement failed
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Returns the test session, creating the session table on the first call.
    ///
    /// The session lives in the same in-memory database as `db`, so the auth guard
    /// under test reads exactly what the test wrote through `AuthSession`.
    ///
    /// # Returns
    /// - `Ok(&Session)` - Session with a seven day inactivity expiry
    /// - `Err(TestError::Database)` - The database could not be opened
    /// - `Err(TestError::Session)` - The session table could not be created
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
                    .map_err(|e| TestError::Session(e.to_string()))?;

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

    /// Returns both the database and the session.
    ///
    /// Initializes each one first so the two immutable borrows can be handed out
    /// together.
    ///
    /// # Returns
    /// - `Ok((&DatabaseConnection, &Session))` - Both handles
    /// - `Err(TestError)` - Either one failed to initialize
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.database().await?;
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(TestError::Session(
                "test context lost its database or session".to_string(),
            )),
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
