use thiserror::Error;

/// Errors that can occur while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the in-memory database or to create tables.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),

    /// Failed to migrate the session store table.
    #[error("Failed to initialize session store: {0}")]
    Session(String),
}
