//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Verification code store for email confirmation and password recovery

use sea_orm::DatabaseConnection;

use super::service::verification_code::VerificationCodeService;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `VerificationCodeService` uses an `Arc` for its store
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Expiring store of email verification codes.
    ///
    /// Shared with the scheduler, which sweeps expired codes every minute.
    pub verification_codes: VerificationCodeService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `verification_codes` - Verification code store
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, verification_codes: VerificationCodeService) -> Self {
        Self {
            db,
            verification_codes,
        }
    }
}
