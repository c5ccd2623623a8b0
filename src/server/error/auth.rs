use axum::response::{IntoResponse, Response};
use thiserror::Error;
use uuid::Uuid;

use crate::server::error::kind::ErrorKind;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session.
    #[error("Not logged in")]
    UserNotInSession,

    /// Session refers to a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(Uuid),

    /// Identifier or password did not match.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Registration collided with an existing username or email.
    #[error("{0} already exists")]
    AccountExists(String),

    /// Password shorter than the minimum length.
    #[error("Password must be at least {0} characters")]
    WeakPassword(usize),

    /// Verification code missing, expired or wrong.
    #[error("Invalid verification code")]
    InvalidVerificationCode,

    /// No account for the given email.
    #[error("User not found")]
    UserNotFound,
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) | Self::InvalidCredentials => {
                ErrorKind::Unauthorized
            }
            Self::AccountExists(_) => ErrorKind::Conflict,
            Self::WeakPassword(_) | Self::InvalidVerificationCode => ErrorKind::InvalidInput,
            Self::UserNotFound => ErrorKind::NotFound,
        }
    }
}

/// Converts authentication errors into HTTP responses.
///
/// A session pointing at a deleted user is reported like a missing session so the
/// client simply logs in again; the stale id is only logged.
///
/// # Returns
/// - 400 Bad Request - Weak password or bad verification code
/// - 401 Unauthorized - Missing session, stale session or wrong credentials
/// - 404 Not Found - Unknown email during recovery
/// - 409 Conflict - Username or email already registered
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInDatabase(user_id) => {
                tracing::debug!("Session user {} no longer exists", user_id);
                ErrorKind::Unauthorized.respond(AuthError::UserNotInSession.to_string())
            }
            err => err.kind().respond(err.to_string()),
        }
    }
}
