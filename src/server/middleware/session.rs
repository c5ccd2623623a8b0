//! Type-safe session management wrapper.
//!
//! `AuthSession` wraps a tower-sessions `Session` and exposes only the authenticated
//! user id, so handlers never touch raw session keys.

use tower_sessions::Session;
use uuid::Uuid;

use crate::server::{error::AppError, util::parse::parse_uuid_from_string};

const SESSION_AUTH_USER_ID: &str = "auth:user";

/// Authentication session management.
///
/// Handles user authentication state including storing and retrieving the
/// authenticated user's id and session lifecycle operations.
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    ///
    /// # Returns
    /// A new AuthSession instance
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's id in the session.
    ///
    /// Called after a successful login to establish a logged-in session. The session
    /// id is cycled first so a pre-login session id cannot be reused.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user who logged in
    ///
    /// # Returns
    /// - `Ok(())` - User ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_user_id(&self, user_id: Uuid) -> Result<(), AppError> {
        self.session.cycle_id().await?;
        self.session
            .insert(SESSION_AUTH_USER_ID, user_id.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the user's id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - User is logged in
    /// - `Ok(None)` - No user in session (not logged in)
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    /// - `Err(AppError::InternalErr(_))` - Stored value is not a UUID
    pub async fn get_user_id(&self) -> Result<Option<Uuid>, AppError> {
        let Some(user_id_str) = self.session.get::<String>(SESSION_AUTH_USER_ID).await? else {
            return Ok(None);
        };

        let user_id = parse_uuid_from_string(user_id_str)?;

        Ok(Some(user_id))
    }

    /// Checks if a user is currently logged in.
    pub async fn is_authenticated(&self) -> Result<bool, AppError> {
        Ok(self.get_user_id().await?.is_some())
    }

    /// Clears all data from the session.
    ///
    /// Used during logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}
