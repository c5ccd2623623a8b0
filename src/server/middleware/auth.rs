use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::{
        room::{context::RoomRequestContext, guard::AccessGuard},
        session::AuthSession,
    },
    model::{
        room::{RoomAccess, RoomRole},
        user::User,
    },
};

/// Authenticates the caller from the session and, for room-scoped routes, checks
/// their role in the room the request targets.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the logged-in user.
    ///
    /// # Returns
    /// - `Ok(User)` - Session holds the id of an existing user
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - The session user was deleted
    pub async fn authenticated(&self) -> Result<User, AppError> {
        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        Ok(user)
    }

    /// Authenticates the caller and requires one of `roles` in the room the request
    /// refers to.
    ///
    /// # Arguments
    /// - `ctx` - Query, path and body captured from the request
    /// - `roles` - Roles allowed to proceed
    ///
    /// # Returns
    /// - `Ok((User, RoomAccess))` - Caller and their resolved room access
    /// - `Err(AppError::AuthErr(_))` - Not logged in
    /// - `Err(AppError::AccessErr(_))` - Room could not be resolved or role not allowed
    pub async fn require_room_role(
        &self,
        ctx: &RoomRequestContext,
        roles: &[RoomRole],
    ) -> Result<(User, RoomAccess), AppError> {
        let user = self.authenticated().await?;

        let access = AccessGuard::new(self.db).require(ctx, user.id, roles).await?;

        Ok((user, access))
    }
}
