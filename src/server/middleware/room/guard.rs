//! Access guard.
//!
//! Runs the role resolver and compares the caller's role against the roles an
//! operation requires. Handlers call it before performing any gated write.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    error::{access::AccessError, AppError},
    middleware::room::{context::RoomRequestContext, resolver::RoleResolver},
    model::room::{RoomAccess, RoomRole},
};

pub struct AccessGuard<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccessGuard<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Decides whether `role` is among `required`.
    ///
    /// Pure and side-effect free. Case-insensitivity is handled when the stored role
    /// is parsed into [`RoomRole`].
    ///
    /// # Returns
    /// - `Ok(())` - Allowed
    /// - `Err(AccessError::InsufficientRole)` - Role not in the required set
    pub fn check(role: RoomRole, required: &[RoomRole]) -> Result<(), AccessError> {
        if required.contains(&role) {
            Ok(())
        } else {
            Err(AccessError::InsufficientRole(role))
        }
    }

    /// Resolves the request's room and requires one of `required` for the caller.
    ///
    /// Resolver failures are returned unchanged so the caller can report the exact
    /// reason.
    ///
    /// # Arguments
    /// - `ctx` - Captured room references of the request
    /// - `user_id` - Authenticated caller
    /// - `required` - Roles allowed to proceed
    ///
    /// # Returns
    /// - `Ok(RoomAccess)` - Caller may proceed
    /// - `Err(AppError::AccessErr(_))` - Denied; see [`AccessError`] for the reason
    pub async fn require(
        &self,
        ctx: &RoomRequestContext,
        user_id: Uuid,
        required: &[RoomRole],
    ) -> Result<RoomAccess, AppError> {
        let access = RoleResolver::new(self.db).resolve(ctx, user_id).await?;

        self.decide(access, required)
    }

    /// Requires one of `required` for the caller in a room the handler already knows.
    pub async fn require_in_room(
        &self,
        room_id: Uuid,
        user_id: Uuid,
        required: &[RoomRole],
    ) -> Result<RoomAccess, AppError> {
        let access = RoleResolver::new(self.db)
            .resolve_in_room(room_id, user_id)
            .await?;

        self.decide(access, required)
    }

    fn decide(&self, access: RoomAccess, required: &[RoomRole]) -> Result<RoomAccess, AppError> {
        if let Err(denied) = Self::check(access.role, required) {
            tracing::debug!(
                "User {} denied in room {}: {}",
                access.user_id,
                access.room_id,
                denied
            );
            return Err(denied.into());
        }

        Ok(access)
    }
}
