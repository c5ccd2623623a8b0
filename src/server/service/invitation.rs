//! Invitation workflow.
//!
//! Invitations move from `pending` to either `accepted` or `rejected`, and only the
//! invitee may move them. Accepting also makes the invitee a member of the room.
//! Both transitions are conditional on the row still being pending, so of two
//! concurrent accepts only one succeeds.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{
        room_invitation::RoomInvitationRepository, room_member::RoomMemberRepository,
        user::UserRepository,
    },
    error::{invitation::InvitationError, AppError},
    model::invitation::{CreateInvitationParams, Invitation, PendingInvitation},
};

pub struct InvitationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InvitationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Invites a user, found by username, to a room.
    ///
    /// The caller must already have passed the owner/admin check for `room_id`.
    ///
    /// # Arguments
    /// - `room_id` - Room to invite into
    /// - `inviter_id` - Caller sending the invitation
    /// - `to_username` - Username of the invitee
    ///
    /// # Returns
    /// - `Ok(Invitation)` - New pending invitation
    /// - `Err(InvitationError::TargetNotFound)` - No user with that username
    /// - `Err(InvitationError::AlreadyMember)` - Invitee is already in the room
    /// - `Err(InvitationError::DuplicatePendingInvite)` - A pending invitation exists
    pub async fn create(
        &self,
        room_id: Uuid,
        inviter_id: Uuid,
        to_username: &str,
    ) -> Result<Invitation, AppError> {
        let handle = to_username.trim();

        let Some(invitee) = UserRepository::new(self.db)
            .find_by_username(handle)
            .await?
        else {
            return Err(InvitationError::TargetNotFound(handle.to_string()).into());
        };

        if RoomMemberRepository::new(self.db)
            .is_member(room_id, invitee.id)
            .await?
        {
            return Err(InvitationError::AlreadyMember.into());
        }

        let Some(invitation) = RoomInvitationRepository::new(self.db)
            .create_pending(CreateInvitationParams {
                room_id,
                inviter_id,
                invitee_id: invitee.id,
            })
            .await?
        else {
            return Err(InvitationError::DuplicatePendingInvite.into());
        };

        tracing::info!(
            "User {} invited {} to room {}",
            inviter_id,
            invitee.id,
            room_id
        );

        Ok(invitation)
    }

    /// Accepts a pending invitation addressed to the caller.
    ///
    /// The status change and the membership insert commit together. A caller who is
    /// already a member keeps their existing membership.
    ///
    /// # Returns
    /// - `Ok(Invitation)` - Accepted invitation
    /// - `Err(InvitationError::InvitationNotFound)` - Absent, not pending, or addressed
    ///   to another user
    pub async fn accept(&self, invitation_id: Uuid, caller_id: Uuid) -> Result<Invitation, AppError> {
        let Some(invitation) = RoomInvitationRepository::new(self.db)
            .accept(invitation_id, caller_id)
            .await?
        else {
            return Err(InvitationError::InvitationNotFound.into());
        };

        tracing::info!(
            "User {} accepted invitation {} to room {}",
            caller_id,
            invitation.id,
            invitation.room_id
        );

        Ok(invitation)
    }

    /// Rejects a pending invitation addressed to the caller. No membership changes.
    pub async fn reject(&self, invitation_id: Uuid, caller_id: Uuid) -> Result<Invitation, AppError> {
        let Some(invitation) = RoomInvitationRepository::new(self.db)
            .reject(invitation_id, caller_id)
            .await?
        else {
            return Err(InvitationError::InvitationNotFound.into());
        };

        tracing::info!("User {} rejected invitation {}", caller_id, invitation.id);

        Ok(invitation)
    }

    /// Lists pending invitations addressed to the caller with room and inviter names.
    pub async fn get_pending(&self, caller_id: Uuid) -> Result<Vec<PendingInvitation>, AppError> {
        Ok(RoomInvitationRepository::new(self.db)
            .get_pending_for_user(caller_id)
            .await?)
    }
}
