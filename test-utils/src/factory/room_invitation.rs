//! Room invitation factory.

use crate::factory::helpers::new_id;
use chrono::Utc;
use entity::room_invitation::InvitationStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for room invitations, pending by default.
pub struct RoomInvitationFactory<'a> {
    db: &'a DatabaseConnection,
    room_id: String,
    inviter_id: String,
    invitee_id: String,
    status: InvitationStatus,
}

impl<'a> RoomInvitationFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        room_id: impl Into<String>,
        inviter_id: impl Into<String>,
        invitee_id: impl Into<String>,
    ) -> Self {
        Self {
            db,
            room_id: room_id.into(),
            inviter_id: inviter_id.into(),
            invitee_id: invitee_id.into(),
            status: InvitationStatus::Pending,
        }
    }

    pub fn status(mut self, status: InvitationStatus) -> Self {
        self.status = status;
        self
    }

    pub async fn build(self) -> Result<entity::room_invitation::Model, DbErr> {
        entity::room_invitation::ActiveModel {
            id: ActiveValue::Set(new_id()),
            room_id: ActiveValue::Set(self.room_id),
            inviter_id: ActiveValue::Set(self.inviter_id),
            invitee_id: ActiveValue::Set(self.invitee_id),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending invitation.
pub async fn create_pending_invitation(
    db: &DatabaseConnection,
    room_id: &str,
    inviter_id: &str,
    invitee_id: &str,
) -> Result<entity::room_invitation::Model, DbErr> {
    RoomInvitationFactory::new(db, room_id, inviter_id, invitee_id)
        .build()
        .await
}
