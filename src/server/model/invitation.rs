//! Room invitation domain models.

use chrono::{DateTime, Utc};
use entity::room_invitation::InvitationStatus;
use sea_orm::DbErr;
use uuid::Uuid;

use crate::{
    model::invitation::{InvitationDto, PendingInvitationDto},
    server::util::parse::parse_uuid_from_string,
};

/// Lowercase wire form of an invitation status.
pub fn status_name(status: InvitationStatus) -> &'static str {
    match status {
        InvitationStatus::Pending => "pending",
        InvitationStatus::Accepted => "accepted",
        InvitationStatus::Rejected => "rejected",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Invitation {
    pub id: Uuid,
    pub room_id: Uuid,
    pub inviter_id: Uuid,
    pub invitee_id: Uuid,
    pub status: InvitationStatus,
    pub created_at: DateTime<Utc>,
}

impl Invitation {
    pub fn into_dto(self) -> InvitationDto {
        InvitationDto {
            id: self.id,
            room_id: self.room_id,
            inviter_id: self.inviter_id,
            invitee_id: self.invitee_id,
            status: status_name(self.status).to_string(),
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::room_invitation::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: parse_uuid_from_string(entity.id)?,
            room_id: parse_uuid_from_string(entity.room_id)?,
            inviter_id: parse_uuid_from_string(entity.inviter_id)?,
            invitee_id: parse_uuid_from_string(entity.invitee_id)?,
            status: entity.status,
            created_at: entity.created_at,
        })
    }
}

/// Pending invitation enriched with the room name and the inviter's display name.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingInvitation {
    pub id: Uuid,
    pub room_id: Uuid,
    pub room_name: String,
    pub inviter_id: Uuid,
    pub inviter_name: String,
    pub created_at: DateTime<Utc>,
}

impl PendingInvitation {
    pub fn into_dto(self) -> PendingInvitationDto {
        PendingInvitationDto {
            id: self.id,
            room_id: self.room_id,
            room_name: self.room_name,
            inviter_id: self.inviter_id,
            inviter_name: self.inviter_name,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating an invitation once the handle has been resolved.
#[derive(Debug, Clone)]
pub struct CreateInvitationParams {
    pub room_id: Uuid,
    pub inviter_id: Uuid,
    pub invitee_id: Uuid,
}
