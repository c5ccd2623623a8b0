//! Friendship domain models.
//!
//! Storage keeps one directional record per request. The symmetric "friends of"
//! relation is rebuilt at query time by matching either direction.

use chrono::{DateTime, Utc};
use entity::friendship::FriendshipStatus;
use sea_orm::DbErr;
use uuid::Uuid;

use crate::{
    model::friendship::{FriendshipDto, IncomingFriendRequestDto},
    server::{model::user::UserSummary, util::parse::parse_uuid_from_string},
};

pub fn status_name(status: FriendshipStatus) -> &'static str {
    match status {
        FriendshipStatus::Pending => "pending",
        FriendshipStatus::Accepted => "accepted",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Friendship {
    pub id: Uuid,
    pub requester_id: Uuid,
    pub target_id: Uuid,
    pub status: FriendshipStatus,
    pub created_at: DateTime<Utc>,
}

impl Friendship {
    pub fn into_dto(self) -> FriendshipDto {
        FriendshipDto {
            id: self.id,
            requester_id: self.requester_id,
            target_id: self.target_id,
            status: status_name(self.status).to_string(),
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::friendship::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: parse_uuid_from_string(entity.id)?,
            requester_id: parse_uuid_from_string(entity.requester_id)?,
            target_id: parse_uuid_from_string(entity.target_id)?,
            status: entity.status,
            created_at: entity.created_at,
        })
    }

    /// The party of this record that is not `user_id`.
    pub fn other_party(&self, user_id: Uuid) -> Uuid {
        if self.requester_id == user_id {
            self.target_id
        } else {
            self.requester_id
        }
    }
}

/// Pending request addressed to the caller, with the requester's profile.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomingFriendRequest {
    pub id: Uuid,
    pub requester: UserSummary,
    pub created_at: DateTime<Utc>,
}

impl IncomingFriendRequest {
    pub fn into_dto(self) -> IncomingFriendRequestDto {
        IncomingFriendRequestDto {
            id: self.id,
            requester: self.requester.into_dto(),
            created_at: self.created_at,
        }
    }
}
