//! Room, membership and role domain models.
//!
//! `RoomRole` is the closed set of roles a membership can carry. Stored role strings
//! are parsed case-insensitively at the repository boundary, so the rest of the
//! server only ever compares enum values.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use std::fmt;
use uuid::Uuid;

use crate::{
    model::room::{RoomDetailDto, RoomDto, RoomListItemDto, RoomMemberDto},
    server::{
        error::internal::InternalError, model::user::UserSummary,
        util::parse::parse_uuid_from_string,
    },
};

/// Role of a user inside one room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomRole {
    Owner,
    Admin,
    Member,
}

impl RoomRole {
    /// Roles allowed to manage a room's content and roster.
    pub const MANAGERS: &'static [RoomRole] = &[RoomRole::Owner, RoomRole::Admin];

    /// Every role; used for operations open to any member.
    pub const ANY: &'static [RoomRole] = &[RoomRole::Owner, RoomRole::Admin, RoomRole::Member];

    /// Parses a role name ignoring ASCII case and surrounding whitespace.
    ///
    /// # Arguments
    /// - `value` - Role name such as `"admin"` or `"Owner"`
    ///
    /// # Returns
    /// - `Some(RoomRole)` - Known role
    /// - `None` - Any other value
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "owner" => Some(Self::Owner),
            "admin" => Some(Self::Admin),
            "member" => Some(Self::Member),
            _ => None,
        }
    }

    /// Lowercase storage and wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }
}

impl fmt::Display for RoomRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a stored role, reporting unknown values as a storage error.
fn role_from_storage(value: String) -> Result<RoomRole, DbErr> {
    RoomRole::parse(&value).ok_or_else(|| InternalError::UnknownRoomRole(value).into())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub theme: String,
    pub created_at: DateTime<Utc>,
}

impl Room {
    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            id: self.id,
            owner_id: self.owner_id,
            name: self.name,
            theme: self.theme,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::room::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: parse_uuid_from_string(entity.id)?,
            owner_id: parse_uuid_from_string(entity.owner_id)?,
            name: entity.name,
            theme: entity.theme,
            created_at: entity.created_at,
        })
    }
}

/// A room together with the caller's role in it.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomWithRole {
    pub room: Room,
    pub role: RoomRole,
}

impl RoomWithRole {
    pub fn into_dto(self) -> RoomListItemDto {
        RoomListItemDto {
            room: self.room.into_dto(),
            role: self.role.to_string(),
        }
    }
}

/// One row of the membership store.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomMember {
    pub room_id: Uuid,
    pub user_id: Uuid,
    pub role: RoomRole,
    pub joined_at: DateTime<Utc>,
}

impl RoomMember {
    /// Converts a membership entity, parsing its role case-insensitively.
    ///
    /// # Returns
    /// - `Ok(RoomMember)` - Converted membership
    /// - `Err(DbErr::Custom)` - Stored id is not a UUID or role is unknown
    pub fn from_entity(entity: entity::room_member::Model) -> Result<Self, DbErr> {
        Ok(Self {
            room_id: parse_uuid_from_string(entity.room_id)?,
            user_id: parse_uuid_from_string(entity.user_id)?,
            role: role_from_storage(entity.role)?,
            joined_at: entity.created_at,
        })
    }
}

/// Membership joined with the member's public profile.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomMemberWithUser {
    pub user: UserSummary,
    pub role: RoomRole,
    pub joined_at: DateTime<Utc>,
}

impl RoomMemberWithUser {
    pub fn into_dto(self) -> RoomMemberDto {
        RoomMemberDto {
            user: self.user.into_dto(),
            role: self.role.to_string(),
            joined_at: self.joined_at,
        }
    }

    pub fn from_entity(
        member: entity::room_member::Model,
        user: entity::user::Model,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            user: UserSummary::from_entity(user)?,
            role: role_from_storage(member.role)?,
            joined_at: member.created_at,
        })
    }
}

/// Room with its full roster.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomDetail {
    pub room: Room,
    pub members: Vec<RoomMemberWithUser>,
}

impl RoomDetail {
    pub fn into_dto(self) -> RoomDetailDto {
        RoomDetailDto {
            room: self.room.into_dto(),
            members: self
                .members
                .into_iter()
                .map(RoomMemberWithUser::into_dto)
                .collect(),
        }
    }
}

/// Outcome of a successful room resolution: which room, who, and with what role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomAccess {
    pub room_id: Uuid,
    pub user_id: Uuid,
    pub role: RoomRole,
}

#[derive(Debug, Clone)]
pub struct CreateRoomParams {
    pub owner_id: Uuid,
    pub name: String,
    pub theme: String,
}
