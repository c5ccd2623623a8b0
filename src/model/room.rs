use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::user::UserSummaryDto;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct RoomDto {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub name: String,
    pub theme: String,
    pub created_at: DateTime<Utc>,
}

/// A room as seen by one of its members.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct RoomListItemDto {
    pub room: RoomDto,
    /// Caller's role in the room: `owner`, `admin` or `member`.
    pub role: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct RoomMemberDto {
    pub user: UserSummaryDto,
    pub role: String,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct RoomDetailDto {
    pub room: RoomDto,
    pub members: Vec<RoomMemberDto>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRoomDto {
    pub name: String,
    #[serde(default)]
    pub theme: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AssignRoleDto {
    /// `admin` or `member`, case-insensitive.
    pub role: String,
}
