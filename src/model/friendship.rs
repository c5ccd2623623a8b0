use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::model::user::UserSummaryDto;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendFriendRequestDto {
    #[serde(alias = "toUsername")]
    pub to_username: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct FriendshipDto {
    pub id: Uuid,
    pub requester_id: Uuid,
    pub target_id: Uuid,
    /// `pending` or `accepted`.
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct IncomingFriendRequestDto {
    pub id: Uuid,
    pub requester: UserSummaryDto,
    pub created_at: DateTime<Utc>,
}
