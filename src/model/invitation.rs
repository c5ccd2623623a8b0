use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateInvitationDto {
    #[serde(alias = "roomId")]
    pub room_id: Uuid,
    #[serde(alias = "toUsername")]
    pub to_username: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct InvitationDto {
    pub id: Uuid,
    pub room_id: Uuid,
    pub inviter_id: Uuid,
    pub invitee_id: Uuid,
    /// `pending`, `accepted` or `rejected`.
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Pending invitation with the room and inviter names resolved.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct PendingInvitationDto {
    pub id: Uuid,
    pub room_id: Uuid,
    pub room_name: String,
    pub inviter_id: Uuid,
    pub inviter_name: String,
    pub created_at: DateTime<Utc>,
}
