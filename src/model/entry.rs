use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct EntryDto {
    pub id: Uuid,
    pub room_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEntryDto {
    #[serde(alias = "roomId")]
    pub room_id: Uuid,
    pub content: String,
}
