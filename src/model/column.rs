use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct ColumnDto {
    pub id: Uuid,
    pub room_id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateColumnDto {
    #[serde(alias = "roomId")]
    pub room_id: Uuid,
    pub title: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateColumnDto {
    pub title: String,
}
