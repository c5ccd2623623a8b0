use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use uuid::Uuid;

use crate::{model::column::ColumnDto, server::util::parse::parse_uuid_from_string};

/// Board column within a room.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardColumn {
    pub id: Uuid,
    pub room_id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl BoardColumn {
    pub fn into_dto(self) -> ColumnDto {
        ColumnDto {
            id: self.id,
            room_id: self.room_id,
            title: self.title,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::board_column::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: parse_uuid_from_string(entity.id)?,
            room_id: parse_uuid_from_string(entity.room_id)?,
            title: entity.title,
            created_at: entity.created_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateColumnParams {
    pub room_id: Uuid,
    pub title: String,
}
