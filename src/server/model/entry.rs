use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use uuid::Uuid;

use crate::{model::entry::EntryDto, server::util::parse::parse_uuid_from_string};

/// Free-text note posted to a room.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: Uuid,
    pub room_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    pub fn into_dto(self) -> EntryDto {
        EntryDto {
            id: self.id,
            room_id: self.room_id,
            content: self.content,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::entry::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: parse_uuid_from_string(entity.id)?,
            room_id: parse_uuid_from_string(entity.room_id)?,
            content: entity.content,
            created_at: entity.created_at,
        })
    }
}
