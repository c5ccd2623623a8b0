//! Room entry repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::entry::Entry;

pub struct EntryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EntryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, room_id: Uuid, content: String) -> Result<Entry, DbErr> {
        let entity = entity::entry::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            room_id: ActiveValue::Set(room_id.to_string()),
            content: ActiveValue::Set(content),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Entry::from_entity(entity)
    }

    pub async fn find_by_id(&self, entry_id: Uuid) -> Result<Option<Entry>, DbErr> {
        entity::prelude::Entry::find_by_id(entry_id.to_string())
            .one(self.db)
            .await?
            .map(Entry::from_entity)
            .transpose()
    }

    /// Gets entries of a room, newest first.
    pub async fn get_by_room(&self, room_id: Uuid) -> Result<Vec<Entry>, DbErr> {
        entity::prelude::Entry::find()
            .filter(entity::entry::Column::RoomId.eq(room_id.to_string()))
            .order_by_desc(entity::entry::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Entry::from_entity)
            .collect()
    }

    pub async fn delete(&self, entry_id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Entry::delete_by_id(entry_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
