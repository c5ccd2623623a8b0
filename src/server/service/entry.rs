use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::entry::EntryRepository,
    error::{room::RoomError, AppError},
    model::entry::Entry,
};

pub struct EntryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EntryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_room(&self, room_id: Uuid) -> Result<Vec<Entry>, AppError> {
        Ok(EntryRepository::new(self.db).get_by_room(room_id).await?)
    }

    /// Gets an entry, failing with `RoomError::EntryNotFound` if absent.
    pub async fn get_by_id(&self, entry_id: Uuid) -> Result<Entry, AppError> {
        EntryRepository::new(self.db)
            .find_by_id(entry_id)
            .await?
            .ok_or_else(|| RoomError::EntryNotFound.into())
    }

    pub async fn create(&self, room_id: Uuid, content: &str) -> Result<Entry, AppError> {
        if content.trim().is_empty() {
            return Err(RoomError::EmptyField("content").into());
        }

        Ok(EntryRepository::new(self.db)
            .create(room_id, content.to_string())
            .await?)
    }

    pub async fn delete(&self, entry_id: Uuid) -> Result<(), AppError> {
        if !EntryRepository::new(self.db).delete(entry_id).await? {
            return Err(RoomError::EntryNotFound.into());
        }

        Ok(())
    }
}
