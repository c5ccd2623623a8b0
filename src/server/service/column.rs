use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::board_column::BoardColumnRepository,
    error::{room::RoomError, AppError},
    model::column::{BoardColumn, CreateColumnParams},
};

pub struct ColumnService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ColumnService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_room(&self, room_id: Uuid) -> Result<Vec<BoardColumn>, AppError> {
        Ok(BoardColumnRepository::new(self.db).get_by_room(room_id).await?)
    }

    /// Creates a column in a room.
    ///
    /// # Returns
    /// - `Ok(BoardColumn)` - Created column
    /// - `Err(RoomError::EmptyField)` - Title is blank
    pub async fn create(&self, params: CreateColumnParams) -> Result<BoardColumn, AppError> {
        let title = params.title.trim().to_string();
        if title.is_empty() {
            return Err(RoomError::EmptyField("title").into());
        }

        let column = BoardColumnRepository::new(self.db)
            .create(CreateColumnParams {
                room_id: params.room_id,
                title,
            })
            .await?;

        Ok(column)
    }

    /// Renames a column of `room_id`.
    ///
    /// # Returns
    /// - `Ok(BoardColumn)` - Updated column
    /// - `Err(RoomError::EmptyField)` - Title is blank
    /// - `Err(RoomError::ColumnNotFound)` - No such column in the room
    pub async fn update_title(
        &self,
        room_id: Uuid,
        column_id: Uuid,
        title: &str,
    ) -> Result<BoardColumn, AppError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(RoomError::EmptyField("title").into());
        }

        self.find_in_room(room_id, column_id).await?;

        BoardColumnRepository::new(self.db)
            .update_title(column_id, title.to_string())
            .await?
            .ok_or_else(|| RoomError::ColumnNotFound.into())
    }

    /// Deletes a column of `room_id` together with its tasks.
    pub async fn delete(&self, room_id: Uuid, column_id: Uuid) -> Result<(), AppError> {
        self.find_in_room(room_id, column_id).await?;

        if !BoardColumnRepository::new(self.db).delete(column_id).await? {
            return Err(RoomError::ColumnNotFound.into());
        }

        tracing::info!("Column {} deleted from room {}", column_id, room_id);

        Ok(())
    }

    /// A column of another room is reported as missing.
    async fn find_in_room(&self, room_id: Uuid, column_id: Uuid) -> Result<BoardColumn, AppError> {
        BoardColumnRepository::new(self.db)
            .find_by_id(column_id)
            .await?
            .filter(|column| column.room_id == room_id)
            .ok_or_else(|| RoomError::ColumnNotFound.into())
    }
}
