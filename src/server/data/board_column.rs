//! Board column repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::model::column::{BoardColumn, CreateColumnParams};

pub struct BoardColumnRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoardColumnRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateColumnParams) -> Result<BoardColumn, DbErr> {
        let entity = entity::board_column::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            room_id: ActiveValue::Set(params.room_id.to_string()),
            title: ActiveValue::Set(params.title),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        BoardColumn::from_entity(entity)
    }

    /// Finds a column by id.
    ///
    /// Also used by the role resolver to map a column reference to its room.
    pub async fn find_by_id(&self, column_id: Uuid) -> Result<Option<BoardColumn>, DbErr> {
        entity::prelude::BoardColumn::find_by_id(column_id.to_string())
            .one(self.db)
            .await?
            .map(BoardColumn::from_entity)
            .transpose()
    }

    /// Gets the columns of a room in creation order.
    pub async fn get_by_room(&self, room_id: Uuid) -> Result<Vec<BoardColumn>, DbErr> {
        entity::prelude::BoardColumn::find()
            .filter(entity::board_column::Column::RoomId.eq(room_id.to_string()))
            .order_by_asc(entity::board_column::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(BoardColumn::from_entity)
            .collect()
    }

    /// Renames a column.
    ///
    /// # Returns
    /// - `Ok(Some(BoardColumn))` - Updated column
    /// - `Ok(None)` - No column with that id
    pub async fn update_title(
        &self,
        column_id: Uuid,
        title: String,
    ) -> Result<Option<BoardColumn>, DbErr> {
        let Some(existing) = entity::prelude::BoardColumn::find_by_id(column_id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::board_column::ActiveModel = existing.into();
        active.title = ActiveValue::Set(title);
        let entity = active.update(self.db).await?;

        Ok(Some(BoardColumn::from_entity(entity)?))
    }

    /// Deletes a column; its tasks go with it through the foreign key cascade.
    pub async fn delete(&self, column_id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::BoardColumn::delete_by_id(column_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
