//! Board column factory.

use crate::factory::helpers::{new_id, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a column titled `"Column {n}"` in the given room.
pub async fn create_column(
    db: &DatabaseConnection,
    room_id: &str,
) -> Result<entity::board_column::Model, DbErr> {
    entity::board_column::ActiveModel {
        id: ActiveValue::Set(new_id()),
        room_id: ActiveValue::Set(room_id.to_string()),
        title: ActiveValue::Set(format!("Column {}", next_id())),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
