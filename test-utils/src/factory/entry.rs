//! Entry factory.

use crate::factory::helpers::{new_id, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an entry with content `"Entry {n}"` in the given room.
pub async fn create_entry(
    db: &DatabaseConnection,
    room_id: &str,
) -> Result<entity::entry::Model, DbErr> {
    entity::entry::ActiveModel {
        id: ActiveValue::Set(new_id()),
        room_id: ActiveValue::Set(room_id.to_string()),
        content: ActiveValue::Set(format!("Entry {}", next_id())),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
