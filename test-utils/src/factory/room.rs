//! Room factory for creating test rooms.
//!
//! A room created through [`RoomFactory`] is a bare row. Use
//! [`create_room_with_owner`] when the owner membership must exist too, which is
//! what the server itself guarantees.

use crate::factory::helpers::{new_id, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: String,
    name: String,
    theme: String,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory owned by `owner_id`.
    ///
    /// Defaults:
    /// - name: `"Room {n}"`
    /// - theme: `"default"`
    pub fn new(db: &'a DatabaseConnection, owner_id: impl Into<String>) -> Self {
        Self {
            db,
            owner_id: owner_id.into(),
            name: format!("Room {}", next_id()),
            theme: "default".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            id: ActiveValue::Set(new_id()),
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            theme: ActiveValue::Set(self.theme),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room and the owner's membership row with role `owner`.
///
/// # Arguments
/// - `db` - Database connection
/// - `owner_id` - Existing user id of the owner
///
/// # Returns
/// - `Ok(entity::room::Model)` - Created room
/// - `Err(DbErr)` - Database error during insert
pub async fn create_room_with_owner(
    db: &DatabaseConnection,
    owner_id: &str,
) -> Result<entity::room::Model, DbErr> {
    let room = RoomFactory::new(db, owner_id).build().await?;
    crate::factory::room_member::create_member(db, &room.id, owner_id, "owner").await?;
    Ok(room)
}
