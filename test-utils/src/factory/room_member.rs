//! Room membership factory.

use crate::factory::helpers::new_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a membership row with the given role string.
///
/// The role is written exactly as passed, which lets tests seed legacy rows
/// such as `"Admin"`.
///
/// # Arguments
/// - `db` - Database connection
/// - `room_id` - Existing room id
/// - `user_id` - Existing user id
/// - `role` - Stored role value
///
/// # Returns
/// - `Ok(entity::room_member::Model)` - Created membership
/// - `Err(DbErr)` - Database error during insert
pub async fn create_member(
    db: &DatabaseConnection,
    room_id: &str,
    user_id: &str,
    role: &str,
) -> Result<entity::room_member::Model, DbErr> {
    entity::room_member::ActiveModel {
        id: ActiveValue::Set(new_id()),
        room_id: ActiveValue::Set(room_id.to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
        role: ActiveValue::Set(role.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
