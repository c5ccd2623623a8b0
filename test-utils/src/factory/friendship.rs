//! Friendship factory.

use crate::factory::helpers::new_id;
use chrono::Utc;
use entity::friendship::FriendshipStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a directional friendship record.
///
/// # Arguments
/// - `db` - Database connection
/// - `requester_id` - User who sent the request
/// - `target_id` - User who received it
/// - `status` - Stored status
///
/// # Returns
/// - `Ok(entity::friendship::Model)` - Created record
/// - `Err(DbErr)` - Database error during insert
pub async fn create_friendship(
    db: &DatabaseConnection,
    requester_id: &str,
    target_id: &str,
    status: FriendshipStatus,
) -> Result<entity::friendship::Model, DbErr> {
    entity::friendship::ActiveModel {
        id: ActiveValue::Set(new_id()),
        requester_id: ActiveValue::Set(requester_id.to_string()),
        target_id: ActiveValue::Set(target_id.to_string()),
        status: ActiveValue::Set(status),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
