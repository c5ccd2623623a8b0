//! Task assignment factory.

use crate::factory::helpers::new_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Assigns one user to one task.
pub async fn create_assignment(
    db: &DatabaseConnection,
    task_id: &str,
    user_id: &str,
) -> Result<entity::task_assignment::Model, DbErr> {
    entity::task_assignment::ActiveModel {
        id: ActiveValue::Set(new_id()),
        task_id: ActiveValue::Set(task_id.to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
