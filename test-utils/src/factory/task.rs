//! Task factory.

use crate::factory::helpers::{new_id, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for tasks with an empty checklist.
pub struct TaskFactory<'a> {
    db: &'a DatabaseConnection,
    room_id: String,
    column_id: String,
    text: String,
    completed: bool,
}

impl<'a> TaskFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        room_id: impl Into<String>,
        column_id: impl Into<String>,
    ) -> Self {
        Self {
            db,
            room_id: room_id.into(),
            column_id: column_id.into(),
            text: format!("Task {}", next_id()),
            completed: false,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    pub async fn build(self) -> Result<entity::task::Model, DbErr> {
        entity::task::ActiveModel {
            id: ActiveValue::Set(new_id()),
            room_id: ActiveValue::Set(self.room_id),
            column_id: ActiveValue::Set(self.column_id),
            text: ActiveValue::Set(self.text),
            description: ActiveValue::Set(String::new()),
            start_date: ActiveValue::Set(None),
            end_date: ActiveValue::Set(None),
            task_lists: ActiveValue::Set("[]".to_string()),
            completed: ActiveValue::Set(self.completed),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a task in the given room and column.
pub async fn create_task(
    db: &DatabaseConnection,
    room_id: &str,
    column_id: &str,
) -> Result<entity::task::Model, DbErr> {
    TaskFactory::new(db, room_id, column_id).build().await
}
