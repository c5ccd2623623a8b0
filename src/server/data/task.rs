//! Task repository.
//!
//! Tasks are returned with their assignee ids attached, read from the assignment
//! table in one extra query per call.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::server::{
    data::task_assignment::TaskAssignmentRepository,
    model::task::{encode_task_lists, CreateTaskParams, Task, UpdateTaskParams},
    util::parse::parse_uuid_from_string,
};

pub struct TaskRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a task. The caller has already checked that the column belongs to the room.
    pub async fn create(&self, params: CreateTaskParams) -> Result<Task, DbErr> {
        let entity = entity::task::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            room_id: ActiveValue::Set(params.room_id.to_string()),
            column_id: ActiveValue::Set(params.column_id.to_string()),
            text: ActiveValue::Set(params.text),
            description: ActiveValue::Set(params.description),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            task_lists: ActiveValue::Set(encode_task_lists(&params.task_lists)?),
            completed: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Task::from_entity(entity, Vec::new())
    }

    /// Finds a task with its assignee ids.
    pub async fn find_by_id(&self, task_id: Uuid) -> Result<Option<Task>, DbErr> {
        let Some(entity) = entity::prelude::Task::find_by_id(task_id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let assignees = TaskAssignmentRepository::new(self.db)
            .get_user_ids_by_task(task_id)
            .await?;

        Ok(Some(Task::from_entity(entity, assignees)?))
    }

    /// Gets all tasks of a room in creation order, with assignee ids.
    pub async fn get_by_room(&self, room_id: Uuid) -> Result<Vec<Task>, DbErr> {
        let entities = entity::prelude::Task::find()
            .filter(entity::task::Column::RoomId.eq(room_id.to_string()))
            .order_by_asc(entity::task::Column::CreatedAt)
            .all(self.db)
            .await?;

        let task_ids = entities
            .iter()
            .map(|t| parse_uuid_from_string(t.id.clone()))
            .collect::<Result<Vec<_>, _>>()?;
        let mut assignees = TaskAssignmentRepository::new(self.db)
            .get_user_ids_by_tasks(&task_ids)
            .await?;

        entities
            .into_iter()
            .zip(task_ids)
            .map(|(entity, id)| Task::from_entity(entity, assignees.remove(&id).unwrap_or_default()))
            .collect()
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Task))` - Updated task with assignees
    /// - `Ok(None)` - No task with that id
    pub async fn update(&self, params: UpdateTaskParams) -> Result<Option<Task>, DbErr> {
        let Some(existing) = entity::prelude::Task::find_by_id(params.id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::task::ActiveModel = existing.into();
        if let Some(column_id) = params.column_id {
            active.column_id = ActiveValue::Set(column_id.to_string());
        }
        if let Some(text) = params.text {
            active.text = ActiveValue::Set(text);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(start_date) = params.start_date {
            active.start_date = ActiveValue::Set(Some(start_date));
        }
        if let Some(end_date) = params.end_date {
            active.end_date = ActiveValue::Set(Some(end_date));
        }
        if let Some(task_lists) = params.task_lists {
            active.task_lists = ActiveValue::Set(encode_task_lists(&task_lists)?);
        }
        if let Some(completed) = params.completed {
            active.completed = ActiveValue::Set(completed);
        }
        if active.is_changed() {
            active.update(self.db).await?;
        }

        self.find_by_id(params.id).await
    }

    /// Deletes a task; assignments go with it through the foreign key cascade.
    pub async fn delete(&self, task_id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Task::delete_by_id(task_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
