//! Task service.
//!
//! Keeps every task in a column of its own room. Assignment changes go through
//! [`super::assignment::AssignmentService`] instead.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{
        board_column::BoardColumnRepository, task::TaskRepository,
        task_assignment::TaskAssignmentRepository,
    },
    error::{room::RoomError, AppError},
    model::{
        room::{RoomAccess, RoomRole},
        task::{CreateTaskParams, Task, UpdateTaskParams},
    },
};

pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_room(&self, room_id: Uuid) -> Result<Vec<Task>, AppError> {
        Ok(TaskRepository::new(self.db).get_by_room(room_id).await?)
    }

    /// Gets a task with its assignee ids, failing with `RoomError::TaskNotFound`.
    pub async fn get_by_id(&self, task_id: Uuid) -> Result<Task, AppError> {
        TaskRepository::new(self.db)
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| RoomError::TaskNotFound.into())
    }

    /// Creates a task in a column of the same room.
    ///
    /// # Returns
    /// - `Ok(Task)` - Created task without assignees
    /// - `Err(RoomError::EmptyField)` - Text is blank
    /// - `Err(RoomError::ColumnNotFound)` - Column does not exist
    /// - `Err(RoomError::ColumnOutsideRoom)` - Column belongs to another room
    pub async fn create(&self, params: CreateTaskParams) -> Result<Task, AppError> {
        if params.text.trim().is_empty() {
            return Err(RoomError::EmptyField("text").into());
        }

        self.ensure_column_in_room(params.column_id, params.room_id)
            .await?;

        let task = TaskRepository::new(self.db).create(params).await?;

        tracing::info!("Task {} created in room {}", task.id, task.room_id);

        Ok(task)
    }

    /// Applies a partial update to a task in `room_id`.
    ///
    /// Moving the task is only allowed to a column of the same room.
    pub async fn update(&self, room_id: Uuid, params: UpdateTaskParams) -> Result<Task, AppError> {
        if params
            .text
            .as_deref()
            .is_some_and(|text| text.trim().is_empty())
        {
            return Err(RoomError::EmptyField("text").into());
        }

        if let Some(column_id) = params.column_id {
            self.ensure_column_in_room(column_id, room_id).await?;
        }

        TaskRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| RoomError::TaskNotFound.into())
    }

    /// Deletes a task.
    ///
    /// Room owners and admins may delete any task, other members only tasks they
    /// are assigned to.
    ///
    /// # Arguments
    /// - `task_id` - Task to delete
    /// - `access` - Caller's resolved access to the task's room
    ///
    /// # Returns
    /// - `Ok(())` - Task and its assignments deleted
    /// - `Err(RoomError::NotManagerOrAssignee)` - Caller may not delete this task
    /// - `Err(RoomError::TaskNotFound)` - Task vanished in between
    pub async fn delete(&self, task_id: Uuid, access: RoomAccess) -> Result<(), AppError> {
        let allowed = RoomRole::MANAGERS.contains(&access.role)
            || TaskAssignmentRepository::new(self.db)
                .is_assigned(task_id, access.user_id)
                .await?;

        if !allowed {
            return Err(RoomError::NotManagerOrAssignee.into());
        }

        if !TaskRepository::new(self.db).delete(task_id).await? {
            return Err(RoomError::TaskNotFound.into());
        }

        tracing::info!("Task {} deleted by {}", task_id, access.user_id);

        Ok(())
    }

    async fn ensure_column_in_room(&self, column_id: Uuid, room_id: Uuid) -> Result<(), AppError> {
        let Some(column) = BoardColumnRepository::new(self.db)
            .find_by_id(column_id)
            .await?
        else {
            return Err(RoomError::ColumnNotFound.into());
        };

        if column.room_id != room_id {
            return Err(RoomError::ColumnOutsideRoom.into());
        }

        Ok(())
    }
}
