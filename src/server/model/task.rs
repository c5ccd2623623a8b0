//! Task, checklist and assignment domain models.
//!
//! Checklists are stored as a JSON array in the task row and decoded into
//! [`TaskList`] values at the repository boundary.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    model::task::{
        AssignmentOutcomeDto, CreateTaskDto, TaskDto, TaskListDto, TaskListItemDto,
        UpdateTaskDto,
    },
    server::util::parse::parse_uuid_from_string,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListItem {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<TaskListItem>,
}

impl TaskList {
    pub fn into_dto(self) -> TaskListDto {
        TaskListDto {
            id: self.id,
            name: self.name,
            items: self
                .items
                .into_iter()
                .map(|item| TaskListItemDto {
                    id: item.id,
                    text: item.text,
                    completed: item.completed,
                })
                .collect(),
        }
    }

    pub fn from_dto(dto: TaskListDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            items: dto
                .items
                .into_iter()
                .map(|item| TaskListItem {
                    id: item.id,
                    text: item.text,
                    completed: item.completed,
                })
                .collect(),
        }
    }
}

/// Decodes the stored checklist column. An empty string is an empty list.
pub fn decode_task_lists(raw: &str) -> Result<Vec<TaskList>, DbErr> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw).map_err(|e| DbErr::Json(e.to_string()))
}

pub fn encode_task_lists(lists: &[TaskList]) -> Result<String, DbErr> {
    serde_json::to_string(lists).map_err(|e| DbErr::Json(e.to_string()))
}

/// Task with its checklists and current assignees.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: Uuid,
    pub room_id: Uuid,
    pub column_id: Uuid,
    pub text: String,
    pub description: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub task_lists: Vec<TaskList>,
    pub completed: bool,
    /// Sorted ids of assigned users.
    pub assignee_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn into_dto(self) -> TaskDto {
        TaskDto {
            id: self.id,
            room_id: self.room_id,
            column_id: self.column_id,
            text: self.text,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            task_lists: self.task_lists.into_iter().map(TaskList::into_dto).collect(),
            completed: self.completed,
            assignee_ids: self.assignee_ids,
            created_at: self.created_at,
        }
    }

    /// Converts a task entity together with its assignee ids.
    ///
    /// # Arguments
    /// - `entity` - Task row
    /// - `assignee_ids` - Ids of assigned users; sorted before storing
    ///
    /// # Returns
    /// - `Ok(Task)` - Converted task
    /// - `Err(DbErr)` - Malformed stored id or checklist JSON
    pub fn from_entity(
        entity: entity::task::Model,
        mut assignee_ids: Vec<Uuid>,
    ) -> Result<Self, DbErr> {
        assignee_ids.sort();

        Ok(Self {
            id: parse_uuid_from_string(entity.id)?,
            room_id: parse_uuid_from_string(entity.room_id)?,
            column_id: parse_uuid_from_string(entity.column_id)?,
            task_lists: decode_task_lists(&entity.task_lists)?,
            text: entity.text,
            description: entity.description,
            start_date: entity.start_date,
            end_date: entity.end_date,
            completed: entity.completed,
            assignee_ids,
            created_at: entity.created_at,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateTaskParams {
    pub room_id: Uuid,
    pub column_id: Uuid,
    pub text: String,
    pub description: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub task_lists: Vec<TaskList>,
}

impl CreateTaskParams {
    pub fn from_dto(dto: CreateTaskDto) -> Self {
        Self {
            room_id: dto.room_id,
            column_id: dto.column_id,
            text: dto.text,
            description: dto.description,
            start_date: dto.start_date,
            end_date: dto.end_date,
            task_lists: dto.task_lists.into_iter().map(TaskList::from_dto).collect(),
        }
    }
}

/// Partial task update. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateTaskParams {
    pub id: Uuid,
    pub column_id: Option<Uuid>,
    pub text: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub task_lists: Option<Vec<TaskList>>,
    pub completed: Option<bool>,
}

impl UpdateTaskParams {
    pub fn from_dto(id: Uuid, dto: UpdateTaskDto) -> Self {
        Self {
            id,
            column_id: dto.column_id,
            text: dto.text,
            description: dto.description,
            start_date: dto.start_date,
            end_date: dto.end_date,
            task_lists: dto
                .task_lists
                .map(|lists| lists.into_iter().map(TaskList::from_dto).collect()),
            completed: dto.completed,
        }
    }
}

/// Result of reconciling a task's assignees against a desired set.
///
/// All three lists are sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentOutcome {
    pub task_id: Uuid,
    pub added: Vec<Uuid>,
    pub removed: Vec<Uuid>,
    pub assigned: Vec<Uuid>,
}

impl AssignmentOutcome {
    pub fn into_dto(self) -> AssignmentOutcomeDto {
        AssignmentOutcomeDto {
            task_id: self.task_id,
            added: self.added,
            removed: self.removed,
            assigned: self.assigned,
        }
    }
}
