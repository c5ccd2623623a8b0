use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct TaskListItemDto {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

/// Named checklist inside a task.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct TaskListDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<TaskListItemDto>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct TaskDto {
    pub id: Uuid,
    pub room_id: Uuid,
    pub column_id: Uuid,
    pub text: String,
    pub description: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub task_lists: Vec<TaskListDto>,
    pub completed: bool,
    pub assignee_ids: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTaskDto {
    #[serde(alias = "roomId")]
    pub room_id: Uuid,
    #[serde(alias = "columnId")]
    pub column_id: Uuid,
    pub text: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "startDate")]
    pub start_date: Option<String>,
    #[serde(default, alias = "endDate")]
    pub end_date: Option<String>,
    #[serde(default, alias = "taskLists")]
    pub task_lists: Vec<TaskListDto>,
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTaskDto {
    #[serde(default, alias = "columnId")]
    pub column_id: Option<Uuid>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "startDate")]
    pub start_date: Option<String>,
    #[serde(default, alias = "endDate")]
    pub end_date: Option<String>,
    #[serde(default, alias = "taskLists")]
    pub task_lists: Option<Vec<TaskListDto>>,
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Desired assignee set. A missing `user_ids` field is rejected; an empty list
/// unassigns everyone.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAssigneesDto {
    #[serde(default, alias = "userIds")]
    pub user_ids: Option<Vec<Uuid>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct AssignmentOutcomeDto {
    pub task_id: Uuid,
    pub added: Vec<Uuid>,
    pub removed: Vec<Uuid>,
    pub assigned: Vec<Uuid>,
}
