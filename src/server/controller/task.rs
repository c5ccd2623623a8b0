use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        task::{AssignmentOutcomeDto, CreateTaskDto, TaskDto, UpdateAssigneesDto, UpdateTaskDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            room::{context::RoomRequestContext, guard::AccessGuard},
        },
        model::{
            room::RoomRole,
            task::{CreateTaskParams, Task, UpdateTaskParams},
        },
        service::{assignment::AssignmentService, task::TaskService},
        state::AppState,
    },
};

/// Tag for grouping task endpoints in OpenAPI documentation
pub static TASK_TAG: &str = "task";

/// List the tasks of a room with their assignees.
///
/// # Access Control
/// - Any member of the room given by `roomId`
#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = TASK_TAG,
    params(
        ("roomId" = Uuid, Query, description = "Room id")
    ),
    responses(
        (status = 200, description = "Tasks of the room", body = Vec<TaskDto>),
        (status = 400, description = "Missing or malformed room id", body = ErrorDto),
        (status = 403, description = "Not a member of the room", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tasks(
    State(state): State<AppState>,
    session: Session,
    ctx: RoomRequestContext,
) -> Result<impl IntoResponse, AppError> {
    let (_, access) = AuthGuard::new(&state.db, &session)
        .require_room_role(&ctx, RoomRole::ANY)
        .await?;

    let tasks = TaskService::new(&state.db)
        .get_by_room(access.room_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(tasks.into_iter().map(Task::into_dto).collect::<Vec<_>>()),
    ))
}

/// Create a task in a column.
///
/// # Access Control
/// - `Owner`, `Admin` of the room named in the body
///
/// # Returns
/// - `201 Created` - Created task
/// - `400 Bad Request` - Blank text, or the column belongs to another room
/// - `404 Not Found` - Column does not exist
#[utoipa::path(
    post,
    path = "/api/tasks",
    tag = TASK_TAG,
    request_body = CreateTaskDto,
    responses(
        (status = 201, description = "Task created", body = TaskDto),
        (status = 400, description = "Invalid task data", body = ErrorDto),
        (status = 403, description = "Caller is not an owner or admin of the room", body = ErrorDto),
        (status = 404, description = "Column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_task(
    State(state): State<AppState>,
    session: Session,
    ctx: RoomRequestContext,
) -> Result<impl IntoResponse, AppError> {
    let (_, access) = AuthGuard::new(&state.db, &session)
        .require_room_role(&ctx, RoomRole::MANAGERS)
        .await?;

    let payload: CreateTaskDto = ctx.json()?;

    let task = TaskService::new(&state.db)
        .create(CreateTaskParams {
            room_id: access.room_id,
            ..CreateTaskParams::from_dto(payload)
        })
        .await?;

    Ok((StatusCode::CREATED, Json(task.into_dto())))
}

/// Get a task with its assignees.
///
/// # Access Control
/// - Any member of the task's room
#[utoipa::path(
    get,
    path = "/api/tasks/{task_id}",
    tag = TASK_TAG,
    params(
        ("task_id" = Uuid, Path, description = "Task id")
    ),
    responses(
        (status = 200, description = "Task", body = TaskDto),
        (status = 403, description = "Not a member of the room", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_task(
    State(state): State<AppState>,
    session: Session,
    Path(task_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).authenticated().await?;

    let task = TaskService::new(&state.db).get_by_id(task_id).await?;

    let _ = AccessGuard::new(&state.db)
        .require_in_room(task.room_id, user.id, RoomRole::ANY)
        .await?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}

/// Update a task.
///
/// Only the fields present in the body change. The task may move to another column
/// of the same room.
///
/// # Access Control
/// - `Owner`, `Admin` of the task's room
#[utoipa::path(
    put,
    path = "/api/tasks/{task_id}",
    tag = TASK_TAG,
    params(
        ("task_id" = Uuid, Path, description = "Task id")
    ),
    request_body = UpdateTaskDto,
    responses(
        (status = 200, description = "Task updated", body = TaskDto),
        (status = 400, description = "Invalid task data", body = ErrorDto),
        (status = 403, description = "Caller is not an owner or admin of the room", body = ErrorDto),
        (status = 404, description = "Task or column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_task(
    State(state): State<AppState>,
    session: Session,
    Path(task_id): Path<Uuid>,
    Json(payload): Json<UpdateTaskDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).authenticated().await?;

    let service = TaskService::new(&state.db);
    let task = service.get_by_id(task_id).await?;

    let access = AccessGuard::new(&state.db)
        .require_in_room(task.room_id, user.id, RoomRole::MANAGERS)
        .await?;

    let task = service
        .update(access.room_id, UpdateTaskParams::from_dto(task.id, payload))
        .await?;

    Ok((StatusCode::OK, Json(task.into_dto())))
}

/// Delete a task.
///
/// # Access Control
/// - `Owner`, `Admin` of the task's room, or a member assigned to the task
#[utoipa::path(
    delete,
    path = "/api/tasks/{task_id}",
    tag = TASK_TAG,
    params(
        ("task_id" = Uuid, Path, description = "Task id")
    ),
    responses(
        (status = 200, description = "Task deleted", body = MessageDto),
        (status = 403, description = "Caller is neither a manager nor an assignee", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_task(
    State(state): State<AppState>,
    session: Session,
    Path(task_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).authenticated().await?;

    let service = TaskService::new(&state.db);
    let task = service.get_by_id(task_id).await?;

    let access = AccessGuard::new(&state.db)
        .require_in_room(task.room_id, user.id, RoomRole::ANY)
        .await?;

    service.delete(task.id, access).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Task deleted"))))
}

/// Replace the assignees of a task.
///
/// Sends `{"user_ids": []}` to unassign everyone; omitting `user_ids` is an error.
///
/// # Access Control
/// - `Owner`, `Admin` of the task's room
///
/// # Returns
/// - `200 OK` - Added, removed and final assignees
/// - `400 Bad Request` - Missing list, or a user is not a member of the room
/// - `503 Service Unavailable` - A write failed part way; retry the same request
#[utoipa::path(
    put,
    path = "/api/tasks/{task_id}/assignees",
    tag = TASK_TAG,
    params(
        ("task_id" = Uuid, Path, description = "Task id")
    ),
    request_body = UpdateAssigneesDto,
    responses(
        (status = 200, description = "Assignees reconciled", body = AssignmentOutcomeDto),
        (status = 400, description = "Missing list or non-member assignee", body = ErrorDto),
        (status = 403, description = "Caller is not an owner or admin of the room", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 503, description = "Reconciliation incomplete, retry", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_assignees(
    State(state): State<AppState>,
    session: Session,
    Path(task_id): Path<Uuid>,
    Json(payload): Json<UpdateAssigneesDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).authenticated().await?;

    let service = AssignmentService::new(&state.db);
    let room_id = service.task_room(task_id).await?;

    let _ = AccessGuard::new(&state.db)
        .require_in_room(room_id, user.id, RoomRole::MANAGERS)
        .await?;

    let outcome = service.reconcile(task_id, payload.user_ids).await?;

    Ok((StatusCode::OK, Json(outcome.into_dto())))
}
