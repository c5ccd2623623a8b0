use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        column::{ColumnDto, CreateColumnDto, UpdateColumnDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, room::context::RoomRequestContext},
        model::{
            column::{BoardColumn, CreateColumnParams},
            room::RoomRole,
        },
        service::column::ColumnService,
        state::AppState,
    },
};

/// Tag for grouping column endpoints in OpenAPI documentation
pub static COLUMN_TAG: &str = "column";

/// List the columns of a room.
///
/// # Access Control
/// - Any member of the room given by `roomId`
#[utoipa::path(
    get,
    path = "/api/columns",
    tag = COLUMN_TAG,
    params(
        ("roomId" = Uuid, Query, description = "Room id")
    ),
    responses(
        (status = 200, description = "Columns of the room", body = Vec<ColumnDto>),
        (status = 400, description = "Missing or malformed room id", body = ErrorDto),
        (status = 403, description = "Not a member of the room", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_columns(
    State(state): State<AppState>,
    session: Session,
    ctx: RoomRequestContext,
) -> Result<impl IntoResponse, AppError> {
    let (_, access) = AuthGuard::new(&state.db, &session)
        .require_room_role(&ctx, RoomRole::ANY)
        .await?;

    let columns = ColumnService::new(&state.db)
        .get_by_room(access.room_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            columns
                .into_iter()
                .map(BoardColumn::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a column.
///
/// # Access Control
/// - `Owner`, `Admin` of the room named in the body
#[utoipa::path(
    post,
    path = "/api/columns",
    tag = COLUMN_TAG,
    request_body = CreateColumnDto,
    responses(
        (status = 201, description = "Column created", body = ColumnDto),
        (status = 400, description = "Invalid column data", body = ErrorDto),
        (status = 403, description = "Caller is not an owner or admin of the room", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_column(
    State(state): State<AppState>,
    session: Session,
    ctx: RoomRequestContext,
) -> Result<impl IntoResponse, AppError> {
    let (_, access) = AuthGuard::new(&state.db, &session)
        .require_room_role(&ctx, RoomRole::MANAGERS)
        .await?;

    let payload: CreateColumnDto = ctx.json()?;

    let column = ColumnService::new(&state.db)
        .create(CreateColumnParams {
            room_id: access.room_id,
            title: payload.title,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(column.into_dto())))
}

/// Rename a column.
///
/// # Access Control
/// - `Owner`, `Admin` of the column's room
#[utoipa::path(
    put,
    path = "/api/columns/{column_id}",
    tag = COLUMN_TAG,
    params(
        ("column_id" = Uuid, Path, description = "Column id")
    ),
    request_body = UpdateColumnDto,
    responses(
        (status = 200, description = "Column updated", body = ColumnDto),
        (status = 400, description = "Malformed id or blank title", body = ErrorDto),
        (status = 403, description = "Caller is not an owner or admin of the room", body = ErrorDto),
        (status = 404, description = "Column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_column(
    State(state): State<AppState>,
    session: Session,
    ctx: RoomRequestContext,
) -> Result<impl IntoResponse, AppError> {
    let (_, access) = AuthGuard::new(&state.db, &session)
        .require_room_role(&ctx, RoomRole::MANAGERS)
        .await?;

    let column_id = ctx.column_id()?;
    let payload: UpdateColumnDto = ctx.json()?;

    let column = ColumnService::new(&state.db)
        .update_title(access.room_id, column_id, &payload.title)
        .await?;

    Ok((StatusCode::OK, Json(column.into_dto())))
}

/// Delete a column and its tasks.
///
/// # Access Control
/// - `Owner`, `Admin` of the column's room
#[utoipa::path(
    delete,
    path = "/api/columns/{column_id}",
    tag = COLUMN_TAG,
    params(
        ("column_id" = Uuid, Path, description = "Column id")
    ),
    responses(
        (status = 200, description = "Column deleted", body = MessageDto),
        (status = 403, description = "Caller is not an owner or admin of the room", body = ErrorDto),
        (status = 404, description = "Column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_column(
    State(state): State<AppState>,
    session: Session,
    ctx: RoomRequestContext,
) -> Result<impl IntoResponse, AppError> {
    let (_, access) = AuthGuard::new(&state.db, &session)
        .require_room_role(&ctx, RoomRole::MANAGERS)
        .await?;

    ColumnService::new(&state.db)
        .delete(access.room_id, ctx.column_id()?)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Column deleted"))))
}
