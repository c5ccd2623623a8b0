use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use uuid::Uuid;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        room::{
            AssignRoleDto, CreateRoomDto, RoomDetailDto, RoomDto, RoomListItemDto, RoomMemberDto,
        },
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, room::context::RoomRequestContext},
        model::room::{CreateRoomParams, RoomMemberWithUser, RoomRole, RoomWithRole},
        service::room::RoomService,
        state::AppState,
    },
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static ROOM_TAG: &str = "room";

/// Member id of the roster routes; the room id is read by the role resolver.
#[derive(Deserialize)]
pub struct MemberPath {
    pub user_id: Uuid,
}

/// List the rooms of the logged in user.
///
/// # Returns
/// - `200 OK` - Rooms with the caller's role in each
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = ROOM_TAG,
    responses(
        (status = 200, description = "Rooms of the caller", body = Vec<RoomListItemDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rooms(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).authenticated().await?;

    let rooms = RoomService::new(&state.db).get_for_user(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(
            rooms
                .into_iter()
                .map(RoomWithRole::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a room owned by the logged in user.
///
/// # Returns
/// - `201 Created` - Created room
/// - `400 Bad Request` - Blank name
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/rooms",
    tag = ROOM_TAG,
    request_body = CreateRoomDto,
    responses(
        (status = 201, description = "Room created", body = RoomDto),
        (status = 400, description = "Invalid room data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).authenticated().await?;

    let room = RoomService::new(&state.db)
        .create(CreateRoomParams {
            owner_id: user.id,
            name: payload.name,
            theme: payload.theme,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(room.into_dto())))
}

/// Get a room with its members.
///
/// # Access Control
/// - Any member of the room
#[utoipa::path(
    get,
    path = "/api/rooms/{room_id}",
    tag = ROOM_TAG,
    params(
        ("room_id" = Uuid, Path, description = "Room id")
    ),
    responses(
        (status = 200, description = "Room with members", body = RoomDetailDto),
        (status = 400, description = "Malformed room id", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the room", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room(
    State(state): State<AppState>,
    session: Session,
    ctx: RoomRequestContext,
) -> Result<impl IntoResponse, AppError> {
    let (_, access) = AuthGuard::new(&state.db, &session)
        .require_room_role(&ctx, RoomRole::ANY)
        .await?;

    let detail = RoomService::new(&state.db).get_detail(access.room_id).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Delete a room and everything in it.
///
/// # Access Control
/// - `Owner` - Only the room owner can delete the room
#[utoipa::path(
    delete,
    path = "/api/rooms/{room_id}",
    tag = ROOM_TAG,
    params(
        ("room_id" = Uuid, Path, description = "Room id")
    ),
    responses(
        (status = 200, description = "Room deleted", body = MessageDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Caller is not the owner", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_room(
    State(state): State<AppState>,
    session: Session,
    ctx: RoomRequestContext,
) -> Result<impl IntoResponse, AppError> {
    let (_, access) = AuthGuard::new(&state.db, &session)
        .require_room_role(&ctx, &[RoomRole::Owner])
        .await?;

    RoomService::new(&state.db).delete(access.room_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Room deleted"))))
}

/// List the members of a room.
///
/// # Access Control
/// - Any member of the room
#[utoipa::path(
    get,
    path = "/api/rooms/{room_id}/members",
    tag = ROOM_TAG,
    params(
        ("room_id" = Uuid, Path, description = "Room id")
    ),
    responses(
        (status = 200, description = "Room members", body = Vec<RoomMemberDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member of the room", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(
    State(state): State<AppState>,
    session: Session,
    ctx: RoomRequestContext,
) -> Result<impl IntoResponse, AppError> {
    let (_, access) = AuthGuard::new(&state.db, &session)
        .require_room_role(&ctx, RoomRole::ANY)
        .await?;

    let members = RoomService::new(&state.db)
        .get_members(access.room_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            members
                .into_iter()
                .map(RoomMemberWithUser::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Change a member's role to `admin` or `member`.
///
/// # Access Control
/// - `Owner` - Only the room owner can change roles
#[utoipa::path(
    put,
    path = "/api/rooms/{room_id}/members/{user_id}/role",
    tag = ROOM_TAG,
    params(
        ("room_id" = Uuid, Path, description = "Room id"),
        ("user_id" = Uuid, Path, description = "Member whose role changes")
    ),
    request_body = AssignRoleDto,
    responses(
        (status = 200, description = "Role changed", body = MessageDto),
        (status = 400, description = "Role is not admin or member", body = ErrorDto),
        (status = 403, description = "Caller is not the owner, or target is the owner", body = ErrorDto),
        (status = 404, description = "Target is not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_role(
    State(state): State<AppState>,
    session: Session,
    Path(path): Path<MemberPath>,
    ctx: RoomRequestContext,
) -> Result<impl IntoResponse, AppError> {
    let (_, access) = AuthGuard::new(&state.db, &session)
        .require_room_role(&ctx, &[RoomRole::Owner])
        .await?;

    let payload: AssignRoleDto = ctx.json()?;

    let role = RoomService::new(&state.db)
        .assign_role(access.room_id, path.user_id, &payload.role)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new(format!("Role changed to {}", role))),
    ))
}

/// Remove a member from a room.
///
/// # Access Control
/// - `Owner`, `Admin` - The owner cannot be removed
#[utoipa::path(
    delete,
    path = "/api/rooms/{room_id}/members/{user_id}",
    tag = ROOM_TAG,
    params(
        ("room_id" = Uuid, Path, description = "Room id"),
        ("user_id" = Uuid, Path, description = "Member to remove")
    ),
    responses(
        (status = 200, description = "Member removed", body = MessageDto),
        (status = 403, description = "Insufficient role, or target is the owner", body = ErrorDto),
        (status = 404, description = "Target is not a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_member(
    State(state): State<AppState>,
    session: Session,
    Path(path): Path<MemberPath>,
    ctx: RoomRequestContext,
) -> Result<impl IntoResponse, AppError> {
    let (_, access) = AuthGuard::new(&state.db, &session)
        .require_room_role(&ctx, RoomRole::MANAGERS)
        .await?;

    RoomService::new(&state.db)
        .remove_member(access.room_id, path.user_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Member removed"))))
}
