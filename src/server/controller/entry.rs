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
        entry::{CreateEntryDto, EntryDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            room::{context::RoomRequestContext, guard::AccessGuard},
        },
        model::{entry::Entry, room::RoomRole},
        service::entry::EntryService,
        state::AppState,
    },
};

/// Tag for grouping entry endpoints in OpenAPI documentation
pub static ENTRY_TAG: &str = "entry";

/// List the entries of a room.
///
/// # Access Control
/// - Any member of the room given by `roomId`
#[utoipa::path(
    get,
    path = "/api/entries",
    tag = ENTRY_TAG,
    params(
        ("roomId" = Uuid, Query, description = "Room id")
    ),
    responses(
        (status = 200, description = "Entries of the room", body = Vec<EntryDto>),
        (status = 400, description = "Missing or malformed room id", body = ErrorDto),
        (status = 403, description = "Not a member of the room", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_entries(
    State(state): State<AppState>,
    session: Session,
    ctx: RoomRequestContext,
) -> Result<impl IntoResponse, AppError> {
    let (_, access) = AuthGuard::new(&state.db, &session)
        .require_room_role(&ctx, RoomRole::ANY)
        .await?;

    let entries = EntryService::new(&state.db)
        .get_by_room(access.room_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(entries.into_iter().map(Entry::into_dto).collect::<Vec<_>>()),
    ))
}

/// Post an entry to a room.
///
/// # Access Control
/// - Any member of the room named in the body
#[utoipa::path(
    post,
    path = "/api/entries",
    tag = ENTRY_TAG,
    request_body = CreateEntryDto,
    responses(
        (status = 201, description = "Entry created", body = EntryDto),
        (status = 400, description = "Invalid entry data", body = ErrorDto),
        (status = 403, description = "Not a member of the room", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_entry(
    State(state): State<AppState>,
    session: Session,
    ctx: RoomRequestContext,
) -> Result<impl IntoResponse, AppError> {
    let (_, access) = AuthGuard::new(&state.db, &session)
        .require_room_role(&ctx, RoomRole::ANY)
        .await?;

    let payload: CreateEntryDto = ctx.json()?;

    let entry = EntryService::new(&state.db)
        .create(access.room_id, &payload.content)
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into_dto())))
}

/// Delete an entry.
///
/// # Access Control
/// - `Owner`, `Admin` of the entry's room
#[utoipa::path(
    delete,
    path = "/api/entries/{entry_id}",
    tag = ENTRY_TAG,
    params(
        ("entry_id" = Uuid, Path, description = "Entry id")
    ),
    responses(
        (status = 200, description = "Entry deleted", body = MessageDto),
        (status = 403, description = "Caller is not an owner or admin of the room", body = ErrorDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_entry(
    State(state): State<AppState>,
    session: Session,
    Path(entry_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).authenticated().await?;

    let service = EntryService::new(&state.db);
    let entry = service.get_by_id(entry_id).await?;

    let _ = AccessGuard::new(&state.db)
        .require_in_room(entry.room_id, user.id, RoomRole::MANAGERS)
        .await?;

    service.delete(entry.id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Entry deleted"))))
}
