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
        api::ErrorDto,
        invitation::{CreateInvitationDto, InvitationDto, PendingInvitationDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, room::context::RoomRequestContext},
        model::{invitation::PendingInvitation, room::RoomRole},
        service::invitation::InvitationService,
        state::AppState,
    },
};

/// Tag for grouping invitation endpoints in OpenAPI documentation
pub static INVITATION_TAG: &str = "invitation";

/// Invite a user to a room by username.
///
/// # Access Control
/// - `Owner`, `Admin` of the room named in the body
///
/// # Returns
/// - `201 Created` - Pending invitation
/// - `404 Not Found` - No user with that username
/// - `409 Conflict` - Already a member, or an invitation is already pending
#[utoipa::path(
    post,
    path = "/api/invitations",
    tag = INVITATION_TAG,
    request_body = CreateInvitationDto,
    responses(
        (status = 201, description = "Invitation created", body = InvitationDto),
        (status = 400, description = "Missing or malformed room id", body = ErrorDto),
        (status = 403, description = "Caller is not an owner or admin of the room", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Already a member or invitation pending", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_invitation(
    State(state): State<AppState>,
    session: Session,
    ctx: RoomRequestContext,
) -> Result<impl IntoResponse, AppError> {
    let (user, access) = AuthGuard::new(&state.db, &session)
        .require_room_role(&ctx, RoomRole::MANAGERS)
        .await?;

    let payload: CreateInvitationDto = ctx.json()?;

    let invitation = InvitationService::new(&state.db)
        .create(access.room_id, user.id, &payload.to_username)
        .await?;

    Ok((StatusCode::CREATED, Json(invitation.into_dto())))
}

/// List the logged in user's pending invitations.
#[utoipa::path(
    get,
    path = "/api/invitations",
    tag = INVITATION_TAG,
    responses(
        (status = 200, description = "Pending invitations", body = Vec<PendingInvitationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pending_invitations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).authenticated().await?;

    let invitations = InvitationService::new(&state.db)
        .get_pending(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            invitations
                .into_iter()
                .map(PendingInvitation::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Accept an invitation and join its room.
#[utoipa::path(
    post,
    path = "/api/invitations/{invitation_id}/accept",
    tag = INVITATION_TAG,
    params(
        ("invitation_id" = Uuid, Path, description = "Invitation id")
    ),
    responses(
        (status = 200, description = "Invitation accepted", body = InvitationDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "No pending invitation for the caller", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_invitation(
    State(state): State<AppState>,
    session: Session,
    Path(invitation_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).authenticated().await?;

    let invitation = InvitationService::new(&state.db)
        .accept(invitation_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(invitation.into_dto())))
}

/// Reject an invitation.
#[utoipa::path(
    post,
    path = "/api/invitations/{invitation_id}/reject",
    tag = INVITATION_TAG,
    params(
        ("invitation_id" = Uuid, Path, description = "Invitation id")
    ),
    responses(
        (status = 200, description = "Invitation rejected", body = InvitationDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "No pending invitation for the caller", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reject_invitation(
    State(state): State<AppState>,
    session: Session,
    Path(invitation_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).authenticated().await?;

    let invitation = InvitationService::new(&state.db)
        .reject(invitation_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(invitation.into_dto())))
}
