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
        friendship::{FriendshipDto, IncomingFriendRequestDto, SendFriendRequestDto},
        user::UserSummaryDto,
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{friendship::IncomingFriendRequest, user::UserSummary},
        service::friendship::FriendshipService,
        state::AppState,
    },
};

/// Tag for grouping friend endpoints in OpenAPI documentation
pub static FRIEND_TAG: &str = "friend";

/// Send a friend request by username.
///
/// # Returns
/// - `201 Created` - Pending request
/// - `403 Forbidden` - Request to oneself
/// - `404 Not Found` - No user with that username
/// - `409 Conflict` - The two users are already linked by a request or friendship
#[utoipa::path(
    post,
    path = "/api/friends/requests",
    tag = FRIEND_TAG,
    request_body = SendFriendRequestDto,
    responses(
        (status = 201, description = "Request sent", body = FriendshipDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Request to oneself", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Request or friendship already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_request(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SendFriendRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).authenticated().await?;

    let friendship = FriendshipService::new(&state.db)
        .send_request(&user, &payload.to_username)
        .await?;

    Ok((StatusCode::CREATED, Json(friendship.into_dto())))
}

/// List pending requests sent to the logged in user.
#[utoipa::path(
    get,
    path = "/api/friends/requests",
    tag = FRIEND_TAG,
    responses(
        (status = 200, description = "Incoming requests", body = Vec<IncomingFriendRequestDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_incoming_requests(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).authenticated().await?;

    let requests = FriendshipService::new(&state.db)
        .get_incoming(user.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            requests
                .into_iter()
                .map(IncomingFriendRequest::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Accept the pending request sent by `requester_id`.
#[utoipa::path(
    post,
    path = "/api/friends/requests/{requester_id}/accept",
    tag = FRIEND_TAG,
    params(
        ("requester_id" = Uuid, Path, description = "User who sent the request")
    ),
    responses(
        (status = 200, description = "Request accepted", body = FriendshipDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "No pending request from that user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accept_request(
    State(state): State<AppState>,
    session: Session,
    Path(requester_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).authenticated().await?;

    let friendship = FriendshipService::new(&state.db)
        .accept_request(user.id, requester_id)
        .await?;

    Ok((StatusCode::OK, Json(friendship.into_dto())))
}

/// List the logged in user's friends.
#[utoipa::path(
    get,
    path = "/api/friends",
    tag = FRIEND_TAG,
    responses(
        (status = 200, description = "Friends", body = Vec<UserSummaryDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_friends(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).authenticated().await?;

    let friends = FriendshipService::new(&state.db).get_friends(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(
            friends
                .into_iter()
                .map(UserSummary::into_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}
