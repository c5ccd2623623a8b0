use axum::{
    extract::{Path, Query, State},
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
        user::{LoginUserDto, PaginatedUsersDto, RegisterUserDto, ResetPasswordDto, UserDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::RegisterUserParams,
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Largest page size accepted by the user list
const MAX_ENTRIES: u64 = 100;

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// Register a new account.
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Empty field or password shorter than six characters
/// - `409 Conflict` - Email or username already registered
#[utoipa::path(
    post,
    path = "/api/users/register",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ErrorDto),
        (status = 409, description = "Email or username already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .register(RegisterUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Log in with a username or email and a password.
///
/// Stores the user in the session on success.
///
/// # Returns
/// - `200 OK` - Logged in user
/// - `401 Unauthorized` - Wrong identifier or password
#[utoipa::path(
    post,
    path = "/api/users/login",
    tag = USER_TAG,
    request_body = LoginUserDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .login(&payload.identifier, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    tracing::info!("User {} logged in", user.id);

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out and clear the session.
#[utoipa::path(
    post,
    path = "/api/users/logout",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((StatusCode::OK, Json(MessageDto::new("Logged out"))))
}

/// Set a new password using an emailed recovery code.
///
/// # Returns
/// - `200 OK` - Password changed
/// - `400 Bad Request` - Wrong code or password too short
/// - `404 Not Found` - No account with that email
#[utoipa::path(
    post,
    path = "/api/users/reset-password",
    tag = USER_TAG,
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageDto),
        (status = 400, description = "Invalid code or password", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db)
        .reset_password(
            &state.verification_codes,
            &payload.email,
            &payload.code,
            &payload.password,
        )
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Password changed"))))
}

/// Get the logged in user.
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).authenticated().await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Get a paginated list of users.
///
/// # Arguments
/// - `params` - Zero-indexed page and page size (at most 100)
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Users for the page", body = PaginatedUsersDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).authenticated().await?;

    let entries = params.entries.clamp(1, MAX_ENTRIES);
    let users = UserService::new(&state.db)
        .get_paginated(params.page, entries)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// Get one user by id.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = USER_TAG,
    params(
        ("user_id" = Uuid, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).authenticated().await?;

    let Some(user) = UserService::new(&state.db).get_by_id(user_id).await? else {
        return Err(AuthError::UserNotFound.into());
    };

    Ok((StatusCode::OK, Json(user.into_dto())))
}
