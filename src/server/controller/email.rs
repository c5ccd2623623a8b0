use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        email::{SendCodeDto, VerifyCodeDto},
    },
    server::{error::AppError, service::user::UserService, state::AppState},
};

/// Tag for grouping email verification endpoints in OpenAPI documentation
pub static EMAIL_TAG: &str = "email";

/// Issue a verification code for an email address.
///
/// Registration codes require the email to be unused, recovery codes require an
/// existing account.
///
/// # Returns
/// - `200 OK` - Code issued
/// - `404 Not Found` - Recovery requested for an unknown email
/// - `409 Conflict` - Registration requested for a taken email
#[utoipa::path(
    post,
    path = "/api/email/send-code",
    tag = EMAIL_TAG,
    request_body = SendCodeDto,
    responses(
        (status = 200, description = "Code issued", body = MessageDto),
        (status = 400, description = "Missing email", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_code(
    State(state): State<AppState>,
    Json(payload): Json<SendCodeDto>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db)
        .send_verification_code(
            &state.verification_codes,
            &payload.email,
            payload.purpose.into(),
        )
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Verification code sent"))))
}

/// Check and consume a verification code.
#[utoipa::path(
    post,
    path = "/api/email/verify-code",
    tag = EMAIL_TAG,
    request_body = VerifyCodeDto,
    responses(
        (status = 200, description = "Code accepted", body = MessageDto),
        (status = 400, description = "Wrong or expired code", body = ErrorDto)
    ),
)]
pub async fn verify_code(
    State(state): State<AppState>,
    Json(payload): Json<VerifyCodeDto>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db)
        .verify_code(&state.verification_codes, &payload.email, &payload.code)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Email verified"))))
}
