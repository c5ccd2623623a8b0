//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! Domain errors (`AccessError`, `InvitationError`, `FriendshipError`,
//! `AssignmentError`, `RoomError`, `AuthError`) each report an [`kind::ErrorKind`],
//! and the kind alone decides the HTTP status. Infrastructure failures are logged
//! and surface as a generic 500.

pub mod access;
pub mod assignment;
pub mod auth;
pub mod config;
pub mod friendship;
pub mod internal;
pub mod invitation;
pub mod kind;
pub mod room;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        access::AccessError, assignment::AssignmentError, auth::AuthError, config::ConfigError,
        friendship::FriendshipError, internal::InternalError, invitation::InvitationError,
        room::RoomError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors handle their own response mapping, while
/// generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Room resolution or role check denied the request.
    #[error(transparent)]
    AccessErr(#[from] AccessError),

    #[error(transparent)]
    RoomErr(#[from] RoomError),

    #[error(transparent)]
    InvitationErr(#[from] InvitationError),

    #[error(transparent)]
    FriendshipErr(#[from] FriendshipError),

    #[error(transparent)]
    AssignmentErr(#[from] AssignmentError),

    /// Unexpected internal state, such as a stored identifier that is not a UUID.
    ///
    /// Results in 500 Internal Server Error with a generic message returned to client.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    ///
    /// Results in 500 Internal Server Error as session failures prevent
    /// authentication and state management.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Socket bind or serve failure during startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors delegate to their own `IntoResponse` implementation, which maps
/// their `ErrorKind` to a status code. Internal errors are logged with full details
/// but return generic messages to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `InvalidInput` domain errors
/// - 401 Unauthorized - For unauthenticated requests
/// - 403 Forbidden - For role and self-action violations
/// - 404 Not Found - For `NotFound` and missing entities
/// - 409 Conflict - For duplicates and already-member cases
/// - 503 Service Unavailable - For incomplete assignment reconciliation
/// - 500 Internal Server Error - For all other error types (DbErr, SessionErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::AccessErr(err) => err.into_response(),
            Self::RoomErr(err) => err.into_response(),
            Self::InvitationErr(err) => err.into_response(),
            Self::FriendshipErr(err) => err.into_response(),
            Self::AssignmentErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// # Arguments
/// - `E` - Any type that implements `Display` (typically an error type)
///
/// # Returns
/// A 500 Internal Server Error response with a generic error message JSON body
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_keep_their_status() {
        let cases: Vec<(AppError, StatusCode)> = vec![
            (AccessError::NotAMember.into(), StatusCode::FORBIDDEN),
            (AccessError::MissingRoomReference.into(), StatusCode::BAD_REQUEST),
            (
                InvitationError::DuplicatePendingInvite.into(),
                StatusCode::CONFLICT,
            ),
            (FriendshipError::RequestNotFound.into(), StatusCode::NOT_FOUND),
            (
                AssignmentError::ReconciliationIncomplete(sea_orm::DbErr::Custom("boom".into()))
                    .into(),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (AuthError::UserNotInSession.into(), StatusCode::UNAUTHORIZED),
            (RoomError::OwnerImmutable.into(), StatusCode::FORBIDDEN),
            (
                sea_orm::DbErr::Custom("hidden".into()).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
