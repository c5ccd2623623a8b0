use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::model::api::ErrorDto;

/// Caller-facing classification shared by every domain error.
///
/// Each domain error reports one kind, and the kind alone decides the HTTP status.
/// Kinds other than `Transient` are terminal; a `Transient` failure may be retried
/// with the same request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The referenced entity does not exist.
    NotFound,
    /// The request collides with existing state (duplicate invite, already a member).
    Conflict,
    /// The caller is authenticated but not allowed to perform the operation.
    Forbidden,
    /// Malformed identifier or missing required field.
    InvalidInput,
    /// No authenticated caller, or the credentials did not match.
    Unauthorized,
    /// A store write failed part way; retrying converges.
    Transient,
}

impl ErrorKind {
    /// HTTP status used when an error of this kind reaches the client.
    pub fn status(self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::InvalidInput => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Transient => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Builds the JSON error response for this kind with the given message.
    ///
    /// # Arguments
    /// - `message` - Message returned verbatim in the `error` field
    ///
    /// # Returns
    /// Response with the kind's status and an `ErrorDto` body
    pub fn respond(self, message: String) -> Response {
        (self.status(), Json(ErrorDto { error: message })).into_response()
    }
}
