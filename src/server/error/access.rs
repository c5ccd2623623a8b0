use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::{error::kind::ErrorKind, model::room::RoomRole};

/// Outcomes of room resolution and role gating.
///
/// Every variant is a denial; the guard never lets a gated operation run after
/// producing one of these.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AccessError {
    /// None of the room reference sources carried a value.
    #[error("Room reference is missing")]
    MissingRoomReference,

    /// A room or column reference is present but not a well-formed identifier.
    #[error("Invalid identifier format: '{0}'")]
    InvalidIdentifierFormat(String),

    /// The referenced column does not exist.
    #[error("Column {0} not found")]
    ReferencedEntityNotFound(String),

    /// The caller holds no membership in the resolved room.
    #[error("You are not a member of this room")]
    NotAMember,

    /// The caller's role is not among the required roles.
    #[error("Insufficient rights: role '{0}' is not allowed to perform this action")]
    InsufficientRole(RoomRole),
}

impl AccessError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingRoomReference | Self::InvalidIdentifierFormat(_) => {
                ErrorKind::InvalidInput
            }
            Self::ReferencedEntityNotFound(_) => ErrorKind::NotFound,
            Self::NotAMember | Self::InsufficientRole(_) => ErrorKind::Forbidden,
        }
    }
}

impl IntoResponse for AccessError {
    fn into_response(self) -> Response {
        tracing::debug!("Room access denied: {}", self);
        self.kind().respond(self.to_string())
    }
}
