use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::kind::ErrorKind;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InvitationError {
    /// No user has the given username.
    #[error("User '{0}' not found")]
    TargetNotFound(String),

    /// The invitee already holds a membership in the room.
    #[error("User is already a member of this room")]
    AlreadyMember,

    /// A pending invitation for the same room and invitee exists.
    #[error("An invitation for this user is already pending")]
    DuplicatePendingInvite,

    /// Absent, already decided, or addressed to someone else.
    #[error("Invitation not found")]
    InvitationNotFound,
}

impl InvitationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TargetNotFound(_) | Self::InvitationNotFound => ErrorKind::NotFound,
            Self::AlreadyMember | Self::DuplicatePendingInvite => ErrorKind::Conflict,
        }
    }
}

impl IntoResponse for InvitationError {
    fn into_response(self) -> Response {
        self.kind().respond(self.to_string())
    }
}
