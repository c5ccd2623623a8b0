use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::kind::ErrorKind;

/// Errors of room, column, task and entry operations outside the core workflows.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RoomError {
    #[error("Room not found")]
    RoomNotFound,

    #[error("Column not found")]
    ColumnNotFound,

    #[error("Task not found")]
    TaskNotFound,

    #[error("Entry not found")]
    EntryNotFound,

    #[error("User is not a member of this room")]
    MemberNotFound,

    /// The room owner's membership cannot be changed or removed.
    #[error("The room owner cannot be modified")]
    OwnerImmutable,

    #[error("Invalid role '{0}', expected 'admin' or 'member'")]
    InvalidRole(String),

    /// The column of a task must belong to the task's room.
    #[error("Column does not belong to this room")]
    ColumnOutsideRoom,

    /// Task deletion requires owner/admin role or being assigned to the task.
    #[error("Only room admins or assignees can delete this task")]
    NotManagerOrAssignee,

    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

impl RoomError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RoomNotFound
            | Self::ColumnNotFound
            | Self::TaskNotFound
            | Self::EntryNotFound
            | Self::MemberNotFound => ErrorKind::NotFound,
            Self::OwnerImmutable | Self::NotManagerOrAssignee => ErrorKind::Forbidden,
            Self::InvalidRole(_) | Self::ColumnOutsideRoom | Self::EmptyField(_) => {
                ErrorKind::InvalidInput
            }
        }
    }
}

impl IntoResponse for RoomError {
    fn into_response(self) -> Response {
        self.kind().respond(self.to_string())
    }
}
