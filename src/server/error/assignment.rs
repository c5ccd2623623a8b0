use axum::response::{IntoResponse, Response};
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

use crate::server::error::kind::ErrorKind;

#[derive(Error, Debug)]
pub enum AssignmentError {
    #[error("Task not found")]
    TaskNotFound,

    /// The request omitted the assignee list. An empty list is a different input.
    #[error("Field 'user_ids' is required; send an empty list to unassign everyone")]
    MissingAssigneeList,

    #[error("User {0} is not a member of the task's room")]
    AssigneeNotInRoom(Uuid),

    /// A delete or insert failed after validation. Safe to retry with the same set.
    #[error("Task assignment update did not complete, retry the request")]
    ReconciliationIncomplete(#[source] DbErr),
}

impl AssignmentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TaskNotFound => ErrorKind::NotFound,
            Self::MissingAssigneeList | Self::AssigneeNotInRoom(_) => ErrorKind::InvalidInput,
            Self::ReconciliationIncomplete(_) => ErrorKind::Transient,
        }
    }
}

impl IntoResponse for AssignmentError {
    fn into_response(self) -> Response {
        if let Self::ReconciliationIncomplete(source) = &self {
            tracing::warn!("Task assignment reconciliation incomplete: {}", source);
        }
        self.kind().respond(self.to_string())
    }
}
