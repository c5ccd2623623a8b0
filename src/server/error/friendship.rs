use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::kind::ErrorKind;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FriendshipError {
    #[error("User '{0}' not found")]
    TargetNotFound(String),

    #[error("You cannot send a friend request to yourself")]
    SelfFriendRequest,

    /// A pending or accepted record already links the two users, in either direction.
    #[error("A friend request between you and this user already exists")]
    DuplicateRequest,

    /// No pending request from that requester to the caller.
    #[error("Friend request not found")]
    RequestNotFound,
}

impl FriendshipError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TargetNotFound(_) | Self::RequestNotFound => ErrorKind::NotFound,
            Self::SelfFriendRequest => ErrorKind::Forbidden,
            Self::DuplicateRequest => ErrorKind::Conflict,
        }
    }
}

impl IntoResponse for FriendshipError {
    fn into_response(self) -> Response {
        self.kind().respond(self.to_string())
    }
}
