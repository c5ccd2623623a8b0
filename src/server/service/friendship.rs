//! Friendship workflow.
//!
//! A friendship is stored as one directional record from requester to target and is
//! treated as symmetric when queried. At most one record exists per pair of users.
//! Requests cannot be rejected or cancelled.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{friendship::FriendshipRepository, user::UserRepository},
    error::{friendship::FriendshipError, AppError},
    model::{
        friendship::{Friendship, IncomingFriendRequest},
        user::{User, UserSummary},
    },
};

pub struct FriendshipService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FriendshipService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sends a friend request to the user with `to_username`.
    ///
    /// A request to oneself is refused before the target is looked up, so it fails
    /// the same way whether or not the handle exists.
    ///
    /// # Arguments
    /// - `requester` - Caller sending the request
    /// - `to_username` - Username of the target
    ///
    /// # Returns
    /// - `Ok(Friendship)` - New pending request
    /// - `Err(FriendshipError::SelfFriendRequest)` - Target is the caller
    /// - `Err(FriendshipError::TargetNotFound)` - No user with that username
    /// - `Err(FriendshipError::DuplicateRequest)` - A record already links the two users
    pub async fn send_request(
        &self,
        requester: &User,
        to_username: &str,
    ) -> Result<Friendship, AppError> {
        let handle = to_username.trim();

        if handle == requester.username {
            return Err(FriendshipError::SelfFriendRequest.into());
        }

        let Some(target) = UserRepository::new(self.db)
            .find_by_username(handle)
            .await?
        else {
            return Err(FriendshipError::TargetNotFound(handle.to_string()).into());
        };

        if target.id == requester.id {
            return Err(FriendshipError::SelfFriendRequest.into());
        }

        let Some(friendship) = FriendshipRepository::new(self.db)
            .create_request(requester.id, target.id)
            .await?
        else {
            return Err(FriendshipError::DuplicateRequest.into());
        };

        tracing::info!("User {} sent a friend request to {}", requester.id, target.id);

        Ok(friendship)
    }

    /// Accepts the pending request `requester_id` sent to the caller.
    ///
    /// # Returns
    /// - `Ok(Friendship)` - Accepted friendship
    /// - `Err(FriendshipError::RequestNotFound)` - No pending request in that direction
    pub async fn accept_request(
        &self,
        caller_id: Uuid,
        requester_id: Uuid,
    ) -> Result<Friendship, AppError> {
        let Some(friendship) = FriendshipRepository::new(self.db)
            .accept(requester_id, caller_id)
            .await?
        else {
            return Err(FriendshipError::RequestNotFound.into());
        };

        tracing::info!("User {} accepted the friend request of {}", caller_id, requester_id);

        Ok(friendship)
    }

    /// Lists the caller's friends.
    ///
    /// A friend is the other party of an accepted record in either direction; the
    /// caller never appears in their own list.
    pub async fn get_friends(&self, user_id: Uuid) -> Result<Vec<UserSummary>, AppError> {
        let friend_ids: Vec<Uuid> = FriendshipRepository::new(self.db)
            .get_accepted_for_user(user_id)
            .await?
            .iter()
            .map(|friendship| friendship.other_party(user_id))
            .filter(|id| *id != user_id)
            .collect();

        Ok(UserRepository::new(self.db)
            .get_summaries_by_ids(&friend_ids)
            .await?)
    }

    /// Lists pending requests addressed to the caller.
    pub async fn get_incoming(&self, user_id: Uuid) -> Result<Vec<IncomingFriendRequest>, AppError> {
        Ok(FriendshipRepository::new(self.db).get_incoming(user_id).await?)
    }
}
