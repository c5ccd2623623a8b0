//! Room service.
//!
//! Room lifecycle and roster management. Role checks happen in the handlers through
//! the access guard; the rules here are the ones that depend on the target member,
//! such as the owner being immutable.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{room::RoomRepository, room_member::RoomMemberRepository},
    error::{room::RoomError, AppError},
    model::room::{CreateRoomParams, Room, RoomDetail, RoomMemberWithUser, RoomRole, RoomWithRole},
};

pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a room with the caller as its owner.
    ///
    /// The owner membership is written in the same transaction as the room.
    pub async fn create(&self, params: CreateRoomParams) -> Result<Room, AppError> {
        if params.name.trim().is_empty() {
            return Err(RoomError::EmptyField("name").into());
        }

        let room = RoomRepository::new(self.db)
            .create_with_owner(CreateRoomParams {
                name: params.name.trim().to_string(),
                ..params
            })
            .await?;

        tracing::info!("Room {} created by {}", room.id, room.owner_id);

        Ok(room)
    }

    /// Lists the rooms the user belongs to with their role in each.
    pub async fn get_for_user(&self, user_id: Uuid) -> Result<Vec<RoomWithRole>, AppError> {
        Ok(RoomRepository::new(self.db).get_for_user(user_id).await?)
    }

    /// Gets a room together with its roster.
    pub async fn get_detail(&self, room_id: Uuid) -> Result<RoomDetail, AppError> {
        let Some(room) = RoomRepository::new(self.db).find_by_id(room_id).await? else {
            return Err(RoomError::RoomNotFound.into());
        };

        let members = self.get_members(room_id).await?;

        Ok(RoomDetail { room, members })
    }

    pub async fn get_members(&self, room_id: Uuid) -> Result<Vec<RoomMemberWithUser>, AppError> {
        Ok(RoomMemberRepository::new(self.db)
            .get_by_room_with_users(room_id)
            .await?)
    }

    /// Deletes a room; members, invitations, columns, tasks and entries cascade.
    pub async fn delete(&self, room_id: Uuid) -> Result<(), AppError> {
        if !RoomRepository::new(self.db).delete(room_id).await? {
            return Err(RoomError::RoomNotFound.into());
        }

        tracing::info!("Room {} deleted", room_id);

        Ok(())
    }

    /// Changes a member's role.
    ///
    /// # Arguments
    /// - `room_id` - Room of the membership
    /// - `user_id` - Member whose role changes
    /// - `role` - Requested role as sent by the client
    ///
    /// # Returns
    /// - `Ok(RoomRole)` - The role now stored
    /// - `Err(RoomError::InvalidRole)` - Role is not `admin` or `member`
    /// - `Err(RoomError::MemberNotFound)` - Target is not in the room
    /// - `Err(RoomError::OwnerImmutable)` - Target is the owner
    pub async fn assign_role(
        &self,
        room_id: Uuid,
        user_id: Uuid,
        role: &str,
    ) -> Result<RoomRole, AppError> {
        let role = match RoomRole::parse(role) {
            Some(role @ (RoomRole::Admin | RoomRole::Member)) => role,
            _ => return Err(RoomError::InvalidRole(role.to_string()).into()),
        };

        let member_repo = RoomMemberRepository::new(self.db);

        let Some(member) = member_repo.find(room_id, user_id).await? else {
            return Err(RoomError::MemberNotFound.into());
        };
        if member.role == RoomRole::Owner {
            return Err(RoomError::OwnerImmutable.into());
        }

        if !member_repo.update_role(room_id, user_id, role).await? {
            return Err(RoomError::MemberNotFound.into());
        }

        tracing::info!("User {} is now {} in room {}", user_id, role, room_id);

        Ok(role)
    }

    /// Removes a member from the room. The owner cannot be removed.
    pub async fn remove_member(&self, room_id: Uuid, user_id: Uuid) -> Result<(), AppError> {
        let member_repo = RoomMemberRepository::new(self.db);

        let Some(member) = member_repo.find(room_id, user_id).await? else {
            return Err(RoomError::MemberNotFound.into());
        };
        if member.role == RoomRole::Owner {
            return Err(RoomError::OwnerImmutable.into());
        }

        member_repo.delete(room_id, user_id).await?;

        tracing::info!("User {} removed from room {}", user_id, room_id);

        Ok(())
    }
}
