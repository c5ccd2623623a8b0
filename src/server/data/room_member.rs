//! Membership store repository.
//!
//! Holds the (room, user) → role mapping that every room-gated operation consults.
//! Rows are unique per (room, user).

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};
use std::collections::HashSet;
use uuid::Uuid;

use crate::server::{
    model::room::{RoomMember, RoomMemberWithUser, RoomRole},
    util::parse::parse_uuid_from_string,
};

pub struct RoomMemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomMemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the membership of a user in a room.
    ///
    /// # Returns
    /// - `Ok(Some(RoomMember))` - The user is a member; role is parsed case-insensitively
    /// - `Ok(None)` - The user holds no membership in the room
    /// - `Err(DbErr)` - Database error or unknown stored role
    pub async fn find(&self, room_id: Uuid, user_id: Uuid) -> Result<Option<RoomMember>, DbErr> {
        entity::prelude::RoomMember::find()
            .filter(entity::room_member::Column::RoomId.eq(room_id.to_string()))
            .filter(entity::room_member::Column::UserId.eq(user_id.to_string()))
            .one(self.db)
            .await?
            .map(RoomMember::from_entity)
            .transpose()
    }

    pub async fn is_member(&self, room_id: Uuid, user_id: Uuid) -> Result<bool, DbErr> {
        Ok(self.find(room_id, user_id).await?.is_some())
    }

    /// Gets the roster of a room with each member's public profile.
    ///
    /// Ordered by join time, so the owner comes first.
    pub async fn get_by_room_with_users(
        &self,
        room_id: Uuid,
    ) -> Result<Vec<RoomMemberWithUser>, DbErr> {
        let rows = entity::prelude::RoomMember::find()
            .filter(entity::room_member::Column::RoomId.eq(room_id.to_string()))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::room_member::Column::CreatedAt)
            .all(self.db)
            .await?;

        let mut members = Vec::with_capacity(rows.len());
        for (member, user) in rows {
            if let Some(user) = user {
                members.push(RoomMemberWithUser::from_entity(member, user)?);
            }
        }

        Ok(members)
    }

    /// Returns the subset of `user_ids` that are members of the room.
    pub async fn filter_members(
        &self,
        room_id: Uuid,
        user_ids: &[Uuid],
    ) -> Result<HashSet<Uuid>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let ids: Vec<String> = user_ids.iter().map(|id| id.to_string()).collect();

        entity::prelude::RoomMember::find()
            .filter(entity::room_member::Column::RoomId.eq(room_id.to_string()))
            .filter(entity::room_member::Column::UserId.is_in(ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|m| parse_uuid_from_string(m.user_id).map_err(DbErr::from))
            .collect()
    }

    /// Adds a membership.
    ///
    /// # Returns
    /// - `Ok(RoomMember)` - Created membership
    /// - `Err(DbErr)` - Database error, including the unique (room, user) violation
    pub async fn create(
        &self,
        room_id: Uuid,
        user_id: Uuid,
        role: RoomRole,
    ) -> Result<RoomMember, DbErr> {
        let entity = insert_member(self.db, room_id, user_id, role).await?;

        RoomMember::from_entity(entity)
    }

    /// Changes the role of an existing membership.
    ///
    /// # Returns
    /// - `Ok(true)` - Role updated
    /// - `Ok(false)` - No such membership
    pub async fn update_role(
        &self,
        room_id: Uuid,
        user_id: Uuid,
        role: RoomRole,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::RoomMember::update_many()
            .filter(entity::room_member::Column::RoomId.eq(room_id.to_string()))
            .filter(entity::room_member::Column::UserId.eq(user_id.to_string()))
            .col_expr(
                entity::room_member::Column::Role,
                sea_orm::sea_query::Expr::value(role.to_string()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes a membership.
    ///
    /// # Returns
    /// - `Ok(true)` - Membership removed
    /// - `Ok(false)` - No such membership
    pub async fn delete(&self, room_id: Uuid, user_id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::RoomMember::delete_many()
            .filter(entity::room_member::Column::RoomId.eq(room_id.to_string()))
            .filter(entity::room_member::Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Inserts a membership row on any connection, including an open transaction.
pub(crate) async fn insert_member<C: ConnectionTrait>(
    conn: &C,
    room_id: Uuid,
    user_id: Uuid,
    role: RoomRole,
) -> Result<entity::room_member::Model, DbErr> {
    entity::room_member::ActiveModel {
        id: ActiveValue::Set(Uuid::new_v4().to_string()),
        room_id: ActiveValue::Set(room_id.to_string()),
        user_id: ActiveValue::Set(user_id.to_string()),
        role: ActiveValue::Set(role.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(conn)
    .await
}
