//! Room data repository.
//!
//! Rooms are always created together with the owner's membership inside one
//! transaction, so a room without an owner member never becomes visible.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::server::model::room::{CreateRoomParams, Room, RoomMember, RoomRole, RoomWithRole};

pub struct RoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a room and its owner membership atomically.
    ///
    /// # Arguments
    /// - `params` - Owner id, name and theme
    ///
    /// # Returns
    /// - `Ok(Room)` - The created room; its owner holds the `owner` role
    /// - `Err(DbErr)` - Either insert failed; nothing was written
    pub async fn create_with_owner(&self, params: CreateRoomParams) -> Result<Room, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let room = entity::room::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            owner_id: ActiveValue::Set(params.owner_id.to_string()),
            name: ActiveValue::Set(params.name),
            theme: ActiveValue::Set(params.theme),
            created_at: ActiveValue::Set(now),
        }
        .insert(&txn)
        .await?;

        entity::room_member::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            room_id: ActiveValue::Set(room.id.clone()),
            user_id: ActiveValue::Set(params.owner_id.to_string()),
            role: ActiveValue::Set(RoomRole::Owner.to_string()),
            created_at: ActiveValue::Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Room::from_entity(room)
    }

    pub async fn find_by_id(&self, room_id: Uuid) -> Result<Option<Room>, DbErr> {
        entity::prelude::Room::find_by_id(room_id.to_string())
            .one(self.db)
            .await?
            .map(Room::from_entity)
            .transpose()
    }

    /// Gets every room the user is a member of, with the user's role in each.
    ///
    /// Ordered by room creation time, newest first.
    pub async fn get_for_user(&self, user_id: Uuid) -> Result<Vec<RoomWithRole>, DbErr> {
        let rows = entity::prelude::RoomMember::find()
            .filter(entity::room_member::Column::UserId.eq(user_id.to_string()))
            .find_also_related(entity::prelude::Room)
            .order_by_desc(entity::room::Column::CreatedAt)
            .all(self.db)
            .await?;

        let mut rooms = Vec::with_capacity(rows.len());
        for (member, room) in rows {
            let Some(room) = room else {
                continue;
            };
            rooms.push(RoomWithRole {
                room: Room::from_entity(room)?,
                role: RoomMember::from_entity(member)?.role,
            });
        }

        Ok(rooms)
    }

    /// Deletes a room. Members, invitations, columns, tasks, assignments and entries
    /// are removed by foreign key cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Room deleted
    /// - `Ok(false)` - No room with that id
    pub async fn delete(&self, room_id: Uuid) -> Result<bool, DbErr> {
        let result = entity::prelude::Room::delete_by_id(room_id.to_string())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
