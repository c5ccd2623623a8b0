//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used for human-readable fields (usernames, titles) that must not collide
/// across factories within one process.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a fresh UUID v4 primary key in its stored string form.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Parses an id produced by a factory back into a `Uuid`.
///
/// Factory ids always come from [`new_id`], so a parse failure means the test passed
/// something that is not a factory id.
pub fn parse_id(id: &str) -> uuid::Uuid {
    uuid::Uuid::parse_str(id).expect("factory ids are UUIDs")
}

/// A room populated with one user per role.
pub struct RoomWithRoster {
    pub room: entity::room::Model,
    pub owner: entity::user::Model,
    pub admin: entity::user::Model,
    pub member: entity::user::Model,
}

/// Creates a room whose roster holds an owner, an admin and a member.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(RoomWithRoster)` - Room and the three users
/// - `Err(DbErr)` - Database error during creation
pub async fn create_room_with_roster(db: &DatabaseConnection) -> Result<RoomWithRoster, DbErr> {
    let owner = crate::factory::user::create_user(db).await?;
    let admin = crate::factory::user::create_user(db).await?;
    let member = crate::factory::user::create_user(db).await?;

    let room = crate::factory::room::create_room_with_owner(db, &owner.id).await?;
    crate::factory::room_member::create_member(db, &room.id, &admin.id, "admin").await?;
    crate::factory::room_member::create_member(db, &room.id, &member.id, "member").await?;

    Ok(RoomWithRoster {
        room,
        owner,
        admin,
        member,
    })
}

/// Creates an owner, their room, a column and a task in that column.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, room, column, task))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_task_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::room::Model,
        entity::board_column::Model,
        entity::task::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::user::create_user(db).await?;
    let room = crate::factory::room::create_room_with_owner(db, &owner.id).await?;
    let column = crate::factory::board_column::create_column(db, &room.id).await?;
    let task = crate::factory::task::create_task(db, &room.id, &column.id).await?;

    Ok((owner, room, column, task))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;
    use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

    #[tokio::test]
    async fn roster_has_one_member_per_role() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_room_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let roster = create_room_with_roster(db).await?;

        let members = RoomMember::find()
            .filter(entity::room_member::Column::RoomId.eq(roster.room.id.as_str()))
            .all(db)
            .await?;
        assert_eq!(members.len(), 3);
        assert!(members
            .iter()
            .any(|m| m.user_id == roster.owner.id && m.role == "owner"));
        assert!(members
            .iter()
            .any(|m| m.user_id == roster.admin.id && m.role == "admin"));

        Ok(())
    }

    #[tokio::test]
    async fn task_dependencies_share_one_room() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_room_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_owner, room, column, task) = create_task_with_dependencies(db).await?;

        assert_eq!(column.room_id, room.id);
        assert_eq!(task.room_id, room.id);
        assert_eq!(task.column_id, column.id);
        assert_eq!(Task::find().count(db).await?, 1);

        Ok(())
    }
}
