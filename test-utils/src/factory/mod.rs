//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of their parents explicitly, since
//! SQLite enforces every foreign key of the schema.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let user = factory::user::create_user(&db).await?;
//!     let room = factory::room::create_room_with_owner(&db, &user.id).await?;
//!
//!     let roster = factory::helpers::create_room_with_roster(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users with unique usernames and emails
//! - `room` - Rooms, optionally with the owner membership
//! - `room_member` - Membership rows with an arbitrary stored role
//! - `room_invitation` - Invitations in any status
//! - `friendship` - Directional friendship records
//! - `board_column` - Columns of a room
//! - `task` - Tasks in a column
//! - `task_assignment` - Task to user assignments
//! - `entry` - Room entries
//! - `helpers` - Id generation and multi-entity setups

pub mod board_column;
pub mod entry;
pub mod friendship;
pub mod helpers;
pub mod room;
pub mod room_invitation;
pub mod room_member;
pub mod task;
pub mod task_assignment;
pub mod user;

pub use board_column::create_column;
pub use entry::create_entry;
pub use friendship::create_friendship;
pub use helpers::{
    create_room_with_roster, create_task_with_dependencies, parse_id, RoomWithRoster,
};
pub use room::create_room_with_owner;
pub use room_invitation::create_pending_invitation;
pub use room_member::create_member;
pub use task::create_task;
pub use task_assignment::create_assignment;
pub use user::create_user;
