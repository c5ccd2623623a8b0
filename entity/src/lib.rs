//! SeaORM entity models for the room board database.
//!
//! Identifiers are UUID v4 values stored as strings. Conversion into typed
//! identifiers happens in the server's repository layer.

pub mod prelude;

pub mod board_column;
pub mod entry;
pub mod friendship;
pub mod room;
pub mod room_invitation;
pub mod room_member;
pub mod task;
pub mod task_assignment;
pub mod user;
