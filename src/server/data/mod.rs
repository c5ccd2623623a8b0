//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! All database queries, inserts, updates, and deletes are performed through these repositories.

pub mod board_column;
pub mod entry;
pub mod friendship;
pub mod room;
pub mod room_invitation;
pub mod room_member;
pub mod task;
pub mod task_assignment;
pub mod user;

#[cfg(test)]
mod test;

use sea_orm::{DbErr, SqlErr};

/// Whether `err` is a unique index violation, as raised when a concurrent insert
/// wins the race for a row the caller checked was absent.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
