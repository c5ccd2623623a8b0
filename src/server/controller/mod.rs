//! HTTP request handlers.
//!
//! Each handler authenticates the caller, runs the access guard for room-scoped
//! routes, converts DTOs to domain parameters and returns DTOs.

pub mod column;
pub mod email;
pub mod entry;
pub mod friendship;
pub mod invitation;
pub mod room;
pub mod task;
pub mod user;
