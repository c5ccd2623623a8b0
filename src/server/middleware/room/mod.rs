//! Room-scoped access control.
//!
//! [`context::RoomRequestContext`] captures the raw room references of a request,
//! [`resolver::RoleResolver`] turns them into a room id and the caller's role, and
//! [`guard::AccessGuard`] allows or denies the operation based on that role.

pub mod context;
pub mod guard;
pub mod resolver;
