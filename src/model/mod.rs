//! Wire DTOs shared by the HTTP handlers and the OpenAPI document.

pub mod api;
pub mod column;
pub mod email;
pub mod entry;
pub mod friendship;
pub mod invitation;
pub mod room;
pub mod task;
pub mod user;
