//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary, where stored string identifiers become `Uuid`
//! values and stored role strings become [`room::RoomRole`], and are transformed to
//! DTOs at the controller boundary.

pub mod column;
pub mod entry;
pub mod friendship;
pub mod invitation;
pub mod room;
pub mod task;
pub mod user;
