//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing room, invitation, friendship and assignment rules
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Role checks are not repeated here; handlers run the access guard first.

pub mod assignment;
pub mod column;
pub mod entry;
pub mod friendship;
pub mod invitation;
pub mod room;
pub mod task;
pub mod user;
pub mod verification_code;

#[cfg(test)]
mod test;
