//! User domain models and parameters.
//!
//! Provides the account model with its stored password hash, the public summary
//! projection used in rosters and friend lists, and the parameter types for
//! registration and paginated listing.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;
use uuid::Uuid;

use crate::{
    model::user::{PaginatedUsersDto, RegisterUserDto, UserDto, UserSummaryDto},
    server::util::parse::parse_uuid_from_string,
};

/// Registered account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    /// Display name of the user.
    pub name: String,
    /// Unique handle used for invitations and friend requests.
    pub username: String,
    /// Lowercased unique email address.
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash never leaves the server.
    ///
    /// # Returns
    /// - `UserDto` - The converted user DTO
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            username: self.username,
            email: self.email,
        }
    }

    /// Public projection of this user.
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            name: self.name.clone(),
            username: self.username.clone(),
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(DbErr::Custom)` - The stored id is not a UUID
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: parse_uuid_from_string(entity.id)?,
            name: entity.name,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password,
            created_at: entity.created_at,
        })
    }
}

/// Id, display name and handle of a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub username: String,
}

impl UserSummary {
    pub fn into_dto(self) -> UserSummaryDto {
        UserSummaryDto {
            id: self.id,
            name: self.name,
            username: self.username,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: parse_uuid_from_string(entity.id)?,
            name: entity.name,
            username: entity.username,
        })
    }
}

/// Registration input with a plain text password.
///
/// Names are trimmed and the email is lowercased so lookups by email are exact.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterUserParams {
    pub fn from_dto(dto: RegisterUserDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            username: dto.username.trim().to_string(),
            email: dto.email.trim().to_lowercase(),
            password: dto.password,
        }
    }
}

/// Parameters for inserting a new account.
///
/// The password is already hashed; plain text passwords never reach the data layer.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    /// Users for this page.
    pub users: Vec<UserSummary>,
    /// Total number of users across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of users per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(UserSummary::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
