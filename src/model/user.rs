use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub username: String,
    pub email: String,
}

/// Public projection of a user, used wherever other users are listed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct UserSummaryDto {
    pub id: Uuid,
    pub name: String,
    pub username: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, ToSchema)]
pub struct PaginatedUsersDto {
    pub users: Vec<UserSummaryDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterUserDto {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login by email (identifier contains `@`) or by username.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginUserDto {
    pub identifier: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ResetPasswordDto {
    pub email: String,
    pub code: String,
    pub password: String,
}
