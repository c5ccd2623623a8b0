//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::{new_id, next_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Stored password value for factory users. It is not a valid PHC string, so no
/// password verifies against it; tests that log in register through the service.
pub const UNUSABLE_PASSWORD_HASH: &str = "unusable";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("alice")
///     .email("alice@example.com")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    username: String,
    email: String,
    password: String,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - id: random UUID v4
    /// - name: `"User {n}"`
    /// - username: `"user{n}"`
    /// - email: `"user{n}@example.com"`
    /// - password: [`UNUSABLE_PASSWORD_HASH`]
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: new_id(),
            name: format!("User {}", n),
            username: format!("user{}", n),
            email: format!("user{}@example.com", n),
            password: UNUSABLE_PASSWORD_HASH.to_string(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the stored password hash verbatim.
    pub fn password_hash(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            username: ActiveValue::Set(self.username),
            email: ActiveValue::Set(self.email),
            password: ActiveValue::Set(self.password),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific username.
///
/// # Example
///
/// ```rust,ignore
/// let bob = create_user_with_username(db, "bob").await?;
/// ```
pub async fn create_user_with_username(
    db: &DatabaseConnection,
    username: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).username(username).build().await
}
