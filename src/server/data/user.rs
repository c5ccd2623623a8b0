//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing account records. It handles
//! creation, lookups by id, username and email, password updates and paginated listing,
//! converting entity models to domain models at the infrastructure boundary.

use crate::server::model::user::{CreateUserParams, User, UserSummary};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user with a freshly generated id.
    ///
    /// # Arguments
    /// - `params` - Name, handle, email and password hash
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations on username or email
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            name: ActiveValue::Set(params.name),
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password: ActiveValue::Set(params.password_hash),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(user_id.to_string())
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user by their unique handle.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user by email, comparing against the stored lowercase form.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.to_lowercase()))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user by a login identifier.
    ///
    /// Identifiers containing `@` are treated as email addresses, anything else as a
    /// username.
    pub async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, DbErr> {
        if identifier.contains('@') {
            self.find_by_email(identifier).await
        } else {
            self.find_by_username(identifier).await
        }
    }

    /// Gets public summaries for the given user ids, ordered by name.
    ///
    /// Unknown ids are skipped.
    pub async fn get_summaries_by_ids(&self, user_ids: &[Uuid]) -> Result<Vec<UserSummary>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = user_ids.iter().map(|id| id.to_string()).collect();

        entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids))
            .order_by_asc(entity::user::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(UserSummary::from_entity)
            .collect()
    }

    /// Replaces a user's password hash.
    ///
    /// # Returns
    /// - `Ok(true)` - Password updated
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_password(&self, user_id: Uuid, password_hash: String) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id.to_string()))
            .col_expr(
                entity::user::Column::Password,
                sea_orm::sea_query::Expr::value(password_hash),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets all users with pagination, ordered alphabetically by name.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users to return per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and the total user count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<UserSummary>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(UserSummary::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total))
    }
}
