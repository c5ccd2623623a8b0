//! User service for business logic.
//!
//! This module provides the `UserService` for account registration, password login,
//! verification codes and password recovery. It works with domain models rather than
//! DTOs and keeps plain text passwords out of the data layer.

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, PaginatedUsers, RegisterUserParams, User},
    service::verification_code::{CodePurpose, VerificationCodeService},
    util::password::{hash_password, verify_password, MIN_PASSWORD_LENGTH},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// Validates the input, rejects a taken email or username and stores the
    /// Argon2 hash of the password.
    ///
    /// # Arguments
    /// - `params` - Normalized registration input
    ///
    /// # Returns
    /// - `Ok(User)` - Created account
    /// - `Err(AppError::BadRequest)` - Name, username or email is empty
    /// - `Err(AuthError::WeakPassword)` - Password shorter than the minimum
    /// - `Err(AuthError::AccountExists)` - Email or username already registered
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        for (field, value) in [
            ("name", &params.name),
            ("username", &params.username),
            ("email", &params.email),
        ] {
            if value.is_empty() {
                return Err(AppError::BadRequest(format!("{} must not be empty", field)));
            }
        }

        if params.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::WeakPassword(MIN_PASSWORD_LENGTH).into());
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&params.email).await?.is_some() {
            return Err(AuthError::AccountExists("Email".to_string()).into());
        }
        if user_repo.find_by_username(&params.username).await?.is_some() {
            return Err(AuthError::AccountExists("Username".to_string()).into());
        }

        let password_hash = hash_password(&params.password)?;

        let user = user_repo
            .create(CreateUserParams {
                name: params.name,
                username: params.username,
                email: params.email,
                password_hash,
            })
            .await?;

        tracing::info!("Registered user {} ({})", user.username, user.id);

        Ok(user)
    }

    /// Checks login credentials.
    ///
    /// # Arguments
    /// - `identifier` - Email if it contains `@`, username otherwise
    /// - `password` - Plain text password
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AuthError::InvalidCredentials)` - Unknown identifier or wrong password
    pub async fn login(&self, identifier: &str, password: &str) -> Result<User, AppError> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_identifier(identifier.trim())
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Issues a verification code for `email`.
    ///
    /// Delivery is handled outside this service; only the issuance is logged, never
    /// the code itself.
    ///
    /// # Returns
    /// - `Ok(())` - Code issued
    /// - `Err(AuthError::UserNotFound)` - Recovery requested for an unknown email
    /// - `Err(AuthError::AccountExists)` - Registration requested for a taken email
    pub async fn send_verification_code(
        &self,
        codes: &VerificationCodeService,
        email: &str,
        purpose: CodePurpose,
    ) -> Result<(), AppError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(AppError::BadRequest("email must not be empty".to_string()));
        }

        let existing = UserRepository::new(self.db).find_by_email(&email).await?;

        match (purpose, existing) {
            (CodePurpose::Recover, None) => return Err(AuthError::UserNotFound.into()),
            (CodePurpose::Register, Some(_)) => {
                return Err(AuthError::AccountExists("Email".to_string()).into())
            }
            _ => {}
        }

        codes.issue(&email).await;

        tracing::info!("Issued {} verification code for {}", purpose, email);

        Ok(())
    }

    /// Consumes a verification code.
    ///
    /// # Returns
    /// - `Ok(())` - Code matched
    /// - `Err(AuthError::InvalidVerificationCode)` - Wrong, expired or missing code
    pub async fn verify_code(
        &self,
        codes: &VerificationCodeService,
        email: &str,
        code: &str,
    ) -> Result<(), AppError> {
        if !codes.verify_and_consume(email, code).await {
            return Err(AuthError::InvalidVerificationCode.into());
        }

        Ok(())
    }

    /// Sets a new password after validating a recovery code.
    ///
    /// The code is only consumed once the account is known to exist and the new
    /// password is acceptable.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced
    /// - `Err(AuthError::WeakPassword)` - New password too short
    /// - `Err(AuthError::UserNotFound)` - No account with that email
    /// - `Err(AuthError::InvalidVerificationCode)` - Code did not match
    pub async fn reset_password(
        &self,
        codes: &VerificationCodeService,
        email: &str,
        code: &str,
        password: &str,
    ) -> Result<(), AppError> {
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::WeakPassword(MIN_PASSWORD_LENGTH).into());
        }

        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email.trim()).await? else {
            return Err(AuthError::UserNotFound.into());
        };

        self.verify_code(codes, &user.email, code).await?;

        let password_hash = hash_password(password)?;
        user_repo.update_password(user.id, password_hash).await?;

        tracing::info!("Password reset for user {}", user.id);

        Ok(())
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    pub async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).find_by_id(user_id).await?)
    }

    /// Retrieves all users with pagination.
    ///
    /// Returns a paginated collection of users ordered alphabetically by name.
    /// Calculates total pages based on the per_page parameter and total user count.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users per page
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Users for the page and pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<PaginatedUsers, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages,
        })
    }
}
