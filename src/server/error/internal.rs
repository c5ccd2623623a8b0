use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a stored identifier as a UUID
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: uuid::Error,
    },

    /// Stored role value is not one of owner, admin or member
    #[error("Unknown room role '{0}' in storage")]
    UnknownRoomRole(String),

    /// Password hashing backend failed
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),
}

/// Lets repository code use `?` on parse helpers while returning `DbErr`.
impl From<InternalError> for sea_orm::DbErr {
    fn from(err: InternalError) -> Self {
        sea_orm::DbErr::Custom(err.to_string())
    }
}
