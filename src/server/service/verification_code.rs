use rand::Rng;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::model::email::CodePurposeDto;

/// Number of digits in a verification code
const CODE_LENGTH: usize = 6;

/// What an issued code will be used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodePurpose {
    /// Confirming the email of a new account
    Register,
    /// Resetting the password of an existing account
    Recover,
}

impl From<CodePurposeDto> for CodePurpose {
    fn from(dto: CodePurposeDto) -> Self {
        match dto {
            CodePurposeDto::Register => Self::Register,
            CodePurposeDto::Recover => Self::Recover,
        }
    }
}

impl fmt::Display for CodePurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Register => write!(f, "register"),
            Self::Recover => write!(f, "recover"),
        }
    }
}

/// Stored verification code with expiration timestamp
#[derive(Clone)]
struct VerificationCode {
    code: String,
    expires_at: Instant,
}

impl VerificationCode {
    fn new(code: String, ttl: Duration) -> Self {
        Self {
            code,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn matches(&self, input: &str) -> bool {
        self.code == input.trim()
    }
}

/// Expiring store of email verification codes.
///
/// Holds at most one code per email; issuing a new code replaces the previous one.
/// Codes are single use and are also removed once expired, either when looked up or
/// by the periodic sweep. Owned by the application state and cloned into handlers
/// and the scheduler, all clones sharing the same store.
#[derive(Clone)]
pub struct VerificationCodeService {
    codes: Arc<RwLock<HashMap<String, VerificationCode>>>,
    ttl: Duration,
}

impl VerificationCodeService {
    /// Creates an empty store whose codes live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            codes: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Generates a code for `email` and stores it, replacing any previous code.
    ///
    /// # Arguments
    /// * `email` - Address the code is bound to, matched case-insensitively
    ///
    /// # Returns
    /// The generated six digit code.
    pub async fn issue(&self, email: &str) -> String {
        let code = Self::generate_random_code();

        self.codes.write().await.insert(
            Self::key(email),
            VerificationCode::new(code.clone(), self.ttl),
        );

        code
    }

    /// Validates `input_code` for `email` and consumes it on success.
    ///
    /// An expired code is removed and fails validation. A wrong code leaves the stored
    /// code in place.
    ///
    /// # Returns
    /// `true` if the code matched and had not expired, `false` otherwise.
    pub async fn verify_and_consume(&self, email: &str, input_code: &str) -> bool {
        let key = Self::key(email);
        let mut codes = self.codes.write().await;

        let Some(stored) = codes.get(&key) else {
            return false;
        };

        if stored.is_expired() {
            codes.remove(&key);
            return false;
        }

        if stored.matches(input_code) {
            codes.remove(&key);
            return true;
        }

        false
    }

    /// Removes every expired code.
    ///
    /// # Returns
    /// Number of codes removed.
    pub async fn sweep_expired(&self) -> usize {
        let mut codes = self.codes.write().await;
        let before = codes.len();

        codes.retain(|_, code| !code.is_expired());

        before - codes.len()
    }

    fn key(email: &str) -> String {
        email.trim().to_lowercase()
    }

    fn generate_random_code() -> String {
        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
            .collect()
    }

    /// Checks if a valid code is stored for `email` without consuming it.
    #[cfg(test)]
    pub async fn has_valid_code(&self, email: &str) -> bool {
        self.codes
            .read()
            .await
            .get(&Self::key(email))
            .is_some_and(|code| !code.is_expired())
    }

    /// Number of stored codes, expired ones included.
    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.codes.read().await.len()
    }
}
