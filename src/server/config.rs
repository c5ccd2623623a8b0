use std::{env, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_CORS_ALLOWED_ORIGINS: &str = "http://localhost:8081";
const DEFAULT_VERIFICATION_CODE_TTL_SECONDS: u64 = 600;

pub struct Config {
    pub database_url: String,

    pub host: String,
    pub port: u16,

    /// Origins allowed to send credentialed cross-origin requests.
    pub cors_allowed_origins: Vec<String>,
    /// Marks the session cookie `Secure`; enable behind HTTPS.
    pub session_secure: bool,

    pub verification_code_ttl_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: parse_or("PORT", DEFAULT_PORT)?,
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| DEFAULT_CORS_ALLOWED_ORIGINS.to_string())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            session_secure: parse_or("SESSION_SECURE", false)?,
            verification_code_ttl_seconds: parse_or(
                "VERIFICATION_CODE_TTL_SECONDS",
                DEFAULT_VERIFICATION_CODE_TTL_SECONDS,
            )?,
        })
    }
}

/// Reads an optional variable, falling back to `default` when unset.
fn parse_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
