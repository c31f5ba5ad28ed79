//! Server configuration read from the process environment at startup.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_SESSION_TTL_SECS: u64 = 1800;
pub const DEFAULT_SESSION_MAX_CAPACITY: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Idle time after which an untouched session is dropped.
    pub session_ttl: Duration,
    pub session_max_capacity: u64,
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
            session_max_capacity: DEFAULT_SESSION_MAX_CAPACITY,
            cors_allowed_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Read `BACKEND_HOST`, `BACKEND_PORT`, `SESSION_TTL_SECS`,
    /// `SESSION_MAX_CAPACITY` and `CORS_ALLOWED_ORIGINS`. Unset variables
    /// take their defaults; set but unparsable ones are an error.
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = parsed_var("BACKEND_PORT", DEFAULT_PORT)?;

        let ttl_secs = parsed_var("SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS)?;
        if ttl_secs == 0 {
            return Err(AppError::config("SESSION_TTL_SECS must be greater than 0"));
        }
        let session_max_capacity =
            parsed_var("SESSION_MAX_CAPACITY", DEFAULT_SESSION_MAX_CAPACITY)?;

        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty() && *s != "null")
            .map(str::to_string)
            .collect();

        Ok(Self {
            host,
            port,
            session_ttl: Duration::from_secs(ttl_secs),
            session_max_capacity,
            cors_allowed_origins,
        })
    }
}

fn parsed_var<T: FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::config(format!("{name} must be a valid number, got '{raw}'"))),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(e.into()),
    }
}
