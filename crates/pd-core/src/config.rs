//! Database connection settings.
//!
//! Resolved from environment variables, the only configuration surface the
//! tool exposes.

use crate::error::{Error, Result};
use std::env;

/// Environment variable naming the database host.
pub const ENV_DB_HOST: &str = "PERSONAL_DATA_DB_HOST";
/// Environment variable naming the database.
pub const ENV_DB_NAME: &str = "PERSONAL_DATA_DB_NAME";
/// Environment variable naming the database user.
pub const ENV_DB_USERNAME: &str = "PERSONAL_DATA_DB_USERNAME";
/// Environment variable holding the database password.
pub const ENV_DB_PASSWORD: &str = "PERSONAL_DATA_DB_PASSWORD";

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 3306;

/// Connection settings for the personal-data database.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Database host name.
    pub host: String,
    /// Database port (MySQL default; not configurable).
    pub port: u16,
    /// Database name.
    pub database: String,
    /// Connecting user.
    pub username: String,
    /// Password; empty when unset.
    pub password: String,
}

impl DbConfig {
    /// Resolve settings from the `PERSONAL_DATA_DB_*` environment.
    ///
    /// The host defaults to `localhost` and the password to empty; the
    /// database name and username are required.
    pub fn from_env() -> Result<Self> {
        Ok(DbConfig {
            host: env::var(ENV_DB_HOST).unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: DEFAULT_PORT,
            database: require(ENV_DB_NAME)?,
            username: require(ENV_DB_USERNAME)?,
            password: env::var(ENV_DB_PASSWORD).unwrap_or_default(),
        })
    }
}

fn require(var: &'static str) -> Result<String> {
    env::var(var).map_err(|_| Error::MissingEnvVar(var))
}
