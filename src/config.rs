use std::env;

use thiserror::Error;

/// Startup configuration problem. Never reaches an HTTP client.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} is invalid: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub http_host: String,
    pub http_port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    /// `None` allows any origin.
    pub cors_allowed_origin: Option<String>,
    pub run_migrations: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));
        let invalid = |key: &'static str, value: String| ConfigError::Invalid { key, value };

        let http_port = required("HTTP_PORT")?;
        let http_port = http_port
            .parse::<u16>()
            .map_err(|_| invalid("HTTP_PORT", http_port.clone()))?;

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .parse::<u32>()
                .map_err(|_| invalid("DATABASE_MAX_CONNECTIONS", value.clone()))?,
            None => 10,
        };

        let run_migrations = match lookup("RUN_MIGRATIONS").as_deref() {
            None | Some("") | Some("0") | Some("false") => false,
            Some("1") | Some("true") => true,
            Some(other) => return Err(invalid("RUN_MIGRATIONS", other.to_string())),
        };

        Ok(Config {
            http_host: lookup("HTTP_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            http_port,
            database_url: required("DATABASE_URL")?,
            database_max_connections,
            cors_allowed_origin: lookup("CORS_ALLOWED_ORIGIN").filter(|o| !o.is_empty()),
            run_migrations,
        })
    }
}
