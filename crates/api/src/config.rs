use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;

/// A configuration value that could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite database URL (default: `sqlite://meals.db`).
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory holding web-servable assets; images go to `{public_dir}/images`.
    pub public_dir: PathBuf,
    /// Artificial wait before the meal listing is fetched, in milliseconds.
    pub listing_delay_ms: u64,
    /// Where the browser is sent after a successful share (default: `/meals`).
    pub listing_route: String,
    /// Upper bound for a share form body, image included.
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `DATABASE_URL`         | `sqlite://meals.db`        |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `PUBLIC_DIR`           | `public`                   |
    /// | `LISTING_DELAY_MS`     | `2000`                     |
    /// | `LISTING_ROUTE`        | `/meals`                   |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`                 |
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env_or("HOST", "0.0.0.0");
        let port = parse_env("PORT", "3000", "u16")?;
        let database_url = env_or("DATABASE_URL", "sqlite://meals.db");

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if let Some(bad) = cors_origins
            .iter()
            .find(|o| HeaderValue::from_str(o).is_err())
        {
            return Err(ConfigError::Invalid {
                var: "CORS_ORIGINS",
                expected: "origin list",
                value: bad.clone(),
            });
        }

        let request_timeout_secs = parse_env("REQUEST_TIMEOUT_SECS", "30", "u64")?;
        let public_dir = PathBuf::from(env_or("PUBLIC_DIR", "public"));
        let listing_delay_ms = parse_env("LISTING_DELAY_MS", "2000", "u64")?;
        let listing_route = env_or("LISTING_ROUTE", "/meals");
        let max_upload_bytes = parse_env("MAX_UPLOAD_BYTES", "10485760", "usize")?;

        Ok(Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            public_dir,
            listing_delay_ms,
            listing_route,
            max_upload_bytes,
        })
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.into())
}

fn parse_env<T: FromStr>(
    var: &'static str,
    default: &str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    let value = env_or(var, default);
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        expected,
        value,
    })
}
