use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

/// Default SQLite database, relative to the working directory
pub const DEFAULT_DATABASE_URL: &str = "sqlite:pearlcard.db";

/// Default frontend origin allowed by CORS
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// Server configuration
///
/// Built once at startup and handed to [`ServerState`](crate::core::ServerState).
///
/// # Environment variables
///
/// Every field can be overridden from the environment or a `.env` file:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATABASE_URL | sqlite:pearlcard.db | SQLite connection string |
/// | CORS_ORIGINS | http://localhost:3000 | Comma-separated allowed origins |
/// | HTTP_HOST | 0.0.0.0 | Bind address |
/// | HTTP_PORT | 8000 | HTTP port |
/// | REQUEST_TIMEOUT_MS | 30000 | Per-request timeout (ms) |
/// | DB_MAX_CONNECTIONS | 5 | Connection pool size |
///
/// # Example
///
/// ```ignore
/// DATABASE_URL=sqlite:/data/fares.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection string
    pub database_url: String,
    /// Origins allowed to make cross-origin requests
    pub cors_origins: Vec<String>,
    /// Bind address
    pub http_host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Request timeout (ms)
    pub request_timeout_ms: u64,
    /// Maximum pooled database connections
    pub db_max_connections: u32,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables use their defaults; unparsable ones log a warning and
    /// fall back to the default as well.
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.into()),
            cors_origins: parse_origins(
                &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.into()),
            ),
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: env_or("HTTP_PORT", 8000),
            request_timeout_ms: env_or("REQUEST_TIMEOUT_MS", 30_000),
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 5),
        }
    }

    /// Default configuration pointed at a specific database
    ///
    /// Used by tests; never reads the environment.
    pub fn for_database(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            cors_origins: vec![DEFAULT_CORS_ORIGIN.to_string()],
            http_host: "127.0.0.1".into(),
            http_port: 0,
            request_timeout_ms: 30_000,
            db_max_connections: 5,
        }
    }

    /// Socket address string to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            tracing::warn!("Invalid {key} value {raw:?}: {e}, using default {default}");
            default
        }),
        Err(_) => default,
    }
}

/// Split a comma-separated origin list, dropping blanks
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        assert_eq!(
            parse_origins("http://localhost:3000, https://fares.example.com ,,"),
            vec![
                "http://localhost:3000".to_string(),
                "https://fares.example.com".to_string()
            ]
        );
        assert!(parse_origins(" , ").is_empty());
    }

    #[test]
    fn test_for_database_defaults() {
        let config = Config::for_database("sqlite::memory:");
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.cors_origins, vec![DEFAULT_CORS_ORIGIN.to_string()]);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.bind_address(), "127.0.0.1:0");
    }
}
