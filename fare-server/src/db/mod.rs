//! Database Module
//!
//! Handles the SQLite connection pool and schema setup

pub mod repository;
pub mod schema;
pub mod seed;

use crate::core::Config;
use crate::utils::AppError;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::str::FromStr;
use std::time::Duration;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Database service, owns the SQLite connection pool
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
}

impl DbService {
    /// Open the configured database and make sure the schema exists
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        let in_memory = is_memory_url(&config.database_url);

        let mut options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(|e| AppError::database(format!("Invalid database url: {e}")))?
            .create_if_missing(true)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true)
            .busy_timeout(BUSY_TIMEOUT);
        if !in_memory {
            options = options.journal_mode(SqliteJournalMode::Wal);
        }

        // An in-memory database lives only as long as its connection
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(config.db_max_connections.max(1))
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        tracing::info!(
            url = %config.database_url,
            in_memory,
            "Database connection established"
        );

        schema::ensure_schema(&pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to create schema: {e}")))?;
        tracing::info!("Database schema ready");

        Ok(Self { pool })
    }

    /// Empty single-connection store with the schema applied
    pub async fn in_memory() -> Result<Self, AppError> {
        Self::new(&Config::for_database("sqlite::memory:")).await
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
