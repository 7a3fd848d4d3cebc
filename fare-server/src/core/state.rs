//! Server State
//!
//! Holds everything a request handler needs: the configuration and the
//! database pool. Cloning is cheap; the pool is reference counted.

use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::db::seed::{self, SeedOutcome};
use crate::utils::AppError;

#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub pool: SqlitePool,
}

impl ServerState {
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        Self { config, pool }
    }

    /// Open the store, ensure the schema and seed default data
    ///
    /// Runs before the listener binds. Any error here aborts startup so the
    /// service never serves against a missing schema.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        // 1. Database + schema
        let db = DbService::new(config).await?;

        // 2. Default zones and fares
        match seed::seed_defaults(&db.pool).await? {
            SeedOutcome::Skipped => tracing::info!("Existing data found, default seed skipped"),
            SeedOutcome::Seeded { zones, fares } => {
                tracing::info!(zones, fares, "Default data seeded")
            }
        }

        Ok(Self::new(config.clone(), db.pool))
    }
}
