//! Schema setup
//!
//! DDL lives in `fare-server/migrations`. Applied migrations are recorded in
//! `_sqlx_migrations`, so running them against an initialized store is a
//! no-op.

use sqlx::SqlitePool;
use sqlx::migrate::{MigrateError, Migrator};

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await
}
