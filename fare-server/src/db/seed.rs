//! Default reference data
//!
//! Seeds three zones and a fare for every unordered pair among them, only
//! when the store has no zones yet.

use super::repository::{RepoResult, fare};
use crate::pricing::ZonePair;
use shared::models::Zone;
use sqlx::SqlitePool;

const DEFAULT_ZONES: [&str; 3] = ["Zone 1", "Zone 2", "Zone 3"];

/// (zone index, zone index, price in cents), indexes into [`DEFAULT_ZONES`]
const DEFAULT_FARES: [(usize, usize, i64); 6] = [
    (0, 0, 4000),
    (0, 1, 5500),
    (0, 2, 6500),
    (1, 1, 3500),
    (1, 2, 4500),
    (2, 2, 3000),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store already had zones
    Skipped,
    Seeded { zones: usize, fares: usize },
}

pub async fn seed_defaults(pool: &SqlitePool) -> RepoResult<SeedOutcome> {
    let mut tx = pool.begin().await?;

    let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM zones")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        tracing::debug!(existing, "Zones present, skipping default seed");
        return Ok(SeedOutcome::Skipped);
    }

    let mut zones = Vec::with_capacity(DEFAULT_ZONES.len());
    for name in DEFAULT_ZONES {
        let zone = sqlx::query_as::<_, Zone>("INSERT INTO zones (name) VALUES (?) RETURNING id, name")
            .bind(name)
            .fetch_one(&mut *tx)
            .await?;
        zones.push(zone);
    }

    for (a, b, price_cents) in DEFAULT_FARES {
        let pair = ZonePair::canonical(zones[a].id, zones[b].id);
        fare::create(&mut *tx, pair, price_cents).await?;
    }

    tx.commit().await?;

    let outcome = SeedOutcome::Seeded {
        zones: zones.len(),
        fares: DEFAULT_FARES.len(),
    };
    tracing::info!(?outcome, "Seeded default zones and fares");
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::repository::zone;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_seed_fresh_store() {
        let pool = DbService::in_memory().await.unwrap().pool;
        let outcome = seed_defaults(&pool).await.unwrap();
        assert_eq!(outcome, SeedOutcome::Seeded { zones: 3, fares: 6 });

        assert_eq!(zone::list_ids(&pool).await.unwrap(), vec![1, 2, 3]);
        let names: Vec<String> = zone::find_all(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|z| z.name)
            .collect();
        assert_eq!(names, vec!["Zone 1", "Zone 2", "Zone 3"]);

        let fare = fare::find_by_pair(&pool, ZonePair::canonical(1, 3))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fare.price, Decimal::new(65, 0));
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let pool = DbService::in_memory().await.unwrap().pool;
        seed_defaults(&pool).await.unwrap();
        assert_eq!(seed_defaults(&pool).await.unwrap(), SeedOutcome::Skipped);
        assert_eq!(zone::count(&pool).await.unwrap(), 3);
        assert_eq!(fare::count(&pool).await.unwrap(), 6);
    }

    #[tokio::test]
    async fn test_seed_leaves_existing_data_alone() {
        let pool = DbService::in_memory().await.unwrap().pool;
        zone::create(&pool, "Airport").await.unwrap();

        assert_eq!(seed_defaults(&pool).await.unwrap(), SeedOutcome::Skipped);
        assert_eq!(zone::count(&pool).await.unwrap(), 1);
        assert_eq!(fare::count(&pool).await.unwrap(), 0);
    }
}
