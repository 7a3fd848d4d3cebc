//! Fare Resolver
//!
//! Canonicalizes the requested pair and looks up its single fare row.
//! Lookups are pure reads over any SQLite executor, so a caller can run them
//! on the pool or inside a transaction.

use rust_decimal::Decimal;
use shared::error::{AppError, ErrorCode};
use shared::models::{DailyFareResponse, Journey, MAX_DAILY_JOURNEYS, TripResult};
use sqlx::{Sqlite, SqliteConnection};
use thiserror::Error;

use super::ZonePair;
use crate::db::repository::{RepoError, fare};

#[derive(Debug, Error)]
pub enum FareError {
    #[error("no fare between zone {from_zone} and zone {to_zone}")]
    NotFound { from_zone: i64, to_zone: i64 },

    #[error(transparent)]
    Store(#[from] RepoError),
}

impl From<FareError> for AppError {
    fn from(err: FareError) -> Self {
        match err {
            FareError::NotFound { from_zone, to_zone } => {
                AppError::fare_not_found(from_zone, to_zone)
            }
            FareError::Store(e) => e.into(),
        }
    }
}

/// Price of a single journey, in either direction
pub async fn resolve_fare<'e, E>(
    executor: E,
    from_zone: i64,
    to_zone: i64,
) -> Result<Decimal, FareError>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let pair = ZonePair::canonical(from_zone, to_zone);
    match fare::find_by_pair(executor, pair).await? {
        Some(fare) => Ok(fare.price),
        None => {
            tracing::debug!(from_zone, to_zone, "No fare for zone pair");
            Err(FareError::NotFound { from_zone, to_zone })
        }
    }
}

/// Price every journey of a day and sum them
///
/// The limit is checked before any lookup. A single missing fare fails the
/// whole request; there are no partial results.
pub async fn daily_total(
    conn: &mut SqliteConnection,
    journeys: &[Journey],
) -> Result<DailyFareResponse, AppError> {
    if journeys.len() > MAX_DAILY_JOURNEYS {
        return Err(AppError::with_message(
            ErrorCode::BatchLimitExceeded,
            format!(
                "At most {MAX_DAILY_JOURNEYS} journeys are allowed per request, got {}",
                journeys.len()
            ),
        )
        .with_detail("max_journeys", MAX_DAILY_JOURNEYS)
        .with_detail("journeys", journeys.len()));
    }

    let mut trip_results = Vec::with_capacity(journeys.len());
    let mut total_daily_fare = Decimal::new(0, 2);
    for journey in journeys {
        let price = resolve_fare(&mut *conn, journey.from_zone, journey.to_zone).await?;
        total_daily_fare += price;
        trip_results.push(TripResult {
            from_zone: journey.from_zone,
            to_zone: journey.to_zone,
            fare: price,
        });
    }

    Ok(DailyFareResponse {
        trip_results,
        total_daily_fare,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{DbService, seed};
    use sqlx::SqlitePool;

    async fn seeded_pool() -> SqlitePool {
        let db = DbService::in_memory().await.unwrap();
        seed::seed_defaults(&db.pool).await.unwrap();
        db.pool
    }

    fn journey(from_zone: i64, to_zone: i64) -> Journey {
        Journey { from_zone, to_zone }
    }

    #[tokio::test]
    async fn test_resolve_is_symmetric() {
        let pool = seeded_pool().await;
        for a in 1..=3 {
            for b in 1..=3 {
                let forward = resolve_fare(&pool, a, b).await.unwrap();
                let backward = resolve_fare(&pool, b, a).await.unwrap();
                assert_eq!(forward, backward, "pair ({a}, {b})");
            }
        }
    }

    #[tokio::test]
    async fn test_resolve_default_prices() {
        let pool = seeded_pool().await;
        assert_eq!(resolve_fare(&pool, 1, 2).await.unwrap(), Decimal::new(55, 0));
        assert_eq!(resolve_fare(&pool, 2, 1).await.unwrap(), Decimal::new(55, 0));
        assert_eq!(resolve_fare(&pool, 3, 3).await.unwrap(), Decimal::new(30, 0));
        assert_eq!(resolve_fare(&pool, 1, 1).await.unwrap(), Decimal::new(40, 0));
    }

    #[tokio::test]
    async fn test_resolve_missing_pair() {
        let pool = seeded_pool().await;
        let err = resolve_fare(&pool, 1, 99).await.unwrap_err();
        assert!(matches!(
            err,
            FareError::NotFound {
                from_zone: 1,
                to_zone: 99
            }
        ));
        assert_eq!(AppError::from(err).code, ErrorCode::FareNotFound);
    }

    #[tokio::test]
    async fn test_daily_total_sums_fares() {
        let pool = seeded_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let result = daily_total(&mut conn, &[journey(1, 2), journey(2, 3), journey(3, 3)])
            .await
            .unwrap();
        assert_eq!(result.trip_results.len(), 3);
        assert_eq!(result.trip_results[1].fare, Decimal::new(45, 0));
        assert_eq!(result.total_daily_fare, Decimal::new(130, 0));
    }

    #[tokio::test]
    async fn test_daily_total_empty_is_zero() {
        let pool = seeded_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let result = daily_total(&mut conn, &[]).await.unwrap();
        assert!(result.trip_results.is_empty());
        assert!(result.total_daily_fare.is_zero());
    }

    #[tokio::test]
    async fn test_daily_total_fails_whole_request_on_miss() {
        let pool = seeded_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        let err = daily_total(&mut conn, &[journey(1, 2), journey(2, 7)])
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::FareNotFound);
    }

    #[tokio::test]
    async fn test_daily_total_limit_checked_first() {
        let pool = seeded_pool().await;
        let mut conn = pool.acquire().await.unwrap();
        // Unresolvable journeys: the limit error wins because no lookup runs
        let journeys = vec![journey(98, 99); MAX_DAILY_JOURNEYS + 1];
        let err = daily_total(&mut conn, &journeys).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::BatchLimitExceeded);

        let journeys = vec![journey(1, 1); MAX_DAILY_JOURNEYS];
        let result = daily_total(&mut conn, &journeys).await.unwrap();
        assert_eq!(result.total_daily_fare, Decimal::new(800, 0));
    }
}
