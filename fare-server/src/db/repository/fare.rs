//! Fare Repository
//!
//! Prices live in `price_cents`; rows are converted to scale-2 decimals on
//! the way out. Writers receive an already canonical [`ZonePair`].

use super::{RepoError, RepoResult};
use crate::pricing::ZonePair;
use crate::pricing::money::from_cents;
use shared::models::{Fare, FareView};
use sqlx::{Executor, Sqlite, SqlitePool};

#[derive(sqlx::FromRow)]
struct FareRow {
    id: i64,
    source_id: i64,
    destination_id: i64,
    price_cents: i64,
}

impl From<FareRow> for Fare {
    fn from(row: FareRow) -> Self {
        Fare {
            id: row.id,
            source_id: row.source_id,
            destination_id: row.destination_id,
            price: from_cents(row.price_cents),
        }
    }
}

#[derive(sqlx::FromRow)]
struct FareViewRow {
    id: i64,
    source_id: i64,
    source_zone: String,
    destination_id: i64,
    destination_zone: String,
    price_cents: i64,
}

impl From<FareViewRow> for FareView {
    fn from(row: FareViewRow) -> Self {
        FareView {
            id: row.id,
            source_id: row.source_id,
            source_zone: row.source_zone,
            destination_id: row.destination_id,
            destination_zone: row.destination_zone,
            price: from_cents(row.price_cents),
        }
    }
}

const VIEW_SELECT: &str = r#"
    SELECT f.id, f.source_id, s.name AS source_zone,
           f.destination_id, d.name AS destination_zone, f.price_cents
    FROM fares f
    JOIN zones s ON s.id = f.source_id
    JOIN zones d ON d.id = f.destination_id
"#;

/// Exact lookup of a canonical pair
pub async fn find_by_pair<'e, E>(executor: E, pair: ZonePair) -> RepoResult<Option<Fare>>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, FareRow>(
        "SELECT id, source_id, destination_id, price_cents FROM fares WHERE source_id = ? AND destination_id = ?",
    )
    .bind(pair.source)
    .bind(pair.destination)
    .fetch_optional(executor)
    .await?;
    Ok(row.map(Fare::from))
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Fare>> {
    let row = sqlx::query_as::<_, FareRow>(
        "SELECT id, source_id, destination_id, price_cents FROM fares WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(Fare::from))
}

/// All fares with zone names, ordered by id
pub async fn find_all_views(pool: &SqlitePool) -> RepoResult<Vec<FareView>> {
    let rows = sqlx::query_as::<_, FareViewRow>(&format!("{VIEW_SELECT} ORDER BY f.id"))
        .fetch_all(pool)
        .await?;
    Ok(rows.into_iter().map(FareView::from).collect())
}

pub async fn find_view_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<FareView>> {
    let row = sqlx::query_as::<_, FareViewRow>(&format!("{VIEW_SELECT} WHERE f.id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(FareView::from))
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM fares")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn create<'e, E>(executor: E, pair: ZonePair, price_cents: i64) -> RepoResult<Fare>
where
    E: Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, FareRow>(
        r#"
        INSERT INTO fares (source_id, destination_id, price_cents)
        VALUES (?, ?, ?)
        RETURNING id, source_id, destination_id, price_cents
        "#,
    )
    .bind(pair.source)
    .bind(pair.destination)
    .bind(price_cents)
    .fetch_one(executor)
    .await?;
    Ok(row.into())
}

pub async fn update(
    pool: &SqlitePool,
    id: i64,
    pair: ZonePair,
    price_cents: i64,
) -> RepoResult<Fare> {
    let row = sqlx::query_as::<_, FareRow>(
        r#"
        UPDATE fares SET source_id = ?1, destination_id = ?2, price_cents = ?3
        WHERE id = ?4
        RETURNING id, source_id, destination_id, price_cents
        "#,
    )
    .bind(pair.source)
    .bind(pair.destination)
    .bind(price_cents)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    row.map(Fare::from)
        .ok_or_else(|| RepoError::NotFound(format!("Fare {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM fares WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Fare {id} not found")));
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::repository::zone;
    use rust_decimal::Decimal;

    async fn pool_with_zones() -> (SqlitePool, i64, i64) {
        let pool = DbService::in_memory().await.unwrap().pool;
        let a = zone::create(&pool, "Zone A").await.unwrap();
        let b = zone::create(&pool, "Zone B").await.unwrap();
        (pool, a.id, b.id)
    }

    #[tokio::test]
    async fn test_create_and_find_by_pair() {
        let (pool, a, b) = pool_with_zones().await;
        let fare = create(&pool, ZonePair::canonical(b, a), 5500).await.unwrap();
        assert_eq!(fare.source_id, a);
        assert_eq!(fare.destination_id, b);
        assert_eq!(fare.price, Decimal::new(5500, 2));

        let found = find_by_pair(&pool, ZonePair::canonical(a, b))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, fare);
        assert_eq!(count(&pool).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_non_canonical_row_is_rejected_by_store() {
        let (pool, a, b) = pool_with_zones().await;
        let reversed = ZonePair {
            source: b.max(a),
            destination: b.min(a),
        };
        let err = create(&pool, reversed, 100).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }

    #[tokio::test]
    async fn test_duplicate_pair_is_rejected() {
        let (pool, a, b) = pool_with_zones().await;
        create(&pool, ZonePair::canonical(a, b), 100).await.unwrap();
        let err = create(&pool, ZonePair::canonical(b, a), 200).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn test_unknown_zone_is_rejected() {
        let (pool, a, _) = pool_with_zones().await;
        let err = create(&pool, ZonePair::canonical(a, 999), 100)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }

    #[tokio::test]
    async fn test_views_carry_zone_names() {
        let (pool, a, b) = pool_with_zones().await;
        let fare = create(&pool, ZonePair::canonical(a, b), 4500).await.unwrap();

        let views = find_all_views(&pool).await.unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].source_zone, "Zone A");
        assert_eq!(views[0].destination_zone, "Zone B");

        let view = find_view_by_id(&pool, fare.id).await.unwrap().unwrap();
        assert_eq!(view.price, Decimal::new(45, 0));
        assert!(find_view_by_id(&pool, 404).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let (pool, a, b) = pool_with_zones().await;
        let fare = create(&pool, ZonePair::canonical(a, a), 4000).await.unwrap();

        let updated = update(&pool, fare.id, ZonePair::canonical(b, b), 3500)
            .await
            .unwrap();
        assert_eq!(updated.source_id, b);
        assert_eq!(updated.price, Decimal::new(3500, 2));
        assert!(find_by_id(&pool, fare.id).await.unwrap().is_some());

        assert!(delete(&pool, fare.id).await.unwrap());
        assert!(matches!(
            delete(&pool, fare.id).await.unwrap_err(),
            RepoError::NotFound(_)
        ));
        assert!(matches!(
            update(&pool, fare.id, ZonePair::canonical(a, b), 1)
                .await
                .unwrap_err(),
            RepoError::NotFound(_)
        ));
    }
}
