//! Zone Repository

use super::{RepoError, RepoResult};
use shared::models::Zone;
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Zone>> {
    let zones = sqlx::query_as::<_, Zone>("SELECT id, name FROM zones ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(zones)
}

/// Zone ids in ascending order
pub async fn list_ids(pool: &SqlitePool) -> RepoResult<Vec<i64>> {
    let ids = sqlx::query_scalar::<_, i64>("SELECT id FROM zones ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(ids)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Zone>> {
    let zone = sqlx::query_as::<_, Zone>("SELECT id, name FROM zones WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(zone)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM zones")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn create(pool: &SqlitePool, name: &str) -> RepoResult<Zone> {
    let zone = sqlx::query_as::<_, Zone>("INSERT INTO zones (name) VALUES (?) RETURNING id, name")
        .bind(name)
        .fetch_one(pool)
        .await?;
    Ok(zone)
}

pub async fn update(pool: &SqlitePool, id: i64, name: Option<&str>) -> RepoResult<Zone> {
    let zone = sqlx::query_as::<_, Zone>(
        "UPDATE zones SET name = COALESCE(?1, name) WHERE id = ?2 RETURNING id, name",
    )
    .bind(name)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    zone.ok_or_else(|| RepoError::NotFound(format!("Zone {id} not found")))
}

/// Delete a zone that no fare references
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let references = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM fares WHERE source_id = ?1 OR destination_id = ?1",
    )
    .bind(id)
    .fetch_one(pool)
    .await?;
    if references > 0 {
        return Err(RepoError::InUse(format!(
            "Zone {id} is referenced by {references} fare(s)"
        )));
    }
    let rows = sqlx::query("DELETE FROM zones WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Zone {id} not found")));
    }
    Ok(true)
}
