//! Fare admin handlers
//!
//! Writes accept the zone pair in either order and store it canonically.

use axum::{Json, extract::State, http::StatusCode};
use shared::models::{FareCreate, FareUpdate, FareView};
use sqlx::SqlitePool;

use crate::api::extract::{ValidJson, ValidPath};
use crate::core::ServerState;
use crate::db::repository::{RepoError, fare, zone};
use crate::pricing::ZonePair;
use crate::utils::validation::validate_price;
use crate::utils::{AppError, AppResult, ErrorCode};

fn fare_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::FareNotFound, format!("Fare {id} not found"))
        .with_detail("fare_id", id)
}

fn map_write_error(err: RepoError, pair: ZonePair) -> AppError {
    match err {
        RepoError::Duplicate(_) => AppError::new(ErrorCode::FareAlreadyExists)
            .with_detail("source_id", pair.source)
            .with_detail("destination_id", pair.destination),
        other => other.into(),
    }
}

async fn ensure_zones_exist(pool: &SqlitePool, pair: ZonePair) -> AppResult<()> {
    for id in [pair.source, pair.destination] {
        if zone::find_by_id(pool, id).await?.is_none() {
            return Err(AppError::zone_not_found(id));
        }
    }
    Ok(())
}

async fn load_view(pool: &SqlitePool, id: i64) -> AppResult<FareView> {
    fare::find_view_by_id(pool, id)
        .await?
        .ok_or_else(|| fare_not_found(id))
}

/// GET /admin/api/fares
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<FareView>>> {
    let fares = fare::find_all_views(&state.pool).await?;
    Ok(Json(fares))
}

/// GET /admin/api/fares/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    ValidPath(id): ValidPath<i64>,
) -> AppResult<Json<FareView>> {
    Ok(Json(load_view(&state.pool, id).await?))
}

/// Validate, canonicalize and insert a fare
pub(super) async fn create_fare(pool: &SqlitePool, payload: FareCreate) -> AppResult<FareView> {
    let price_cents = validate_price(payload.price)?;
    let pair = ZonePair::canonical(payload.source_id, payload.destination_id);
    ensure_zones_exist(pool, pair).await?;

    let created = fare::create(pool, pair, price_cents)
        .await
        .map_err(|e| map_write_error(e, pair))?;
    tracing::info!(
        fare_id = created.id,
        source_id = pair.source,
        destination_id = pair.destination,
        price = %created.price,
        "Fare created"
    );

    load_view(pool, created.id).await
}

/// Merge the update into the stored fare; absent fields keep their value
pub(super) async fn update_fare(
    pool: &SqlitePool,
    id: i64,
    payload: FareUpdate,
) -> AppResult<FareView> {
    let existing = fare::find_by_id(pool, id)
        .await?
        .ok_or_else(|| fare_not_found(id))?;

    let price_cents = validate_price(payload.price.unwrap_or(existing.price))?;
    let pair = ZonePair::canonical(
        payload.source_id.unwrap_or(existing.source_id),
        payload.destination_id.unwrap_or(existing.destination_id),
    );
    ensure_zones_exist(pool, pair).await?;

    fare::update(pool, id, pair, price_cents)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => fare_not_found(id),
            other => map_write_error(other, pair),
        })?;
    tracing::info!(fare_id = id, "Fare updated");

    load_view(pool, id).await
}

/// POST /admin/api/fares
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<FareCreate>,
) -> AppResult<(StatusCode, Json<FareView>)> {
    let view = create_fare(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

/// PUT /admin/api/fares/{id}
pub async fn update(
    State(state): State<ServerState>,
    ValidPath(id): ValidPath<i64>,
    ValidJson(payload): ValidJson<FareUpdate>,
) -> AppResult<Json<FareView>> {
    Ok(Json(update_fare(&state.pool, id, payload).await?))
}

/// DELETE /admin/api/fares/{id}
pub async fn delete(
    State(state): State<ServerState>,
    ValidPath(id): ValidPath<i64>,
) -> AppResult<Json<bool>> {
    let deleted = fare::delete(&state.pool, id).await.map_err(|e| match e {
        RepoError::NotFound(_) => fare_not_found(id),
        other => other.into(),
    })?;
    tracing::info!(fare_id = id, "Fare deleted");
    Ok(Json(deleted))
}
