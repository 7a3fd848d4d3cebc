//! Zone admin handlers

use axum::{Json, extract::State, http::StatusCode};
use shared::models::{Zone, ZoneCreate, ZoneUpdate};
use sqlx::SqlitePool;

use crate::api::extract::{ValidJson, ValidPath};
use crate::core::ServerState;
use crate::db::repository::{RepoError, zone};
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};

fn map_write_error(err: RepoError, id: Option<i64>, name: &str) -> AppError {
    match (err, id) {
        (RepoError::Duplicate(_), _) => AppError::with_message(
            ErrorCode::ZoneNameExists,
            format!("Zone name '{name}' already exists"),
        )
        .with_detail("name", name),
        (RepoError::NotFound(_), Some(id)) => AppError::zone_not_found(id),
        (other, _) => other.into(),
    }
}

/// GET /admin/api/zones
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Zone>>> {
    let zones = zone::find_all(&state.pool).await?;
    Ok(Json(zones))
}

/// GET /admin/api/zones/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    ValidPath(id): ValidPath<i64>,
) -> AppResult<Json<Zone>> {
    let zone = zone::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::zone_not_found(id))?;
    Ok(Json(zone))
}

/// Validate and insert a zone; shared by the JSON API and the admin form
pub(super) async fn create_zone(pool: &SqlitePool, raw_name: &str) -> AppResult<Zone> {
    let name = validate_required_text(raw_name, "name", MAX_NAME_LEN)?;
    let zone = zone::create(pool, name)
        .await
        .map_err(|e| map_write_error(e, None, name))?;
    tracing::info!(zone_id = zone.id, name = %zone.name, "Zone created");
    Ok(zone)
}

pub(super) async fn rename_zone(
    pool: &SqlitePool,
    id: i64,
    raw_name: Option<&str>,
) -> AppResult<Zone> {
    let name = raw_name
        .map(|n| validate_required_text(n, "name", MAX_NAME_LEN))
        .transpose()?;
    let zone = zone::update(pool, id, name)
        .await
        .map_err(|e| map_write_error(e, Some(id), name.unwrap_or_default()))?;
    tracing::info!(zone_id = zone.id, name = %zone.name, "Zone updated");
    Ok(zone)
}

/// POST /admin/api/zones
pub async fn create(
    State(state): State<ServerState>,
    ValidJson(payload): ValidJson<ZoneCreate>,
) -> AppResult<(StatusCode, Json<Zone>)> {
    let zone = create_zone(&state.pool, &payload.name).await?;
    Ok((StatusCode::CREATED, Json(zone)))
}

/// PUT /admin/api/zones/{id}
pub async fn update(
    State(state): State<ServerState>,
    ValidPath(id): ValidPath<i64>,
    ValidJson(payload): ValidJson<ZoneUpdate>,
) -> AppResult<Json<Zone>> {
    let zone = rename_zone(&state.pool, id, payload.name.as_deref()).await?;
    Ok(Json(zone))
}

/// DELETE /admin/api/zones/{id}
pub async fn delete(
    State(state): State<ServerState>,
    ValidPath(id): ValidPath<i64>,
) -> AppResult<Json<bool>> {
    let deleted = zone::delete(&state.pool, id).await.map_err(|e| match e {
        RepoError::NotFound(_) => AppError::zone_not_found(id),
        RepoError::InUse(msg) => {
            AppError::with_message(ErrorCode::ZoneInUse, msg).with_detail("zone_id", id)
        }
        other => other.into(),
    })?;
    tracing::info!(zone_id = id, "Zone deleted");
    Ok(Json(deleted))
}
