//! Form handlers behind the admin page
//!
//! Each write goes through the same validation as the JSON API, then
//! redirects back to `/admin` (303) so a browser reload does not resubmit.

use axum::{extract::State, response::Redirect};
use shared::models::{FareCreate, FareUpdate, ZoneCreate};

use super::{fares, zones};
use crate::api::extract::{ValidForm, ValidPath};
use crate::core::ServerState;
use crate::utils::AppResult;

const OVERVIEW: &str = "/admin";

/// POST /admin/zones
pub async fn create_zone(
    State(state): State<ServerState>,
    ValidForm(form): ValidForm<ZoneCreate>,
) -> AppResult<Redirect> {
    zones::create_zone(&state.pool, &form.name).await?;
    Ok(Redirect::to(OVERVIEW))
}

/// POST /admin/zones/{id}
pub async fn rename_zone(
    State(state): State<ServerState>,
    ValidPath(id): ValidPath<i64>,
    ValidForm(form): ValidForm<ZoneCreate>,
) -> AppResult<Redirect> {
    zones::rename_zone(&state.pool, id, Some(&form.name)).await?;
    Ok(Redirect::to(OVERVIEW))
}

/// POST /admin/fares
pub async fn create_fare(
    State(state): State<ServerState>,
    ValidForm(form): ValidForm<FareCreate>,
) -> AppResult<Redirect> {
    fares::create_fare(&state.pool, form).await?;
    Ok(Redirect::to(OVERVIEW))
}

/// POST /admin/fares/{id}
///
/// The edit form always posts all three fields.
pub async fn update_fare(
    State(state): State<ServerState>,
    ValidPath(id): ValidPath<i64>,
    ValidForm(form): ValidForm<FareCreate>,
) -> AppResult<Redirect> {
    let update = FareUpdate {
        source_id: Some(form.source_id),
        destination_id: Some(form.destination_id),
        price: Some(form.price),
    };
    fares::update_fare(&state.pool, id, update).await?;
    Ok(Redirect::to(OVERVIEW))
}
