//! Fare API Handlers

use axum::{Json, extract::State};
use shared::models::{DailyFareResponse, DailyJourneysRequest, FareResponse, Journey};

use crate::api::extract::{ValidJson, ValidQuery};
use crate::core::ServerState;
use crate::db::repository::RepoError;
use crate::pricing;
use crate::utils::AppResult;

/// GET /fare?from_zone=&to_zone= - fare of one journey
pub async fn get_fare(
    State(state): State<ServerState>,
    ValidQuery(journey): ValidQuery<Journey>,
) -> AppResult<Json<FareResponse>> {
    let fare = pricing::resolve_fare(&state.pool, journey.from_zone, journey.to_zone).await?;
    Ok(Json(FareResponse { fare }))
}

/// POST /fares/daily - price a day of journeys
///
/// All lookups share one read transaction, so the total is computed against
/// a single snapshot. The transaction rolls back when dropped.
pub async fn daily_fares(
    State(state): State<ServerState>,
    ValidJson(request): ValidJson<DailyJourneysRequest>,
) -> AppResult<Json<DailyFareResponse>> {
    let mut tx = state.pool.begin().await.map_err(RepoError::from)?;
    let result = pricing::daily_total(&mut *tx, &request.journeys).await?;
    Ok(Json(result))
}
