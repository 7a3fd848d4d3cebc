use axum::{Json, extract::State};
use shared::models::ConfigResponse;

use crate::core::ServerState;
use crate::db::repository::zone;
use crate::utils::AppResult;

/// GET /config - zone ids available for journey selection, ascending
pub async fn get_config(State(state): State<ServerState>) -> AppResult<Json<ConfigResponse>> {
    let available_zones = zone::list_ids(&state.pool).await?;
    Ok(Json(ConfigResponse { available_zones }))
}
