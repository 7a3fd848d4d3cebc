//! Admin surface
//!
//! JSON CRUD for zones and fares under `/admin/api`, plus an HTML page at
//! `/admin` whose forms post to `/admin/zones` and `/admin/fares`.

mod fares;
mod forms;
mod page;
mod zones;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/admin", get(page::overview))
        .route("/admin/zones", post(forms::create_zone))
        .route("/admin/zones/{id}", post(forms::rename_zone))
        .route("/admin/fares", post(forms::create_fare))
        .route("/admin/fares/{id}", post(forms::update_fare))
        .nest("/admin/api/zones", zone_routes())
        .nest("/admin/api/fares", fare_routes())
}

fn zone_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(zones::list).post(zones::create))
        .route(
            "/{id}",
            get(zones::get_by_id)
                .put(zones::update)
                .delete(zones::delete),
        )
}

fn fare_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(fares::list).post(fares::create))
        .route(
            "/{id}",
            get(fares::get_by_id)
                .put(fares::update)
                .delete(fares::delete),
        )
}
