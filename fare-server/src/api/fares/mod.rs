//! Fare lookup API

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/fare", get(handler::get_fare))
        .route("/fares/daily", post(handler::daily_fares))
}
