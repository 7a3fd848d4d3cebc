use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderValue, StatusCode};
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api;
use crate::core::{Config, ServerState};

pub mod logging;

/// Custom request ID generator
#[derive(Clone, Default)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Read API
        .merge(api::config::router())
        .merge(api::fares::router())
        // Admin surface
        .merge(api::admin::router())
        // Health API
        .merge(api::health::router())
}

/// Build a fully configured application with all middleware
///
/// Used by both the HTTP server and the in-process tests
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    with_middleware(build_router(), &state.config)
}

fn with_middleware(router: Router<ServerState>, config: &Config) -> Router<ServerState> {
    router
        .layer(
            ServiceBuilder::new()
                // Request ID - generate unique ID for each request
                .layer(SetRequestIdLayer::x_request_id(XRequestId))
                // Propagate request ID to response
                .layer(PropagateRequestIdLayer::x_request_id())
                // Trace - request spans
                .layer(TraceLayer::new_for_http())
                // Request logging
                .layer(axum_middleware::from_fn(logging::logging_middleware))
                // Timeout - answers 408 once the deadline passes
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    config.request_timeout(),
                )),
        )
        // CORS - outermost so preflights never reach the handlers
        .layer(cors_layer(config))
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origin = if config.cors_origins.iter().any(|o| o == "*") {
        AllowOrigin::mirror_request()
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!("Ignoring invalid CORS origin {o:?}: {e}");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    // Credentials rule out wildcards, so methods and headers are mirrored
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
