//! HTTP route handlers for the JSON API.
//!
//! Routes are organized by concern: content routes serve the greeting and the
//! random pun/fact draws, status routes serve health and version. Content and
//! health responses carry `no-store` so an intermediary never replays a stale
//! random draw or probe result; the version response may be cached briefly.
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod content;
pub mod status;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_NO_STORE, CACHE_CONTROL_VERSION};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Content - never cached, every response is a fresh draw
    let content_routes = Router::new()
        .route("/", get(content::greet))
        .route("/pun", get(content::pun))
        .route("/fact", get(content::fact))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new()
        .route("/health", get(status::health))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    // Version - stable for the process lifetime, short public cache
    let version_routes = Router::new()
        .route("/version", get(status::version))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_VERSION),
        ));

    Router::new()
        .merge(content_routes)
        .merge(health_routes)
        .merge(version_routes)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
