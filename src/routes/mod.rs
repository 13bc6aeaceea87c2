//! HTTP route handlers.
//!
//! Routes are grouped by how fresh their content must be, with per-group
//! Cache-Control headers. Status responses are never cached; the constant
//! capabilities document may be.
//!
//! Request tracing is enabled via middleware that assigns each request a
//! unique ID, so all logs emitted for one request can be correlated.

pub mod health;
pub mod process_data;
pub mod status;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_CAPABILITIES, CACHE_CONTROL_STATUS};
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Status - live host facts and timestamp
    let status_routes = Router::new().route("/", get(status::status)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_STATUS),
        ),
    );

    // Capabilities - constant document
    let capability_routes = Router::new()
        .route("/api/process-data", get(process_data::capabilities))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_CAPABILITIES),
        ));

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health));

    Router::new()
        .merge(status_routes)
        .merge(capability_routes)
        .merge(health_routes)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
