//! HTTP adapters - REST API implementations.
//!
//! All endpoints live under `/api`. `api_router` builds the bare routes;
//! `with_middleware` adds tracing, timeouts, and CORS for serving.

pub mod schedule;

use std::time::Duration;

use axum::{http::HeaderValue, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use schedule::{schedule_routes, ErrorResponse, ScheduleHandlers};

/// Mounts every endpoint under `/api`.
pub fn api_router(handlers: ScheduleHandlers) -> Router {
    let api = schedule_routes(handlers).route("/health", get(health));
    Router::new().nest("/api", api)
}

/// Wraps a router with request tracing, a request timeout, and CORS.
///
/// CORS is only enabled when `cors_origins` names at least one valid origin.
pub fn with_middleware(router: Router, request_timeout: Duration, cors_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let router = if origins.is_empty() {
        router
    } else {
        router.layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any),
        )
    };

    router
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}

/// GET /api/health - Liveness probe
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
