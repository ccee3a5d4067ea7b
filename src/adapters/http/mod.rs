//! HTTP adapters - axum routes, handlers, DTOs, and middleware.

pub mod engagement;
pub mod middleware;

use axum::routing::get;
use axum::{Json, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use self::engagement::EngagementHandlers;
pub use self::middleware::AuthState;

use self::engagement::engagement_routes;

/// Service display name used by the identity endpoints.
pub const SERVICE_NAME: &str = "Scamlure Honeypot API";
/// Crate version, surfaced by the identity endpoints.
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Assembles the full application router: identity root, `/api` endpoints,
/// request tracing, permissive CORS, and a panic guard that turns any
/// unclassified fault into a generic 500 instead of tearing down the
/// connection.
pub fn app_router(handlers: EngagementHandlers, validator: AuthState) -> Router {
    Router::new()
        .route("/", get(service_info))
        .nest("/api", engagement_routes(handlers, validator))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(CatchPanicLayer::new())
}

/// GET / - service identity and endpoint directory. No authentication.
async fn service_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "running",
        "service": SERVICE_NAME,
        "version": SERVICE_VERSION,
        "endpoints": {
            "health": "/api/health",
            "analyze": "/api/analyze-message",
            "session": "/api/session/{session_id}"
        },
        "authentication": "Requires x-api-key header"
    }))
}
