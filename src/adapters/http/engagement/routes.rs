//! HTTP routes for the engagement endpoints.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::adapters::http::middleware::{api_key_middleware, AuthState};

use super::handlers::{analyze_message, get_session_info, health, EngagementHandlers};

/// Creates the `/api` router: key-protected analysis/introspection plus the
/// open health endpoint.
pub fn engagement_routes(handlers: EngagementHandlers, validator: AuthState) -> Router {
    let protected = Router::new()
        .route("/analyze-message", post(analyze_message))
        .route("/session/:id", get(get_session_info))
        .layer(middleware::from_fn_with_state(validator, api_key_middleware))
        .with_state(handlers.clone());

    let open = Router::new()
        .route("/health", get(health))
        .with_state(handlers);

    protected.merge(open)
}
