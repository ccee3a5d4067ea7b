//! API key middleware for axum.
//!
//! Every protected route passes through [`api_key_middleware`], which checks
//! the `x-api-key` header through the [`ApiKeyValidator`] port before any
//! handler runs. A rejected request therefore has zero side effects on
//! session state.
//!
//! ```text
//! Request → api_key_middleware → validator.validate(key) → handler
//!                 │
//!                 ├── no header  → 401
//!                 └── bad key    → 403
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::ports::ApiKeyValidator;

/// Middleware state - the validator behind the authorization check.
pub type AuthState = Arc<dyn ApiKeyValidator>;

/// Validates the `x-api-key` header before the request reaches a handler.
///
/// - Missing header: 401 Unauthorized
/// - Key rejected by the validator: 403 Forbidden
pub async fn api_key_middleware(
    State(validator): State<AuthState>,
    request: Request,
    next: Next,
) -> Response {
    let presented = request
        .headers()
        .get("x-api-key")
        .and_then(|value| value.to_str().ok());

    match presented {
        None => (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "error": "Missing x-api-key header",
                "code": "UNAUTHENTICATED"
            })),
        )
            .into_response(),
        Some(key) => match validator.validate(key).await {
            Ok(()) => next.run(request).await,
            Err(_) => {
                tracing::warn!("rejected request with invalid API key");
                (
                    StatusCode::FORBIDDEN,
                    Json(serde_json::json!({
                        "error": "Invalid API key",
                        "code": "FORBIDDEN"
                    })),
                )
                    .into_response()
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::auth::MockKeyValidator;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    fn protected_app(validator: AuthState) -> Router {
        Router::new()
            .route("/protected", get(|| async { "ok" }))
            .layer(axum::middleware::from_fn_with_state(
                validator,
                api_key_middleware,
            ))
    }

    fn validator() -> AuthState {
        Arc::new(MockKeyValidator::new().accepting("test-key"))
    }

    #[tokio::test]
    async fn missing_key_returns_401() {
        let app = protected_app(validator());
        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/protected")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn invalid_key_returns_403() {
        let app = protected_app(validator());
        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/protected")
                    .header("x-api-key", "wrong-key")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn valid_key_passes_through() {
        let app = protected_app(validator());
        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/protected")
                    .header("x-api-key", "test-key")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
