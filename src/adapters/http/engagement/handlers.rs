//! HTTP handlers for the engagement endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::{
    AnalyzeMessageCommand, AnalyzeMessageHandler, GetSessionHandler,
};
use crate::application::SessionRegistry;
use crate::domain::engagement::EngagementError;

use super::dto::{
    AnalyzeMessageRequest, AnalyzeMessageResponse, ErrorResponse, HealthResponse,
    SessionInfoResponse,
};
use crate::adapters::http::{SERVICE_NAME, SERVICE_VERSION};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct EngagementHandlers {
    analyze_handler: Arc<AnalyzeMessageHandler>,
    get_session_handler: Arc<GetSessionHandler>,
    registry: Arc<SessionRegistry>,
}

impl EngagementHandlers {
    pub fn new(
        analyze_handler: Arc<AnalyzeMessageHandler>,
        get_session_handler: Arc<GetSessionHandler>,
        registry: Arc<SessionRegistry>,
    ) -> Self {
        Self {
            analyze_handler,
            get_session_handler,
            registry,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/analyze-message - run one message through the engagement
/// state machine.
pub async fn analyze_message(
    State(handlers): State<EngagementHandlers>,
    Json(request): Json<AnalyzeMessageRequest>,
) -> Response {
    if request.session_id.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("sessionId must not be empty")),
        )
            .into_response();
    }
    if request.message.text.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("message text must not be empty")),
        )
            .into_response();
    }

    let cmd = AnalyzeMessageCommand {
        session_id: request.session_id,
        message: request.message,
        conversation_history: request.conversation_history,
    };

    let outcome = handlers.analyze_handler.handle(cmd).await;
    (StatusCode::OK, Json(AnalyzeMessageResponse::from(outcome))).into_response()
}

/// GET /api/session/:id - current session snapshot.
pub async fn get_session_info(
    State(handlers): State<EngagementHandlers>,
    Path(session_id): Path<String>,
) -> Response {
    match handlers.get_session_handler.handle(&session_id).await {
        Ok(view) => {
            let response: SessionInfoResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_engagement_error(e),
    }
}

/// GET /api/health - liveness, service identity, live session count.
pub async fn health(State(handlers): State<EngagementHandlers>) -> Response {
    let sessions = handlers.registry.len().await;
    let response = HealthResponse {
        status: "running",
        service: SERVICE_NAME,
        version: SERVICE_VERSION,
        sessions,
    };
    (StatusCode::OK, Json(response)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_engagement_error(error: EngagementError) -> Response {
    match error {
        EngagementError::SessionNotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Session", &id)),
        )
            .into_response(),
    }
}
