//! HTTP DTOs for the engagement endpoints.
//!
//! These types pin the wire schema (camelCase field names, epoch-millis
//! timestamps) independently of the domain types.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{AnalyzeOutcome, SessionView};
use crate::domain::engagement::{DetectionVerdict, EngagementState, IntelligenceBundle, Message};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request body for POST /api/analyze-message.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeMessageRequest {
    pub session_id: String,
    pub message: Message,
    #[serde(default)]
    pub conversation_history: Vec<Message>,
    /// Optional channel/language/locale hints; accepted, not acted upon.
    #[serde(default)]
    pub metadata: Option<ConversationMetadata>,
}

/// Optional metadata about the conversation.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationMetadata {
    pub channel: Option<String>,
    pub language: Option<String>,
    pub locale: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Turn status on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyStatus {
    Success,
    Ignored,
}

/// Response body for POST /api/analyze-message.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeMessageResponse {
    pub status: ReplyStatus,
    pub reply: Option<String>,
}

impl From<AnalyzeOutcome> for AnalyzeMessageResponse {
    fn from(outcome: AnalyzeOutcome) -> Self {
        match outcome {
            AnalyzeOutcome::Ignored => Self {
                status: ReplyStatus::Ignored,
                reply: None,
            },
            AnalyzeOutcome::Engaged { reply } => Self {
                status: ReplyStatus::Success,
                reply: Some(reply),
            },
        }
    }
}

/// Response body for GET /api/session/:id.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfoResponse {
    pub session_id: String,
    pub state: EngagementState,
    pub message_count: usize,
    pub scam_detected: bool,
    pub scam_score_ceiling: u32,
    pub detection_details: Option<DetectionVerdict>,
    pub extracted_intelligence: IntelligenceBundle,
    pub engagement_concluded: bool,
    pub created_at: String,
    pub last_activity: String,
}

impl From<SessionView> for SessionInfoResponse {
    fn from(view: SessionView) -> Self {
        Self {
            session_id: view.session_id,
            state: view.state,
            message_count: view.message_count,
            scam_detected: view.scam_detected,
            scam_score_ceiling: view.scam_score_ceiling,
            detection_details: view.detection_snapshot,
            extracted_intelligence: view.extracted_intelligence,
            engagement_concluded: view.engagement_concluded,
            created_at: view.created_at.to_rfc3339(),
            last_activity: view.last_activity_at.to_rfc3339(),
        }
    }
}

/// Response body for GET /api/health.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub sessions: usize,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::engagement::Sender;
    use crate::domain::foundation::Timestamp;

    #[test]
    fn analyze_request_deserializes_from_wire_format() {
        let json = r#"{
            "sessionId": "wa-abc",
            "message": {"sender": "scammer", "text": "share otp", "timestamp": 1700000000000},
            "conversationHistory": [
                {"sender": "user", "text": "who is this?", "timestamp": 1699999999000}
            ],
            "metadata": {"channel": "SMS", "language": "English", "locale": "IN"}
        }"#;

        let request: AnalyzeMessageRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.session_id, "wa-abc");
        assert_eq!(request.message.sender, Sender::Scammer);
        assert_eq!(request.conversation_history.len(), 1);
        assert_eq!(request.metadata.unwrap().channel.as_deref(), Some("SMS"));
    }

    #[test]
    fn analyze_request_defaults_optional_fields() {
        let json = r#"{
            "sessionId": "wa-abc",
            "message": {"sender": "scammer", "text": "hello", "timestamp": 1}
        }"#;

        let request: AnalyzeMessageRequest = serde_json::from_str(json).unwrap();
        assert!(request.conversation_history.is_empty());
        assert!(request.metadata.is_none());
    }

    #[test]
    fn ignored_outcome_serializes_with_null_reply() {
        let response = AnalyzeMessageResponse::from(AnalyzeOutcome::Ignored);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "ignored");
        assert!(json["reply"].is_null());
    }

    #[test]
    fn engaged_outcome_serializes_with_reply() {
        let response = AnalyzeMessageResponse::from(AnalyzeOutcome::Engaged {
            reply: "Why is this so urgent?".to_string(),
        });
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["reply"], "Why is this so urgent?");
    }

    #[test]
    fn session_info_converts_timestamps_to_rfc3339() {
        let view = SessionView {
            session_id: "wa-1".to_string(),
            state: EngagementState::Fresh,
            message_count: 0,
            scam_detected: false,
            scam_score_ceiling: 0,
            detection_snapshot: None,
            extracted_intelligence: IntelligenceBundle::new(),
            engagement_concluded: false,
            created_at: Timestamp::from_unix_millis(1_700_000_000_000),
            last_activity_at: Timestamp::from_unix_millis(1_700_000_060_000),
        };

        let response: SessionInfoResponse = view.into();
        assert!(response.created_at.starts_with("2023-11-14"));
        assert!(response.last_activity.starts_with("2023-11-14"));
    }

    #[test]
    fn error_response_constructors_set_codes() {
        assert_eq!(ErrorResponse::bad_request("x").code, "BAD_REQUEST");
        assert_eq!(ErrorResponse::not_found("Session", "wa-1").code, "NOT_FOUND");
        assert_eq!(ErrorResponse::internal("x").code, "INTERNAL_ERROR");
    }
}
