//! GetSessionHandler - read-only session introspection.

use std::sync::Arc;

use crate::application::SessionRegistry;
use crate::domain::engagement::{
    DetectionVerdict, EngagementError, EngagementState, IntelligenceBundle,
};
use crate::domain::foundation::Timestamp;

/// Point-in-time view of one session's state.
#[derive(Debug, Clone)]
pub struct SessionView {
    pub session_id: String,
    pub state: EngagementState,
    pub message_count: usize,
    pub scam_detected: bool,
    pub scam_score_ceiling: u32,
    pub detection_snapshot: Option<DetectionVerdict>,
    pub extracted_intelligence: IntelligenceBundle,
    pub engagement_concluded: bool,
    pub created_at: Timestamp,
    pub last_activity_at: Timestamp,
}

/// Handler answering session-introspection queries.
pub struct GetSessionHandler {
    registry: Arc<SessionRegistry>,
}

impl GetSessionHandler {
    pub fn new(registry: Arc<SessionRegistry>) -> Self {
        Self { registry }
    }

    /// Returns the current snapshot of a live session.
    ///
    /// # Errors
    ///
    /// `SessionNotFound` when the identifier was never seen or the session
    /// was evicted by the idle sweep.
    pub async fn handle(&self, session_id: &str) -> Result<SessionView, EngagementError> {
        let handle = self
            .registry
            .get(session_id)
            .await
            .ok_or_else(|| EngagementError::SessionNotFound(session_id.to_string()))?;

        let session = handle.lock().await;
        Ok(SessionView {
            session_id: session.id().to_string(),
            state: session.state(),
            message_count: session.message_count(),
            scam_detected: session.scam_detected(),
            scam_score_ceiling: session.scam_score_ceiling(),
            detection_snapshot: session.detection_snapshot().cloned(),
            extracted_intelligence: session.intelligence().clone(),
            engagement_concluded: session.concluded(),
            created_at: *session.created_at(),
            last_activity_at: *session.last_activity_at(),
        })
    }
}
