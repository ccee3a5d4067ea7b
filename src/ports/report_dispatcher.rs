//! Final-report dispatch port.
//!
//! Dispatch failure is a value, not an exception: callers receive a
//! [`DispatchError`] with an explicit reason tag and fold it into "session
//! not yet concluded" so a later turn can retry.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use crate::domain::engagement::EngagementSession;

/// Fallback note when no tactic summary was produced.
const DEFAULT_AGENT_NOTES: &str = "Scammer attempted fraud through social engineering.";

/// The legacy intelligence shape the evaluation endpoint accepts - five
/// categories only; newer categories stay internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportedIntelligence {
    pub bank_accounts: Vec<String>,
    pub upi_ids: Vec<String>,
    pub phishing_links: Vec<String>,
    pub phone_numbers: Vec<String>,
    pub suspicious_keywords: Vec<String>,
}

/// The one-shot summarized report sent when an engagement concludes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalReport {
    pub session_id: String,
    pub scam_detected: bool,
    pub total_messages_exchanged: usize,
    pub extracted_intelligence: ReportedIntelligence,
    pub agent_notes: String,
}

impl FinalReport {
    /// Builds the report from a concluded-or-concluding session.
    pub fn from_session(session: &EngagementSession, agent_notes: String) -> Self {
        let intelligence = session.intelligence();
        let agent_notes = if agent_notes.is_empty() {
            DEFAULT_AGENT_NOTES.to_string()
        } else {
            agent_notes
        };

        Self {
            session_id: session.id().to_string(),
            scam_detected: session.scam_detected(),
            total_messages_exchanged: session.message_count(),
            extracted_intelligence: ReportedIntelligence {
                bank_accounts: intelligence.bank_accounts.iter().cloned().collect(),
                upi_ids: intelligence.upi_ids.iter().cloned().collect(),
                phishing_links: intelligence.phishing_links.iter().cloned().collect(),
                phone_numbers: intelligence.phone_numbers.iter().cloned().collect(),
                suspicious_keywords: intelligence.suspicious_keywords.iter().cloned().collect(),
            },
            agent_notes,
        }
    }
}

/// Why a dispatch attempt failed. All variants mean the same thing to
/// session state - "not yet concluded" - but are distinguished for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("callback timed out after {0:?}")]
    Timeout(Duration),

    #[error("callback connection failed: {0}")]
    Connection(String),

    #[error("callback returned status {0}")]
    Status(u16),
}

/// Sends the final summarized report to the evaluation sink.
///
/// # Contract
///
/// Implementations must:
/// - Enforce a bounded timeout on the outbound call
/// - Treat any non-success HTTP status as `DispatchError::Status`
/// - Never panic on transport failures
#[async_trait]
pub trait ReportDispatcher: Send + Sync {
    /// Attempts one dispatch of the final report.
    async fn dispatch(&self, report: &FinalReport) -> Result<(), DispatchError>;
}
