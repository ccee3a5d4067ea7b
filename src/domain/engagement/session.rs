//! Engagement session aggregate.
//!
//! One session tracks one conversation with a suspected scammer. All state
//! is volatile - there is no persistence across process restarts.
//!
//! # Invariants
//!
//! - `messages` and `agent_replies` are append-only.
//! - `intelligence` only grows (monotone set union).
//! - `scam_score_ceiling` never decreases.
//! - `scam_detected` and `concluded` transition false -> true exactly once.
//! - `detection_snapshot` is frozen on the first detection and never
//!   overwritten.

use serde::Serialize;

use crate::domain::engagement::{DetectionVerdict, IntelligenceBundle, Message};
use crate::domain::foundation::Timestamp;

/// Lifecycle state of an engagement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementState {
    /// No message has crossed the detection threshold yet.
    Fresh,
    /// Scam confirmed; the honeypot replies every turn.
    Detected,
    /// Final report delivered; no further dispatch for this session.
    Concluded,
}

/// One conversation's accumulated state.
#[derive(Debug, Clone)]
pub struct EngagementSession {
    id: String,
    messages: Vec<Message>,
    intelligence: IntelligenceBundle,
    agent_replies: Vec<String>,
    scam_detected: bool,
    detection_snapshot: Option<DetectionVerdict>,
    scam_score_ceiling: u32,
    concluded: bool,
    created_at: Timestamp,
    last_activity_at: Timestamp,
}

impl EngagementSession {
    /// Creates an empty session for a previously-unseen identifier.
    pub fn new(id: impl Into<String>) -> Self {
        let now = Timestamp::now();
        Self {
            id: id.into(),
            messages: Vec::new(),
            intelligence: IntelligenceBundle::new(),
            agent_replies: Vec::new(),
            scam_detected: false,
            detection_snapshot: None,
            scam_score_ceiling: 0,
            concluded: false,
            created_at: now,
            last_activity_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutators (invariant-enforcing)
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends an inbound message and refreshes the activity timestamp.
    pub fn record_message(&mut self, message: Message) {
        self.messages.push(message);
        self.touch();
    }

    /// Raises the score ceiling to the maximum seen so far.
    pub fn observe_score(&mut self, score: u32) {
        self.scam_score_ceiling = self.scam_score_ceiling.max(score);
    }

    /// Marks the session as a confirmed scam and freezes the verdict.
    ///
    /// Only the first call has any effect; the snapshot of the message that
    /// crossed the threshold is never overwritten.
    pub fn mark_detected(&mut self, verdict: DetectionVerdict) {
        if self.scam_detected {
            return;
        }
        self.scam_detected = true;
        self.detection_snapshot = Some(verdict);
    }

    /// Merges newly extracted intelligence into the accumulated bundle.
    pub fn merge_intelligence(&mut self, extracted: &IntelligenceBundle) {
        self.intelligence.merge(extracted);
    }

    /// Appends one of the honeypot's own utterances.
    pub fn record_reply(&mut self, reply: impl Into<String>) {
        self.agent_replies.push(reply.into());
    }

    /// Marks the engagement concluded. One-way; gates dispatch to
    /// at-most-once success.
    pub fn conclude(&mut self) {
        self.concluded = true;
    }

    /// Refreshes the activity timestamp.
    pub fn touch(&mut self) {
        self.last_activity_at = Timestamp::now();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn intelligence(&self) -> &IntelligenceBundle {
        &self.intelligence
    }

    pub fn agent_replies(&self) -> &[String] {
        &self.agent_replies
    }

    pub fn scam_detected(&self) -> bool {
        self.scam_detected
    }

    pub fn detection_snapshot(&self) -> Option<&DetectionVerdict> {
        self.detection_snapshot.as_ref()
    }

    pub fn scam_score_ceiling(&self) -> u32 {
        self.scam_score_ceiling
    }

    pub fn concluded(&self) -> bool {
        self.concluded
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn last_activity_at(&self) -> &Timestamp {
        &self.last_activity_at
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngagementState {
        if self.concluded {
            EngagementState::Concluded
        } else if self.scam_detected {
            EngagementState::Detected
        } else {
            EngagementState::Fresh
        }
    }

    /// Whether the engagement should keep going, given the hard message cap.
    pub fn should_continue(&self, max_messages: usize) -> bool {
        self.message_count() < max_messages
    }

    #[cfg(test)]
    pub(crate) fn backdate_activity(&mut self, to: Timestamp) {
        self.last_activity_at = to;
    }
}
