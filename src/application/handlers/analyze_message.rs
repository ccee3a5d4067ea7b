//! AnalyzeMessageHandler - orchestrates one inbound message through the
//! engagement state machine.
//!
//! Per message, in order: resolve the session, record the message, score,
//! bail out while nothing has crossed the threshold, freeze the detection
//! snapshot on the first crossing, extract and merge intelligence, pick a
//! reply, and - once the engagement stops continuing - attempt the final
//! report dispatch. A failed dispatch is logged and retried on a later turn;
//! it never fails the current turn.

use std::sync::Arc;

use crate::application::SessionRegistry;
use crate::domain::detection::{IntelligenceExtractor, ScamScorer};
use crate::domain::engagement::{
    generate_agent_notes, DetectionVerdict, EngagementSession, Message, ReplyStrategist,
};
use crate::ports::{FinalReport, ReportDispatcher};

/// Command carrying one inbound message plus caller-supplied history.
#[derive(Debug, Clone)]
pub struct AnalyzeMessageCommand {
    pub session_id: String,
    pub message: Message,
    pub conversation_history: Vec<Message>,
}

/// Result of one analyze turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeOutcome {
    /// The message did not look like a scam and no engagement is active;
    /// the honeypot stays silent.
    Ignored,
    /// The engagement is active; the honeypot replied.
    Engaged { reply: String },
}

/// Engagement lifecycle limits, taken from [`DetectionConfig`].
///
/// [`DetectionConfig`]: crate::config::DetectionConfig
#[derive(Debug, Clone, Copy)]
pub struct EngagementLimits {
    /// Hard cap on messages per session before conclusion.
    pub max_messages_per_session: usize,
    /// Minimum messages before the callback may fire. Loaded but not
    /// consulted by the continuation decision.
    pub min_messages_before_callback: usize,
}

impl From<&crate::config::DetectionConfig> for EngagementLimits {
    fn from(config: &crate::config::DetectionConfig) -> Self {
        Self {
            max_messages_per_session: config.max_messages_per_session,
            min_messages_before_callback: config.min_messages_before_callback,
        }
    }
}

/// Handler for analyzing one inbound message.
pub struct AnalyzeMessageHandler {
    registry: Arc<SessionRegistry>,
    scorer: ScamScorer,
    extractor: IntelligenceExtractor,
    strategist: ReplyStrategist,
    dispatcher: Arc<dyn ReportDispatcher>,
    limits: EngagementLimits,
}

impl AnalyzeMessageHandler {
    pub fn new(
        registry: Arc<SessionRegistry>,
        scorer: ScamScorer,
        dispatcher: Arc<dyn ReportDispatcher>,
        limits: EngagementLimits,
    ) -> Self {
        Self {
            registry,
            scorer,
            extractor: IntelligenceExtractor::new(),
            strategist: ReplyStrategist::new(),
            dispatcher,
            limits,
        }
    }

    pub async fn handle(&self, cmd: AnalyzeMessageCommand) -> AnalyzeOutcome {
        // Opportunistic eviction; there is no background scheduler.
        self.registry.sweep_idle().await;

        let handle = self.registry.get_or_create(&cmd.session_id).await;
        let mut session = handle.lock().await;

        session.record_message(cmd.message.clone());

        let outcome = self.scorer.score(&cmd.message.text, &cmd.conversation_history);
        session.observe_score(outcome.score);

        if !outcome.is_scam && !session.scam_detected() {
            tracing::info!(session_id = %cmd.session_id, score = outcome.score, "non-scam message ignored");
            return AnalyzeOutcome::Ignored;
        }

        if !session.scam_detected() {
            tracing::warn!(
                session_id = %cmd.session_id,
                score = outcome.score,
                reasons = ?outcome.reasons,
                "scam detected"
            );
            let message_index = session.message_count();
            session.mark_detected(DetectionVerdict {
                is_scam: true,
                score: outcome.score,
                reasons: outcome.reasons,
                scam_types: self.scorer.classify(&cmd.message.text),
                message_index,
            });
        }

        let mut full_conversation = cmd.conversation_history.clone();
        full_conversation.push(cmd.message.clone());
        let extracted = self.extractor.extract(&cmd.message.text, &full_conversation);
        session.merge_intelligence(&extracted);

        let reply = self
            .strategist
            .select_reply(&cmd.message.text, session.agent_replies());
        session.record_reply(reply);

        if !session.should_continue(self.limits.max_messages_per_session) && !session.concluded() {
            self.try_conclude(&mut session).await;
        }

        AnalyzeOutcome::Engaged {
            reply: reply.to_string(),
        }
    }

    /// Attempts the one-shot final report. Success flips `concluded`;
    /// failure leaves the session open so a later turn retries.
    async fn try_conclude(&self, session: &mut EngagementSession) {
        let notes = generate_agent_notes(session.messages(), session.intelligence());
        let report = FinalReport::from_session(session, notes);

        tracing::info!(session_id = %session.id(), "concluding engagement");
        match self.dispatcher.dispatch(&report).await {
            Ok(()) => {
                session.conclude();
                tracing::info!(session_id = %session.id(), "final report delivered");
            }
            Err(err) => {
                tracing::warn!(
                    session_id = %session.id(),
                    %err,
                    "final report dispatch failed; will retry on a later turn"
                );
            }
        }
    }
}
