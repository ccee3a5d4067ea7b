//! Engagement domain errors.

use thiserror::Error;

/// Errors surfaced by engagement operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngagementError {
    /// No live session exists for the identifier (never created, or evicted
    /// by the idle sweep).
    #[error("session not found: {0}")]
    SessionNotFound(String),
}
