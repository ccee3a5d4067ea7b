//! Conversation message record.

use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The suspected scammer on the other end of the conversation.
    Scammer,
    /// The honeypot's own persona (presented to the scammer as a victim).
    User,
}

impl Sender {
    pub fn is_scammer(&self) -> bool {
        matches!(self, Sender::Scammer)
    }
}

/// A single message in a conversation. Immutable once recorded.
///
/// The wire format carries the timestamp as epoch milliseconds under the
/// `timestamp` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
    #[serde(rename = "timestamp")]
    pub timestamp_millis: i64,
}

impl Message {
    pub fn new(sender: Sender, text: impl Into<String>, timestamp_millis: i64) -> Self {
        Self {
            sender,
            text: text.into(),
            timestamp_millis,
        }
    }
}
