//! Engagement domain - conversation state, accumulated intelligence,
//! and the honeypot's reply behavior.

mod errors;
mod intelligence;
mod message;
mod notes;
mod session;
mod strategist;
mod verdict;

pub use errors::EngagementError;
pub use intelligence::{IntelligenceBundle, IntelligenceCategory};
pub use message::{Message, Sender};
pub use notes::generate_agent_notes;
pub use session::{EngagementSession, EngagementState};
pub use strategist::{ReplyCategory, ReplyStrategist};
pub use verdict::{DetectionVerdict, ScamSignal, ScamType};
