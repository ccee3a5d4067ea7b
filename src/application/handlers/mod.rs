//! Per-request orchestration handlers.

mod analyze_message;
mod get_session;

pub use analyze_message::{
    AnalyzeMessageCommand, AnalyzeMessageHandler, AnalyzeOutcome, EngagementLimits,
};
pub use get_session::{GetSessionHandler, SessionView};
