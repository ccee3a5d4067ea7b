//! Detection verdict types - the reason tags, coarse scam classification,
//! and the frozen snapshot recorded when a session first crosses the
//! detection threshold.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Reason tag contributed by one scoring signal family.
///
/// Serialized as the legacy human-readable strings the evaluation side
/// already understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScamSignal {
    #[serde(rename = "financial context")]
    FinancialContext,
    #[serde(rename = "action requested")]
    ActionRequested,
    #[serde(rename = "sensitive info request")]
    SensitiveInfoRequest,
    #[serde(rename = "urgency/threat tactics")]
    UrgencyThreatTactics,
    #[serde(rename = "threat language")]
    ThreatLanguage,
    #[serde(rename = "external link detected")]
    ExternalLinkDetected,
    #[serde(rename = "suspicious domain")]
    SuspiciousDomain,
    #[serde(rename = "malicious action request")]
    MaliciousActionRequest,
    #[serde(rename = "classic scam pattern detected")]
    ClassicScamPattern,
    #[serde(rename = "escalation despite user hesitation")]
    EscalationDespiteHesitation,
}

impl fmt::Display for ScamSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ScamSignal::FinancialContext => "financial context",
            ScamSignal::ActionRequested => "action requested",
            ScamSignal::SensitiveInfoRequest => "sensitive info request",
            ScamSignal::UrgencyThreatTactics => "urgency/threat tactics",
            ScamSignal::ThreatLanguage => "threat language",
            ScamSignal::ExternalLinkDetected => "external link detected",
            ScamSignal::SuspiciousDomain => "suspicious domain",
            ScamSignal::MaliciousActionRequest => "malicious action request",
            ScamSignal::ClassicScamPattern => "classic scam pattern detected",
            ScamSignal::EscalationDespiteHesitation => "escalation despite user hesitation",
        };
        f.write_str(tag)
    }
}

/// Coarse classification of the scam's apparent goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScamType {
    #[serde(rename = "credential theft")]
    CredentialTheft,
    #[serde(rename = "malware distribution")]
    MalwareDistribution,
    #[serde(rename = "financial fraud")]
    FinancialFraud,
    #[serde(rename = "phishing")]
    Phishing,
    #[serde(rename = "unknown scam")]
    Unknown,
}

impl fmt::Display for ScamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            ScamType::CredentialTheft => "credential theft",
            ScamType::MalwareDistribution => "malware distribution",
            ScamType::FinancialFraud => "financial fraud",
            ScamType::Phishing => "phishing",
            ScamType::Unknown => "unknown scam",
        };
        f.write_str(tag)
    }
}

/// The verdict frozen at the moment a session first crosses the scam
/// threshold. Later messages may raise the session's score ceiling but
/// never overwrite this snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionVerdict {
    pub is_scam: bool,
    pub score: u32,
    pub reasons: Vec<ScamSignal>,
    pub scam_types: BTreeSet<ScamType>,
    /// 1-based index of the session message that triggered detection.
    pub message_index: usize,
}
