//! Heuristic scam scoring for a single message.
//!
//! Scoring is additive across independent signal families; each family
//! contributes its reason tag at most once. The verdict compares the total
//! against a configurable threshold. All internal failures degrade to "no
//! extra signal" - scoring never raises.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::detection::keywords::{
    contains_any, count_matches, ACTION_KEYWORDS, ACTION_REQUEST_KEYWORDS, FINANCIAL_KEYWORDS,
    HESITATION_MARKERS, SENSITIVE_KEYWORDS, THREAT_KEYWORDS, URGENCY_KEYWORDS,
};
use crate::domain::engagement::{Message, ScamSignal, ScamType};

/// Flat score for the presence of an external link.
const LINK_WEIGHT: u32 = 3;
/// Flat score for a suspicious domain pattern.
const SUSPICIOUS_DOMAIN_WEIGHT: u32 = 2;
/// Flat bonus for the canonical financial + action + urgency shape.
const CLASSIC_PATTERN_BONUS: u32 = 5;
/// Flat bonus for pressure-escalation against a hesitant victim.
const ESCALATION_BONUS: u32 = 2;
/// How many trailing history messages the escalation check inspects.
const ESCALATION_WINDOW: usize = 3;

static URL_RE: Lazy<Option<Regex>> = Lazy::new(|| compile(r"https?://[^\s]+"));
static SUSPICIOUS_DOMAIN_RE: Lazy<Option<Regex>> = Lazy::new(|| compile(r"@[a-zA-Z0-9-]+\.[a-zA-Z]{2,}"));

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            tracing::debug!(pattern, %err, "scoring pattern failed to compile; signal disabled");
            None
        }
    }
}

fn matches(re: &Lazy<Option<Regex>>, text: &str) -> bool {
    re.as_ref().map_or(false, |re| re.is_match(text))
}

/// Result of scoring one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreOutcome {
    pub is_scam: bool,
    pub score: u32,
    pub reasons: Vec<ScamSignal>,
}

/// Scores messages for scam intent against a configured threshold.
#[derive(Debug, Clone)]
pub struct ScamScorer {
    threshold: u32,
}

impl ScamScorer {
    /// Creates a scorer with the given detection threshold.
    pub fn new(threshold: u32) -> Self {
        Self { threshold }
    }

    /// Returns the configured detection threshold.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Scores a single message, optionally informed by recent history.
    ///
    /// Deterministic and pure; `history` is only consulted for the
    /// escalation-despite-hesitation bonus.
    pub fn score(&self, message: &str, history: &[Message]) -> ScoreOutcome {
        let msg = message.to_lowercase();
        let mut score = 0u32;
        let mut reasons = Vec::new();

        let financial = count_matches(&msg, FINANCIAL_KEYWORDS);
        if financial > 0 {
            score += financial;
            reasons.push(ScamSignal::FinancialContext);
        }

        let action = count_matches(&msg, ACTION_KEYWORDS);
        if action > 0 {
            score += action;
            reasons.push(ScamSignal::ActionRequested);
        }

        let sensitive = count_matches(&msg, SENSITIVE_KEYWORDS);
        if sensitive > 0 {
            score += sensitive * 3;
            reasons.push(ScamSignal::SensitiveInfoRequest);
        }

        let urgency = count_matches(&msg, URGENCY_KEYWORDS);
        let threat = count_matches(&msg, THREAT_KEYWORDS);
        if urgency > 0 {
            score += urgency * 2;
            reasons.push(ScamSignal::UrgencyThreatTactics);
        }
        if threat > 0 {
            score += threat * 2;
            // The urgency tag already covers pressure tactics; only tag
            // threat language when it stands alone.
            if urgency == 0 {
                reasons.push(ScamSignal::ThreatLanguage);
            }
        }

        if matches(&URL_RE, &msg) {
            score += LINK_WEIGHT;
            reasons.push(ScamSignal::ExternalLinkDetected);
        }

        if matches(&SUSPICIOUS_DOMAIN_RE, &msg) {
            score += SUSPICIOUS_DOMAIN_WEIGHT;
            reasons.push(ScamSignal::SuspiciousDomain);
        }

        let action_request = count_matches(&msg, ACTION_REQUEST_KEYWORDS);
        if action_request > 0 {
            score += action_request * 2;
            reasons.push(ScamSignal::MaliciousActionRequest);
        }

        if financial > 0 && action > 0 && urgency > 0 {
            score += CLASSIC_PATTERN_BONUS;
            reasons.push(ScamSignal::ClassicScamPattern);
        }

        if self.escalates_against_hesitation(&msg, history) {
            score += ESCALATION_BONUS;
            reasons.push(ScamSignal::EscalationDespiteHesitation);
        }

        tracing::debug!(score, ?reasons, "scored message");

        ScoreOutcome {
            is_scam: score >= self.threshold,
            score,
            reasons,
        }
    }

    /// Coarse classification of a message into scam types.
    ///
    /// Used only to populate the frozen detection snapshot; never feeds the
    /// running score.
    pub fn classify(&self, message: &str) -> BTreeSet<ScamType> {
        let msg = message.to_lowercase();
        let mut types = BTreeSet::new();

        if contains_any(&msg, &["otp", "password", "pin", "cvv"]) {
            types.insert(ScamType::CredentialTheft);
        }
        if contains_any(&msg, &["click", "download", "link"]) {
            types.insert(ScamType::MalwareDistribution);
        }
        if contains_any(&msg, &["bank", "account", "upi", "payment"]) {
            types.insert(ScamType::FinancialFraud);
        }
        if contains_any(&msg, &["verify", "confirm", "update"]) {
            types.insert(ScamType::Phishing);
        }

        if types.is_empty() {
            types.insert(ScamType::Unknown);
        }
        types
    }

    /// True when the honeypot's own side voiced hesitation in the recent
    /// history and the current message answers with pressure.
    fn escalates_against_hesitation(&self, current_msg: &str, history: &[Message]) -> bool {
        if !contains_any(current_msg, URGENCY_KEYWORDS) && !contains_any(current_msg, THREAT_KEYWORDS) {
            return false;
        }

        history
            .iter()
            .rev()
            .take(ESCALATION_WINDOW)
            .any(|prior| {
                !prior.sender.is_scammer()
                    && contains_any(&prior.text.to_lowercase(), HESITATION_MARKERS)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::engagement::Sender;
    use proptest::prelude::*;

    fn scorer() -> ScamScorer {
        ScamScorer::new(4)
    }

    fn message(sender: Sender, text: &str) -> Message {
        Message::new(sender, text, 0)
    }

    mod scoring {
        use super::*;

        #[test]
        fn flags_account_blocked_verification_message() {
            let outcome = scorer().score(
                "Your bank account will be blocked. Verify immediately at https://bank-verify.com",
                &[],
            );

            assert!(outcome.is_scam);
            assert!(outcome.score >= 4);
            assert!(outcome.reasons.contains(&ScamSignal::FinancialContext));
            assert!(outcome.reasons.contains(&ScamSignal::UrgencyThreatTactics));
            assert!(outcome.reasons.contains(&ScamSignal::ExternalLinkDetected));
        }

        #[test]
        fn ignores_benign_message() {
            let outcome = scorer().score("Hi, can you help with bus directions?", &[]);
            assert!(!outcome.is_scam);
        }

        #[test]
        fn sensitive_keywords_weigh_three_each() {
            let outcome = scorer().score("otp", &[]);
            assert_eq!(outcome.score, 3);
            assert_eq!(outcome.reasons, vec![ScamSignal::SensitiveInfoRequest]);
        }

        #[test]
        fn threat_tag_only_added_when_urgency_absent() {
            // "unauthorized" is a threat keyword with no urgency overlap.
            let with_threat_only = scorer().score("unauthorized access to your card", &[]);
            assert!(with_threat_only.reasons.contains(&ScamSignal::ThreatLanguage));

            // "blocked" matches urgency; "block" matches threat. Urgency wins the tag.
            let with_both = scorer().score("your card is blocked", &[]);
            assert!(with_both.reasons.contains(&ScamSignal::UrgencyThreatTactics));
            assert!(!with_both.reasons.contains(&ScamSignal::ThreatLanguage));
        }

        #[test]
        fn classic_pattern_bonus_requires_all_three_families() {
            let outcome = scorer().score("urgent: send payment now", &[]);
            assert!(outcome.reasons.contains(&ScamSignal::ClassicScamPattern));

            let partial = scorer().score("send payment", &[]);
            assert!(!partial.reasons.contains(&ScamSignal::ClassicScamPattern));
        }

        #[test]
        fn suspicious_domain_pattern_scores() {
            let outcome = scorer().score("contact support@secure-bank.xyz", &[]);
            assert!(outcome.reasons.contains(&ScamSignal::SuspiciousDomain));
        }

        #[test]
        fn reason_order_is_stable() {
            let outcome = scorer().score(
                "urgent: verify your bank account at https://bank-verify.com now",
                &[],
            );
            let positions: Vec<usize> = [
                ScamSignal::FinancialContext,
                ScamSignal::ActionRequested,
                ScamSignal::UrgencyThreatTactics,
                ScamSignal::ExternalLinkDetected,
            ]
            .iter()
            .map(|tag| outcome.reasons.iter().position(|r| r == tag).unwrap())
            .collect();

            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn scoring_is_deterministic() {
            let text = "urgent: share your otp to unblock your upi wallet";
            let first = scorer().score(text, &[]);
            let second = scorer().score(text, &[]);
            assert_eq!(first, second);
        }

        proptest! {
            #[test]
            fn never_panics_on_arbitrary_text(text in "\\PC{0,200}") {
                let _ = scorer().score(&text, &[]);
            }
        }
    }

    mod escalation {
        use super::*;

        #[test]
        fn bonus_applies_when_pressure_follows_hesitation() {
            let history = vec![
                message(Sender::Scammer, "share your otp"),
                message(Sender::User, "I'm worried this is not safe"),
            ];

            let with_context = scorer().score("do it immediately or lose access", &history);
            let without_context = scorer().score("do it immediately or lose access", &[]);

            assert!(with_context
                .reasons
                .contains(&ScamSignal::EscalationDespiteHesitation));
            assert_eq!(with_context.score, without_context.score + 2);
        }

        #[test]
        fn bonus_requires_pressure_in_current_message() {
            let history = vec![message(Sender::User, "I'm not sure about this")];
            let outcome = scorer().score("please share your details", &history);
            assert!(!outcome
                .reasons
                .contains(&ScamSignal::EscalationDespiteHesitation));
        }

        #[test]
        fn hesitation_outside_window_is_ignored() {
            let mut history = vec![message(Sender::User, "I'm worried about this")];
            for _ in 0..3 {
                history.push(message(Sender::Scammer, "just a reminder"));
            }

            let outcome = scorer().score("act immediately", &history);
            assert!(!outcome
                .reasons
                .contains(&ScamSignal::EscalationDespiteHesitation));
        }

        #[test]
        fn scammer_hesitation_words_do_not_count() {
            let history = vec![message(Sender::Scammer, "don't be worried, it is safe")];
            let outcome = scorer().score("act immediately", &history);
            assert!(!outcome
                .reasons
                .contains(&ScamSignal::EscalationDespiteHesitation));
        }
    }

    mod classification {
        use super::*;

        #[test]
        fn classifies_credential_theft_and_phishing() {
            let types = scorer().classify("verify your account with the otp");
            assert!(types.contains(&ScamType::CredentialTheft));
            assert!(types.contains(&ScamType::Phishing));
            assert!(types.contains(&ScamType::FinancialFraud));
        }

        #[test]
        fn unmatched_message_is_unknown_scam() {
            let types = scorer().classify("hello friend");
            assert_eq!(types, BTreeSet::from([ScamType::Unknown]));
        }

        #[test]
        fn link_words_classify_as_malware_distribution() {
            let types = scorer().classify("download this link");
            assert!(types.contains(&ScamType::MalwareDistribution));
        }
    }
}
