//! Intelligence extraction from raw message text.
//!
//! Pure pattern matching: text in, artifact bundle out. Extraction never
//! raises - a failed pattern degrades to empty results for the affected
//! category. Links, UPI handles, phone numbers, and email addresses are also
//! recovered from the rest of the conversation for context; the remaining
//! categories only consider the current message.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::detection::keywords::{SUSPICIOUS_KEYWORDS, TRUSTED_EMAIL_DOMAINS};
use crate::domain::engagement::{IntelligenceBundle, IntelligenceCategory, Message};

// Numeric tokens above this value (at timestamp-plausible lengths) are
// treated as epoch timestamps rather than account numbers.
const TIMESTAMP_VALUE_FLOOR: i64 = 1_000_000_000;
const TIMESTAMP_MAX_DIGITS: usize = 13;

static UPI_RE: Lazy<Option<Regex>> = Lazy::new(|| compile(r"(?i)\b[\w.\-]{2,}@[a-zA-Z]{2,}\b"));
static URL_RE: Lazy<Option<Regex>> = Lazy::new(|| compile(r"https?://[^\s]+"));
static PHONE_RE: Lazy<Option<Regex>> = Lazy::new(|| compile(r"(?:\+91|91|0)?\s*[6-9]\d{9}"));
static ACCOUNT_RE: Lazy<Option<Regex>> = Lazy::new(|| compile(r"\b\d{9,18}\b"));
static EMAIL_RE: Lazy<Option<Regex>> =
    Lazy::new(|| compile(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"));
static BITCOIN_RE: Lazy<Option<Regex>> = Lazy::new(|| compile(r"\b[13][a-km-zA-HJ-NP-Z1-9]{25,34}\b"));
static IP_RE: Lazy<Option<Regex>> = Lazy::new(|| compile(r"\b(?:\d{1,3}\.){3}\d{1,3}\b"));

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            tracing::debug!(pattern, %err, "extraction pattern failed to compile; category disabled");
            None
        }
    }
}

fn record_matches(
    bundle: &mut IntelligenceBundle,
    category: IntelligenceCategory,
    re: &Lazy<Option<Regex>>,
    text: &str,
) {
    if let Some(re) = re.as_ref() {
        for found in re.find_iter(text) {
            bundle.record(category, found.as_str());
        }
    }
}

/// Extracts structured intelligence artifacts from message text.
#[derive(Debug, Clone, Default)]
pub struct IntelligenceExtractor;

impl IntelligenceExtractor {
    /// Creates a new extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extracts all artifact categories from `text`, plus contact points and
    /// links from every message in `full_conversation`.
    ///
    /// The result always contains all eight categories, each normalized and
    /// deduplicated.
    pub fn extract(&self, text: &str, full_conversation: &[Message]) -> IntelligenceBundle {
        let mut bundle = IntelligenceBundle::new();

        self.scan_contact_points(text, &mut bundle);

        record_matches(&mut bundle, IntelligenceCategory::BitcoinAddresses, &BITCOIN_RE, text);
        record_matches(&mut bundle, IntelligenceCategory::IpAddresses, &IP_RE, text);
        self.scan_bank_accounts(text, &mut bundle);
        self.scan_suspicious_keywords(text, &mut bundle);

        for message in full_conversation {
            self.scan_contact_points(&message.text, &mut bundle);
        }

        tracing::debug!(artifacts = bundle.total_artifacts(), "extracted intelligence");
        bundle
    }

    /// Links, UPI handles, phone numbers, and emails - the categories also
    /// recovered from conversation context.
    fn scan_contact_points(&self, text: &str, bundle: &mut IntelligenceBundle) {
        record_matches(bundle, IntelligenceCategory::UpiIds, &UPI_RE, text);
        record_matches(bundle, IntelligenceCategory::PhishingLinks, &URL_RE, text);
        record_matches(bundle, IntelligenceCategory::PhoneNumbers, &PHONE_RE, text);
        self.scan_emails(text, bundle);
    }

    fn scan_bank_accounts(&self, text: &str, bundle: &mut IntelligenceBundle) {
        if let Some(re) = ACCOUNT_RE.as_ref() {
            for found in re.find_iter(text) {
                if !is_likely_timestamp(found.as_str()) {
                    bundle.record(IntelligenceCategory::BankAccounts, found.as_str());
                }
            }
        }
    }

    /// Trusted-provider addresses are suppressed unless the surrounding text
    /// carries a suspicious keyword of its own.
    fn scan_emails(&self, text: &str, bundle: &mut IntelligenceBundle) {
        let re = match EMAIL_RE.as_ref() {
            Some(re) => re,
            None => return,
        };

        let text_lower = text.to_lowercase();
        let corroborated = SUSPICIOUS_KEYWORDS.iter().any(|kw| text_lower.contains(kw));

        for found in re.find_iter(text) {
            let email = found.as_str().to_lowercase();
            let trusted = TRUSTED_EMAIL_DOMAINS
                .iter()
                .any(|domain| email.contains(domain));
            if !trusted || corroborated {
                bundle.record(IntelligenceCategory::EmailAddresses, &email);
            }
        }
    }

    fn scan_suspicious_keywords(&self, text: &str, bundle: &mut IntelligenceBundle) {
        let text_lower = text.to_lowercase();
        for keyword in SUSPICIOUS_KEYWORDS {
            if text_lower.contains(keyword) {
                bundle.record(IntelligenceCategory::SuspiciousKeywords, keyword);
            }
        }
    }
}

/// Heuristic: a 10-13 digit number with a value above the epoch floor is far
/// more likely a millisecond/second timestamp than an account number.
fn is_likely_timestamp(digits: &str) -> bool {
    if digits.len() > TIMESTAMP_MAX_DIGITS {
        return false;
    }
    digits
        .parse::<i64>()
        .map(|value| value > TIMESTAMP_VALUE_FLOOR)
        .unwrap_or(false)
}
