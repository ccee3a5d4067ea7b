//! Fixed keyword vocabularies shared by the scorer and extractor.
//!
//! All matching is case-insensitive substring containment against the
//! lower-cased message text.

/// Financial-context words (weight 1 each).
pub const FINANCIAL_KEYWORDS: &[&str] = &[
    "bank",
    "account",
    "upi",
    "payment",
    "transaction",
    "wallet",
    "credit",
    "debit",
];

/// Action-request words (weight 1 each).
pub const ACTION_KEYWORDS: &[&str] = &[
    "send", "verify", "click", "update", "confirm", "share", "provide", "enter",
];

/// Sensitive-information words (weight 3 each).
pub const SENSITIVE_KEYWORDS: &[&str] = &["otp", "pin", "password", "cvv", "secret", "code"];

/// Urgency-pressure words (weight 2 each).
pub const URGENCY_KEYWORDS: &[&str] = &[
    "urgent",
    "immediately",
    "now",
    "asap",
    "quickly",
    "today",
    "blocked",
    "suspended",
    "freeze",
];

/// Threat/coercion words (weight 2 each).
pub const THREAT_KEYWORDS: &[&str] = &[
    "block",
    "suspend",
    "freeze",
    "cancel",
    "close",
    "locked",
    "unauthorized",
];

/// Link/download action words (weight 2 each).
pub const ACTION_REQUEST_KEYWORDS: &[&str] = &["click", "download", "install", "update", "renew"];

/// Markers of victim hesitation in the honeypot's own prior replies.
pub const HESITATION_MARKERS: &[&str] = &["worried", "doubt", "safe", "hesitate", "not sure"];

/// Suspicious terms recorded as intelligence artifacts in their own right.
pub const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "urgent",
    "verify",
    "blocked",
    "suspended",
    "freeze",
    "confirm",
    "immediate",
    "claim",
    "update",
    "click",
    "download",
    "authenticate",
    "password",
    "otp",
    "pin",
    "cvv",
    "secret",
    "validate",
    "activate",
    "renew",
    "expire",
    "unauthorized",
    "secure",
    "protect",
    "danger",
    "limited",
    "today",
    "now",
    "asap",
    "hurry",
    "quickly",
    "immediately",
];

/// Consumer email providers whose addresses are suppressed unless
/// corroborating suspicion exists elsewhere in the text.
pub const TRUSTED_EMAIL_DOMAINS: &[&str] = &["@gmail.com", "@yahoo.com", "@outlook.com"];

/// Counts how many vocabulary entries occur in the (lower-cased) text.
pub fn count_matches(text: &str, vocabulary: &[&str]) -> u32 {
    vocabulary.iter().filter(|word| text.contains(*word)).count() as u32
}

/// True if any vocabulary entry occurs in the (lower-cased) text.
pub fn contains_any(text: &str, vocabulary: &[&str]) -> bool {
    vocabulary.iter().any(|word| text.contains(*word))
}
