//! Conclusion-time summary of the scammer's observed tactics.
//!
//! The note is advisory free text attached to the final report; it feeds no
//! further decisions.

use crate::domain::detection::keywords::contains_any;
use crate::domain::engagement::{IntelligenceBundle, Message};

/// Derives a tactic summary from all scammer-authored messages plus the
/// accumulated intelligence.
pub fn generate_agent_notes(messages: &[Message], intelligence: &IntelligenceBundle) -> String {
    let scammer_text = messages
        .iter()
        .filter(|m| m.sender.is_scammer())
        .map(|m| m.text.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    let mut tactics: Vec<&str> = Vec::new();

    if contains_any(&scammer_text, &["urgent", "immediately", "now", "asap"]) {
        tactics.push("urgency pressure");
    }
    if contains_any(&scammer_text, &["blocked", "suspended", "freeze", "locked"]) {
        tactics.push("threat/coercion");
    }
    if contains_any(&scammer_text, &["verify", "confirm", "authenticate"]) {
        tactics.push("credential phishing");
    }
    if contains_any(&scammer_text, &["upi", "payment", "transaction"]) {
        tactics.push("financial exploitation");
    }
    if !intelligence.phishing_links.is_empty() {
        tactics.push("malware distribution");
    }
    if !intelligence.bank_accounts.is_empty() {
        tactics.push("account compromise");
    }
    if tactics.is_empty() {
        tactics.push("social engineering");
    }

    let mut notes = format!("Scammer employed: {}. ", tactics.join(", "));

    if !intelligence.upi_ids.is_empty() {
        notes.push_str("Requested UPI ID sharing. ");
    }
    if !intelligence.bank_accounts.is_empty() {
        notes.push_str("Asked for bank details. ");
    }
    if !intelligence.phishing_links.is_empty() {
        notes.push_str("Provided suspicious links. ");
    }

    notes.push_str("Attempted to establish false trust and urgency throughout conversation.");
    notes
}
