//! Accumulated forensic intelligence for one engagement.
//!
//! Categories form a closed set so a typo in a category name is a compile
//! error, not a silently empty bucket.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The closed set of intelligence categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntelligenceCategory {
    BankAccounts,
    UpiIds,
    PhishingLinks,
    PhoneNumbers,
    SuspiciousKeywords,
    EmailAddresses,
    BitcoinAddresses,
    IpAddresses,
}

/// Structured artifacts recovered from conversation text.
///
/// # Invariants
///
/// - Every category is always present (possibly empty).
/// - Values are lower-cased, trimmed, and unique; empty strings never enter.
/// - [`merge`](IntelligenceBundle::merge) is commutative, associative, and
///   idempotent (per-category set union).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntelligenceBundle {
    pub bank_accounts: BTreeSet<String>,
    pub upi_ids: BTreeSet<String>,
    pub phishing_links: BTreeSet<String>,
    pub phone_numbers: BTreeSet<String>,
    pub suspicious_keywords: BTreeSet<String>,
    pub email_addresses: BTreeSet<String>,
    pub bitcoin_addresses: BTreeSet<String>,
    pub ip_addresses: BTreeSet<String>,
}

impl IntelligenceBundle {
    /// Creates an empty bundle with all categories present.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a raw artifact under a category, normalizing it first.
    ///
    /// Values are trimmed and lower-cased; values that normalize to the
    /// empty string are dropped.
    pub fn record(&mut self, category: IntelligenceCategory, raw: &str) {
        let value = raw.trim().to_lowercase();
        if value.is_empty() {
            return;
        }
        self.set_mut(category).insert(value);
    }

    /// Merges another bundle into this one via per-category set union.
    pub fn merge(&mut self, other: &IntelligenceBundle) {
        self.bank_accounts.extend(other.bank_accounts.iter().cloned());
        self.upi_ids.extend(other.upi_ids.iter().cloned());
        self.phishing_links.extend(other.phishing_links.iter().cloned());
        self.phone_numbers.extend(other.phone_numbers.iter().cloned());
        self.suspicious_keywords
            .extend(other.suspicious_keywords.iter().cloned());
        self.email_addresses
            .extend(other.email_addresses.iter().cloned());
        self.bitcoin_addresses
            .extend(other.bitcoin_addresses.iter().cloned());
        self.ip_addresses.extend(other.ip_addresses.iter().cloned());
    }

    /// Returns true if no category holds any artifact.
    pub fn is_empty(&self) -> bool {
        self.total_artifacts() == 0
    }

    /// Total artifact count across all categories.
    pub fn total_artifacts(&self) -> usize {
        self.bank_accounts.len()
            + self.upi_ids.len()
            + self.phishing_links.len()
            + self.phone_numbers.len()
            + self.suspicious_keywords.len()
            + self.email_addresses.len()
            + self.bitcoin_addresses.len()
            + self.ip_addresses.len()
    }

    fn set_mut(&mut self, category: IntelligenceCategory) -> &mut BTreeSet<String> {
        match category {
            IntelligenceCategory::BankAccounts => &mut self.bank_accounts,
            IntelligenceCategory::UpiIds => &mut self.upi_ids,
            IntelligenceCategory::PhishingLinks => &mut self.phishing_links,
            IntelligenceCategory::PhoneNumbers => &mut self.phone_numbers,
            IntelligenceCategory::SuspiciousKeywords => &mut self.suspicious_keywords,
            IntelligenceCategory::EmailAddresses => &mut self.email_addresses,
            IntelligenceCategory::BitcoinAddresses => &mut self.bitcoin_addresses,
            IntelligenceCategory::IpAddresses => &mut self.ip_addresses,
        }
    }
}
