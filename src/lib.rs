//! Scamlure - Agentic Honeypot for Scam Engagement
//!
//! This crate classifies inbound messages as scam attempts, keeps suspected
//! scammers talking through a template-driven honeypot dialogue, accumulates
//! forensic intelligence across the conversation, and reports the summarized
//! findings to an external evaluation endpoint once the engagement concludes.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
