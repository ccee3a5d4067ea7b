//! Caller-authorization port.
//!
//! From the core's perspective authorization is an opaque capability: "is
//! this caller allowed in". The transport middleware consults this port
//! before any session state is touched, so an unauthorized request has zero
//! side effects.

use async_trait::async_trait;
use thiserror::Error;

/// Authorization failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The request carried no `x-api-key` header at all.
    #[error("missing x-api-key header")]
    MissingKey,

    /// A key was presented but it is not the configured one.
    #[error("invalid API key")]
    InvalidKey,
}

/// Validates a presented API key.
///
/// # Contract
///
/// Implementations must:
/// - Return `Ok(())` only for an authorized caller
/// - Return `AuthError::InvalidKey` for any unrecognized key
/// - Avoid timing side channels when comparing key material
#[async_trait]
pub trait ApiKeyValidator: Send + Sync {
    /// Checks whether the presented key authorizes the caller.
    async fn validate(&self, presented: &str) -> Result<(), AuthError>;
}
