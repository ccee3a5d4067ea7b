//! API key validators.
//!
//! `StaticKeyValidator` checks the configured deployment key in constant
//! time; `MockKeyValidator` backs tests without real key material.

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use subtle::ConstantTimeEq;

use crate::ports::{ApiKeyValidator, AuthError};

/// Validates callers against the single configured API key.
pub struct StaticKeyValidator {
    api_key: Secret<String>,
}

impl StaticKeyValidator {
    pub fn new(api_key: Secret<String>) -> Self {
        Self { api_key }
    }
}

#[async_trait]
impl ApiKeyValidator for StaticKeyValidator {
    async fn validate(&self, presented: &str) -> Result<(), AuthError> {
        let expected = self.api_key.expose_secret().as_bytes();
        if bool::from(expected.ct_eq(presented.as_bytes())) {
            Ok(())
        } else {
            Err(AuthError::InvalidKey)
        }
    }
}

/// Mock validator for tests: accepts exactly the keys it was given.
#[derive(Debug, Default)]
pub struct MockKeyValidator {
    accepted: Vec<String>,
}

impl MockKeyValidator {
    /// Creates a validator that rejects everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a key the validator will accept.
    pub fn accepting(mut self, key: impl Into<String>) -> Self {
        self.accepted.push(key.into());
        self
    }
}

#[async_trait]
impl ApiKeyValidator for MockKeyValidator {
    async fn validate(&self, presented: &str) -> Result<(), AuthError> {
        if self.accepted.iter().any(|key| key == presented) {
            Ok(())
        } else {
            Err(AuthError::InvalidKey)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn static_validator() -> StaticKeyValidator {
        StaticKeyValidator::new(Secret::new("correct-horse".to_string()))
    }

    #[tokio::test]
    async fn static_validator_accepts_configured_key() {
        assert!(static_validator().validate("correct-horse").await.is_ok());
    }

    #[tokio::test]
    async fn static_validator_rejects_wrong_key() {
        let result = static_validator().validate("battery-staple").await;
        assert_eq!(result, Err(AuthError::InvalidKey));
    }

    #[tokio::test]
    async fn static_validator_rejects_prefix_of_key() {
        let result = static_validator().validate("correct").await;
        assert_eq!(result, Err(AuthError::InvalidKey));
    }

    #[tokio::test]
    async fn mock_validator_rejects_by_default() {
        let validator = MockKeyValidator::new();
        assert!(validator.validate("anything").await.is_err());
    }

    #[tokio::test]
    async fn mock_validator_accepts_registered_keys() {
        let validator = MockKeyValidator::new().accepting("test-key");
        assert!(validator.validate("test-key").await.is_ok());
        assert!(validator.validate("other").await.is_err());
    }
}
