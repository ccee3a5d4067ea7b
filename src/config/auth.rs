//! Authentication configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Placeholder key shipped for local development only.
const PLACEHOLDER_API_KEY: &str = "your-secret-api-key-change-in-production";

/// Authentication configuration (inbound `x-api-key` header)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// API key callers must present on every mutating/introspecting request
    #[serde(default = "default_api_key")]
    pub api_key: Secret<String>,
}

impl AuthConfig {
    /// Validate authentication configuration
    ///
    /// In production, refuses the development placeholder key.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        let key = self.api_key.expose_secret();
        if key.is_empty() {
            return Err(ValidationError::MissingRequired("AUTH_API_KEY"));
        }
        if *environment == Environment::Production && key == PLACEHOLDER_API_KEY {
            return Err(ValidationError::PlaceholderApiKey);
        }
        Ok(())
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_key: default_api_key(),
        }
    }
}

fn default_api_key() -> Secret<String> {
    Secret::new(PLACEHOLDER_API_KEY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_key_is_valid_in_development() {
        let config = AuthConfig::default();
        assert!(config.validate(&Environment::Development).is_ok());
    }

    #[test]
    fn default_key_is_rejected_in_production() {
        let config = AuthConfig::default();
        assert!(matches!(
            config.validate(&Environment::Production),
            Err(ValidationError::PlaceholderApiKey)
        ));
    }

    #[test]
    fn empty_key_is_rejected() {
        let config = AuthConfig {
            api_key: Secret::new(String::new()),
        };
        assert!(config.validate(&Environment::Development).is_err());
    }

    #[test]
    fn real_key_is_valid_in_production() {
        let config = AuthConfig {
            api_key: Secret::new("deployment-specific-key".to_string()),
        };
        assert!(config.validate(&Environment::Production).is_ok());
    }
}
