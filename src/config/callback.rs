//! Evaluation callback configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Outbound callback configuration (final report dispatch)
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackConfig {
    /// Evaluation endpoint the final report is POSTed to
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Bounded timeout for the callback request, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl CallbackConfig {
    /// Get the callback timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate callback configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(ValidationError::InvalidCallbackEndpoint);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidCallbackTimeout);
        }
        Ok(())
    }
}

impl Default for CallbackConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    "https://hackathon.guvi.in/api/updateHoneyPotFinalResult".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn callback_config_defaults() {
        let config = CallbackConfig::default();
        assert!(config.endpoint.starts_with("https://"));
        assert_eq!(config.timeout_secs, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn timeout_converts_to_duration() {
        let config = CallbackConfig {
            timeout_secs: 5,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn validation_rejects_non_http_endpoint() {
        let config = CallbackConfig {
            endpoint: "ftp://example.com/report".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_zero_timeout() {
        let config = CallbackConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_excessive_timeout() {
        let config = CallbackConfig {
            timeout_secs: 600,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
