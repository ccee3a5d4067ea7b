//! Scam detection and session lifecycle tuning

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Detection thresholds and session lifecycle limits
#[derive(Debug, Clone, Deserialize)]
pub struct DetectionConfig {
    /// Minimum additive score for a message to be classified as a scam attempt
    #[serde(default = "default_scam_score_threshold")]
    pub scam_score_threshold: u32,

    /// Hard cap on messages per session before the engagement concludes
    #[serde(default = "default_max_messages_per_session")]
    pub max_messages_per_session: usize,

    /// Minimum messages before the final callback may be sent.
    ///
    /// Currently not consulted by the continuation decision; retained so
    /// deployed configurations keep loading unchanged.
    #[serde(default = "default_min_messages_before_callback")]
    pub min_messages_before_callback: usize,

    /// Sessions idle longer than this are evicted by the registry sweep
    #[serde(default = "default_session_timeout_minutes")]
    pub session_timeout_minutes: u64,
}

impl DetectionConfig {
    /// Get the idle session timeout as a Duration
    pub fn session_timeout(&self) -> Duration {
        Duration::from_secs(self.session_timeout_minutes * 60)
    }

    /// Validate detection configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.scam_score_threshold == 0 {
            return Err(ValidationError::InvalidScoreThreshold);
        }
        if self.max_messages_per_session == 0 {
            return Err(ValidationError::InvalidMessageCap);
        }
        if self.session_timeout_minutes == 0 {
            return Err(ValidationError::InvalidSessionTimeout);
        }
        Ok(())
    }
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            scam_score_threshold: default_scam_score_threshold(),
            max_messages_per_session: default_max_messages_per_session(),
            min_messages_before_callback: default_min_messages_before_callback(),
            session_timeout_minutes: default_session_timeout_minutes(),
        }
    }
}

fn default_scam_score_threshold() -> u32 {
    4
}

fn default_max_messages_per_session() -> usize {
    20
}

fn default_min_messages_before_callback() -> usize {
    3
}

fn default_session_timeout_minutes() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detection_config_defaults() {
        let config = DetectionConfig::default();
        assert_eq!(config.scam_score_threshold, 4);
        assert_eq!(config.max_messages_per_session, 20);
        assert_eq!(config.min_messages_before_callback, 3);
        assert_eq!(config.session_timeout_minutes, 30);
    }

    #[test]
    fn session_timeout_converts_to_duration() {
        let config = DetectionConfig {
            session_timeout_minutes: 2,
            ..Default::default()
        };
        assert_eq!(config.session_timeout(), Duration::from_secs(120));
    }

    #[test]
    fn validation_rejects_zero_threshold() {
        let config = DetectionConfig {
            scam_score_threshold: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_zero_message_cap() {
        let config = DetectionConfig {
            max_messages_per_session: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_zero_session_timeout() {
        let config = DetectionConfig {
            session_timeout_minutes: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
