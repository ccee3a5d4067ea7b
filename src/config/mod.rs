//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SCAMLURE_` prefix and nested values use underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use scamlure::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod auth;
mod callback;
mod detection;
mod error;
mod server;

pub use auth::AuthConfig;
pub use callback::CallbackConfig;
pub use detection::DetectionConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the Scamlure service.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Authentication configuration (inbound API key)
    #[serde(default)]
    pub auth: AuthConfig,

    /// Scam detection and session lifecycle tuning
    #[serde(default)]
    pub detection: DetectionConfig,

    /// Evaluation callback configuration
    #[serde(default)]
    pub callback: CallbackConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `SCAMLURE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SCAMLURE__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `SCAMLURE__AUTH__API_KEY=...` -> `auth.api_key = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SCAMLURE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// Performs semantic validation of configuration:
    /// - Port and timeout ranges
    /// - Callback endpoint URL shape
    /// - Production-specific requirements (no placeholder API key)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.auth.validate(&self.server.environment)?;
        self.detection.validate()?;
        self.callback.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("SCAMLURE__SERVER__PORT");
        env::remove_var("SCAMLURE__SERVER__ENVIRONMENT");
        env::remove_var("SCAMLURE__AUTH__API_KEY");
        env::remove_var("SCAMLURE__DETECTION__SCAM_SCORE_THRESHOLD");
        env::remove_var("SCAMLURE__CALLBACK__ENDPOINT");
    }

    #[test]
    fn loads_with_defaults_when_env_is_empty() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.detection.scam_score_threshold, 4);
        assert_eq!(config.detection.max_messages_per_session, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn env_overrides_detection_threshold() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SCAMLURE__DETECTION__SCAM_SCORE_THRESHOLD", "7");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.detection.scam_score_threshold, 7);
    }

    #[test]
    fn env_overrides_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SCAMLURE__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn is_production_reflects_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("SCAMLURE__SERVER__ENVIRONMENT", "production");
        env::set_var("SCAMLURE__AUTH__API_KEY", "a-real-deployment-key");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }
}
