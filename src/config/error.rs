//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Placeholder API key must not be used in production")]
    PlaceholderApiKey,

    #[error("Scam score threshold must be at least 1")]
    InvalidScoreThreshold,

    #[error("Max messages per session must be at least 1")]
    InvalidMessageCap,

    #[error("Session timeout must be at least 1 minute")]
    InvalidSessionTimeout,

    #[error("Callback endpoint must be an http(s) URL")]
    InvalidCallbackEndpoint,

    #[error("Callback timeout must be between 1 and 120 seconds")]
    InvalidCallbackTimeout,
}
