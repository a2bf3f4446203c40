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
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Maximum sample size must be greater than zero")]
    InvalidMaxSampleSize,

    #[error("At least one sample file extension must be allowed")]
    NoAllowedExtensions,

    #[error("Invalid sample file extension: {0}")]
    InvalidExtension(String),

    #[error("Wizard lifetimes must be greater than zero")]
    InvalidSessionTtl,

    #[error("Sweep interval must be greater than zero")]
    InvalidSweepInterval,
}
