//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `WRITER_ONBOARDING`
//! prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use writer_onboarding::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod error;
mod features;
mod server;
mod sessions;
mod uploads;

pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use server::{Environment, ServerConfig};
pub use sessions::SessionConfig;
pub use uploads::UploadConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// development configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, CORS, timeout)
    #[serde(default)]
    pub server: ServerConfig,

    /// Writing sample limits
    #[serde(default)]
    pub uploads: UploadConfig,

    /// Wizard retention in the in-memory store
    #[serde(default)]
    pub sessions: SessionConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `WRITER_ONBOARDING` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `WRITER_ONBOARDING__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `WRITER_ONBOARDING__UPLOADS__MAX_SAMPLE_BYTES=1048576`
    /// - `WRITER_ONBOARDING__SESSIONS__IDLE_TTL_SECS=900`
    /// - `WRITER_ONBOARDING__FEATURES__JSON_LOGS=true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("WRITER_ONBOARDING")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.uploads.validate()?;
        self.sessions.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
