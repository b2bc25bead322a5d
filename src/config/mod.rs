//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `COLLI` prefix and
//! `__` between nested keys.
//!
//! # Example
//!
//! ```no_run
//! use colli_backend::config::{init_tracing, AppConfig};
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! init_tracing(&config.logging);
//! ```

mod error;
mod logging;
mod pagination;

pub use error::{ConfigError, ConfigValidationError};
pub use logging::{init_tracing, LogFormat, LoggingConfig};
pub use pagination::PaginationConfig;

use serde::Deserialize;

/// Application environment
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

/// Root application configuration
///
/// Every section has defaults, so an empty environment loads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub environment: Environment,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub pagination: PaginationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `COLLI` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `COLLI__ENVIRONMENT=production` -> `environment = production`
    /// - `COLLI__LOGGING__FORMAT=json` -> `logging.format = json`
    /// - `COLLI__PAGINATION__MAX_PER_PAGE=50` -> `pagination.max_per_page = 50`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("COLLI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` for an unparsable log filter,
    /// inconsistent page sizes, or non-JSON logs in production.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.logging.validate()?;
        self.pagination.validate()?;
        if self.is_production() && self.logging.format != LogFormat::Json {
            return Err(ConfigValidationError::JsonLogsRequiredInProduction);
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}
