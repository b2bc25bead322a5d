//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ConfigValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),

    #[error("JSON log format is required in production")]
    JsonLogsRequiredInProduction,

    #[error("Page size must be at least 1")]
    InvalidPageSize,

    #[error("Default page size {default} exceeds maximum {max}")]
    DefaultExceedsMax { default: u32, max: u32 },
}
