//! CLI error types

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `option-valuation` binary
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
