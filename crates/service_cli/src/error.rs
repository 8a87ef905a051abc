//! CLI error types.

use pricer_core::types::PricingError;
use pricer_models::market::MarketError;
use pricer_pricing::greeks::GreeksError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced to the user by the `pricer` binary.
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command-line argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Market inputs rejected.
    #[error(transparent)]
    Market(#[from] MarketError),

    /// Simulation parameters rejected.
    #[error(transparent)]
    Simulation(#[from] pricer_pricing::mc::ConfigError),

    /// Pricing failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Finite-difference Greeks failed.
    #[error(transparent)]
    Greeks(#[from] GreeksError),

    /// Confidence interval could not be derived.
    #[error(transparent)]
    Distribution(#[from] pricer_core::types::DistributionError),

    /// JSON output failed.
    #[error("JSON serialisation failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_market_error_message_passes_through() {
        let err: CliError = MarketError::InvalidSpot { spot: -1.0 }.into();
        assert!(err.to_string().contains("spot"));
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = CliError::InvalidArgument("--paths must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid argument: --paths must be positive");
    }

    #[test]
    fn test_simulation_error_converts() {
        let err: CliError = pricer_pricing::mc::ConfigError::InvalidPathCount(0).into();
        assert!(matches!(err, CliError::Simulation(_)));
    }
}
