//! Market parameter error types.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Market parameter validation errors.
///
/// Raised by [`MarketParameters::new`](super::MarketParameters::new) and the
/// bumping helpers, never clamped.
///
/// # Examples
/// ```
/// use pricer_models::market::MarketError;
///
/// let err = MarketError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum MarketError {
    /// Spot price is not a positive finite number.
    #[error("Invalid spot price: S = {spot} (must be positive)")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Volatility is not a positive finite number.
    #[error("Invalid volatility: σ = {volatility} (must be positive)")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Risk-free rate is NaN or infinite.
    #[error("Invalid risk-free rate: r = {rate} (must be finite)")]
    InvalidRate {
        /// The invalid rate value
        rate: f64,
    },
}

impl From<MarketError> for PricingError {
    fn from(err: MarketError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
