//! Error types for structured error handling.
//!
//! This module provides:
//! - `DistributionError`: Errors from the normal quantile and z-score functions
//! - `PricingError`: Umbrella error surfaced by pricing operations

use thiserror::Error;

/// Errors raised by inverse-distribution functions.
///
/// Both variants describe an argument outside the open interval (0, 1).
/// The boundaries themselves are rejected because the quantile diverges there.
///
/// # Examples
/// ```
/// use pricer_core::types::DistributionError;
///
/// let err = DistributionError::InvalidProbability { p: 1.0 };
/// assert_eq!(format!("{}", err), "Probability must be in (0, 1): p = 1");
/// ```
#[derive(Debug, Clone, Copy, Error, PartialEq)]
pub enum DistributionError {
    /// Probability passed to the quantile function is outside (0, 1).
    #[error("Probability must be in (0, 1): p = {p}")]
    InvalidProbability {
        /// The rejected probability
        p: f64,
    },

    /// Two-sided confidence level is outside (0, 1).
    #[error("Confidence level must be in (0, 1): c = {level}")]
    InvalidConfidenceLevel {
        /// The rejected confidence level
        level: f64,
    },
}

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing operations with
/// descriptive context for each failure mode. Module-specific errors in the
/// upper layers convert into this type so that engines can expose a single
/// error type through the pricing capability.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or parameters
/// - `NumericalInstability`: Computation produced a non-finite value
/// - `Distribution`: Invalid argument to a distribution function
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Invalid argument to a distribution function
    #[error(transparent)]
    Distribution(#[from] DistributionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_probability_display() {
        let err = DistributionError::InvalidProbability { p: 0.0 };
        assert_eq!(format!("{}", err), "Probability must be in (0, 1): p = 0");
    }

    #[test]
    fn test_invalid_confidence_display() {
        let err = DistributionError::InvalidConfidenceLevel { level: 1.5 };
        assert_eq!(
            format!("{}", err),
            "Confidence level must be in (0, 1): c = 1.5"
        );
    }

    #[test]
    fn test_pricing_error_display() {
        let err = PricingError::NumericalInstability("NaN price".to_string());
        assert_eq!(format!("{}", err), "Numerical instability: NaN price");
    }

    #[test]
    fn test_distribution_error_converts_transparently() {
        let err: PricingError = DistributionError::InvalidProbability { p: -0.1 }.into();
        assert!(matches!(err, PricingError::Distribution(_)));
        assert_eq!(format!("{}", err), "Probability must be in (0, 1): p = -0.1");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::InvalidInput("x".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
