//! Finite-difference Greeks errors.

use pricer_core::types::PricingError;
use pricer_models::market::MarketError;
use thiserror::Error;

/// Errors from [`FiniteDifferenceGreeks`](super::FiniteDifferenceGreeks).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GreeksError {
    /// Bump size is zero, negative or non-finite.
    #[error("Invalid bump size: epsilon = {epsilon} (must be positive and finite)")]
    InvalidEpsilon {
        /// The rejected bump size.
        epsilon: f64,
    },

    /// A bumped repricing failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

impl From<MarketError> for GreeksError {
    fn from(err: MarketError) -> Self {
        GreeksError::Pricing(err.into())
    }
}
