//! Instrument error types.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::UnknownOptionType("straddle".to_string());
/// assert!(format!("{}", err).contains("straddle"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InstrumentError {
    /// Option type text is neither a call nor a put.
    #[error("Invalid option type '{0}': expected call|c or put|p")]
    UnknownOptionType(String),
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
