//! European vanilla option.

use super::payoff::OptionType;

/// European option contract.
///
/// Immutable description of strike, option type and time to expiry in years.
/// No validation is performed here; engines assume `strike > 0` and
/// `expiry > 0`.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{EuropeanOption, OptionType};
///
/// let call = EuropeanOption::new(105.0, OptionType::Call, 1.0);
/// assert_eq!(call.payoff(110.0), 5.0);
/// assert_eq!(call.payoff(100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EuropeanOption {
    strike: f64,
    option_type: OptionType,
    expiry: f64,
}

impl EuropeanOption {
    /// Creates a new European option.
    ///
    /// # Arguments
    /// * `strike` - Strike price (K)
    /// * `option_type` - Call or put
    /// * `expiry` - Time to expiry in years (T)
    pub fn new(strike: f64, option_type: OptionType, expiry: f64) -> Self {
        Self {
            strike,
            option_type,
            expiry,
        }
    }

    /// Intrinsic value at expiry for terminal spot `spot`.
    #[inline]
    pub fn payoff(&self, spot: f64) -> f64 {
        self.option_type.payoff(spot, self.strike)
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns true for calls.
    #[inline]
    pub fn is_call(&self) -> bool {
        self.option_type.is_call()
    }

    /// Same contract with a different time to expiry.
    #[inline]
    pub fn with_expiry(&self, expiry: f64) -> Self {
        Self { expiry, ..*self }
    }
}
