//! Market state snapshot.

use super::error::MarketError;

/// Validated market snapshot: spot, risk-free rate and volatility.
///
/// Immutable and `Copy`; bumped copies are built with the `with_*` helpers,
/// which run the same validation as [`MarketParameters::new`].
///
/// # Examples
/// ```
/// use pricer_models::market::MarketParameters;
///
/// let market = MarketParameters::new(100.0, 0.05, 0.2).unwrap();
/// assert_eq!(market.spot(), 100.0);
///
/// // Invalid spot
/// assert!(MarketParameters::new(-100.0, 0.05, 0.2).is_err());
///
/// // Invalid volatility
/// assert!(MarketParameters::new(100.0, 0.05, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MarketParameters {
    spot: f64,
    rate: f64,
    volatility: f64,
}

impl MarketParameters {
    /// Creates a validated market snapshot.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Continuously compounded risk-free rate (may be negative)
    /// * `volatility` - Annualised volatility (must be positive)
    ///
    /// # Errors
    /// - `MarketError::InvalidSpot` if spot <= 0 or not finite
    /// - `MarketError::InvalidVolatility` if volatility <= 0 or not finite
    /// - `MarketError::InvalidRate` if rate is not finite
    pub fn new(spot: f64, rate: f64, volatility: f64) -> Result<Self, MarketError> {
        if !(spot > 0.0 && spot.is_finite()) {
            return Err(MarketError::InvalidSpot { spot });
        }

        if !(volatility > 0.0 && volatility.is_finite()) {
            return Err(MarketError::InvalidVolatility { volatility });
        }

        if !rate.is_finite() {
            return Err(MarketError::InvalidRate { rate });
        }

        Ok(Self {
            spot,
            rate,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Copy with a different spot.
    pub fn with_spot(&self, spot: f64) -> Result<Self, MarketError> {
        Self::new(spot, self.rate, self.volatility)
    }

    /// Copy with a different rate.
    pub fn with_rate(&self, rate: f64) -> Result<Self, MarketError> {
        Self::new(self.spot, rate, self.volatility)
    }

    /// Copy with a different volatility.
    pub fn with_volatility(&self, volatility: f64) -> Result<Self, MarketError> {
        Self::new(self.spot, self.rate, volatility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_parameters() {
        let market = MarketParameters::new(100.0, 0.05, 0.2).unwrap();
        assert_eq!(market.spot(), 100.0);
        assert_eq!(market.rate(), 0.05);
        assert_eq!(market.volatility(), 0.2);
    }

    #[test]
    fn test_negative_rate_is_allowed() {
        assert!(MarketParameters::new(100.0, -0.01, 0.2).is_ok());
    }

    #[test]
    fn test_new_invalid_spot() {
        for spot in [0.0, -100.0, f64::NAN, f64::INFINITY] {
            match MarketParameters::new(spot, 0.05, 0.2) {
                Err(MarketError::InvalidSpot { .. }) => {}
                other => panic!("Expected InvalidSpot for {}, got {:?}", spot, other),
            }
        }
    }

    #[test]
    fn test_new_invalid_volatility() {
        for vol in [0.0, -0.2, f64::NAN] {
            match MarketParameters::new(100.0, 0.05, vol) {
                Err(MarketError::InvalidVolatility { .. }) => {}
                other => panic!("Expected InvalidVolatility for {}, got {:?}", vol, other),
            }
        }
    }

    #[test]
    fn test_new_invalid_rate() {
        assert_eq!(
            MarketParameters::new(100.0, f64::INFINITY, 0.2),
            Err(MarketError::InvalidRate {
                rate: f64::INFINITY
            })
        );
    }

    #[test]
    fn test_spot_checked_before_volatility() {
        assert_eq!(
            MarketParameters::new(0.0, 0.05, 0.0),
            Err(MarketError::InvalidSpot { spot: 0.0 })
        );
    }

    #[test]
    fn test_bumps_only_touch_one_field() {
        let base = MarketParameters::new(100.0, 0.05, 0.2).unwrap();

        let up = base.with_spot(101.0).unwrap();
        assert_eq!((up.spot(), up.rate(), up.volatility()), (101.0, 0.05, 0.2));

        let rate_up = base.with_rate(0.06).unwrap();
        assert_eq!(rate_up.rate(), 0.06);
        assert_eq!(rate_up.spot(), 100.0);

        let vol_up = base.with_volatility(0.21).unwrap();
        assert_eq!(vol_up.volatility(), 0.21);

        // The original value is unchanged
        assert_eq!(base.spot(), 100.0);
    }

    #[test]
    fn test_bump_revalidates() {
        let base = MarketParameters::new(100.0, 0.05, 0.2).unwrap();
        assert!(base.with_spot(0.0).is_err());
        assert!(base.with_volatility(-0.01).is_err());
    }
}
