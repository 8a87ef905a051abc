//! Pricing result shared by all engines.

use std::fmt;

use pricer_core::math::z_score;
use pricer_core::types::DistributionError;

use crate::greeks::Greeks;

/// Sampling uncertainty of a stochastic estimate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Uncertainty {
    standard_error: f64,
    paths_used: usize,
}

/// Outcome of a single pricing call.
///
/// A result is either exact (closed form, no standard error) or stochastic
/// (standard error and path count both present). The two constructors are
/// the only way to build one, so a standard error without a path count
/// cannot exist.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::greeks::Greeks;
/// use pricer_pricing::result::PricingResult;
///
/// let exact = PricingResult::deterministic(8.02, Greeks::default(), "Black-Scholes");
/// assert_eq!(exact.confidence_interval(0.95).unwrap(), (8.02, 8.02));
///
/// let mc = PricingResult::stochastic(8.05, 0.02, 100_000, "Monte Carlo");
/// let (lower, upper) = mc.confidence_interval(0.95).unwrap();
/// assert!(lower < 8.05 && 8.05 < upper);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricingResult {
    price: f64,
    uncertainty: Option<Uncertainty>,
    greeks: Greeks,
    method_name: String,
}

impl PricingResult {
    /// Exact result with analytical Greeks.
    pub fn deterministic(price: f64, greeks: Greeks, method_name: impl Into<String>) -> Self {
        Self {
            price,
            uncertainty: None,
            greeks,
            method_name: method_name.into(),
        }
    }

    /// Simulation estimate with its standard error and path count.
    pub fn stochastic(
        price: f64,
        standard_error: f64,
        paths_used: usize,
        method_name: impl Into<String>,
    ) -> Self {
        Self {
            price,
            uncertainty: Some(Uncertainty {
                standard_error,
                paths_used,
            }),
            greeks: Greeks::default(),
            method_name: method_name.into(),
        }
    }

    /// Present value.
    #[inline]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Standard error of a stochastic estimate.
    #[inline]
    pub fn standard_error(&self) -> Option<f64> {
        self.uncertainty.map(|u| u.standard_error)
    }

    /// Number of simulated paths of a stochastic estimate.
    #[inline]
    pub fn paths_used(&self) -> Option<usize> {
        self.uncertainty.map(|u| u.paths_used)
    }

    /// Sensitivities computed alongside the price, if any.
    #[inline]
    pub fn greeks(&self) -> &Greeks {
        &self.greeks
    }

    /// Short name of the pricing method.
    #[inline]
    pub fn method_name(&self) -> &str {
        &self.method_name
    }

    /// Returns true for simulation estimates.
    #[inline]
    pub fn has_uncertainty(&self) -> bool {
        self.uncertainty.is_some()
    }

    /// Confidence interval at `confidence_level`.
    ///
    /// `(price, price)` for exact results, otherwise
    /// `price ∓ z·standard_error` with `z = Φ⁻¹((1 + c)/2)`.
    ///
    /// # Errors
    ///
    /// [`DistributionError::InvalidConfidenceLevel`] unless the level lies
    /// strictly inside (0, 1). The level is checked for exact results too.
    pub fn confidence_interval(
        &self,
        confidence_level: f64,
    ) -> Result<(f64, f64), DistributionError> {
        let z = z_score(confidence_level)?;

        match self.uncertainty {
            None => Ok((self.price, self.price)),
            Some(Uncertainty { standard_error, .. }) => {
                let margin = z * standard_error;
                Ok((self.price - margin, self.price + margin))
            }
        }
    }
}

impl fmt::Display for PricingResult {
    /// `Price: $8.0214 ± 0.0123 (100000 paths) [Monte Carlo]`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Price: ${:.4}", self.price)?;
        if let Some(Uncertainty {
            standard_error,
            paths_used,
        }) = self.uncertainty
        {
            write!(f, " ± {:.4} ({} paths)", standard_error, paths_used)?;
        }
        write!(f, " [{}]", self.method_name)
    }
}
