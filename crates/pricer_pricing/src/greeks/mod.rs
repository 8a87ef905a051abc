//! Option sensitivities.
//!
//! - [`Greeks`]: five optional sensitivities in market-quoting units
//! - [`FiniteDifferenceGreeks`]: bump-and-reprice over any
//!   [`PricingEngine`](crate::engine::PricingEngine)
//!
//! # Units
//!
//! | Greek | Unit |
//! |-------|------|
//! | delta | per unit of spot |
//! | gamma | per unit of spot, squared |
//! | vega  | per 1% volatility move |
//! | theta | per calendar day |
//! | rho   | per 1% rate move |

mod error;
mod finite_difference;

pub use error::GreeksError;
pub use finite_difference::{FiniteDifferenceGreeks, DEFAULT_EPSILON};

use std::fmt;

/// Option sensitivities, each independently optional.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::greeks::Greeks;
///
/// let empty = Greeks::default();
/// assert!(!empty.has_greeks());
///
/// let greeks = Greeks { delta: Some(0.54), ..Default::default() };
/// assert!(greeks.has_greeks());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// Delta: ∂V/∂S.
    pub delta: Option<f64>,
    /// Gamma: ∂²V/∂S².
    pub gamma: Option<f64>,
    /// Vega: ∂V/∂σ per 1% volatility.
    pub vega: Option<f64>,
    /// Theta: ∂V/∂t per calendar day.
    pub theta: Option<f64>,
    /// Rho: ∂V/∂r per 1% rate.
    pub rho: Option<f64>,
}

impl Greeks {
    /// Returns true if at least one sensitivity is present.
    #[inline]
    pub fn has_greeks(&self) -> bool {
        self.delta.is_some()
            || self.gamma.is_some()
            || self.vega.is_some()
            || self.theta.is_some()
            || self.rho.is_some()
    }
}

impl fmt::Display for Greeks {
    /// Formats present sensitivities as `Greeks: Δ=… Γ=… ν=… Θ=… ρ=…`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labelled = [
            ("Δ", self.delta),
            ("Γ", self.gamma),
            ("ν", self.vega),
            ("Θ", self.theta),
            ("ρ", self.rho),
        ];

        write!(f, "Greeks:")?;
        for (label, value) in labelled {
            if let Some(value) = value {
                write!(f, " {}={:.4}", label, value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let greeks = Greeks::default();
        assert!(!greeks.has_greeks());
        assert_eq!(greeks.delta, None);
        assert_eq!(greeks.rho, None);
    }

    #[test]
    fn test_any_single_field_counts() {
        let cases = [
            Greeks {
                delta: Some(0.0),
                ..Default::default()
            },
            Greeks {
                gamma: Some(0.0),
                ..Default::default()
            },
            Greeks {
                vega: Some(0.0),
                ..Default::default()
            },
            Greeks {
                theta: Some(0.0),
                ..Default::default()
            },
            Greeks {
                rho: Some(0.0),
                ..Default::default()
            },
        ];
        for greeks in cases {
            assert!(greeks.has_greeks());
        }
    }

    #[test]
    fn test_display_all_fields() {
        let greeks = Greeks {
            delta: Some(0.542_228),
            gamma: Some(0.019_835),
            vega: Some(0.396_705),
            theta: Some(-0.017_198),
            rho: Some(0.462_015),
        };
        assert_eq!(
            greeks.to_string(),
            "Greeks: Δ=0.5422 Γ=0.0198 ν=0.3967 Θ=-0.0172 ρ=0.4620"
        );
    }

    #[test]
    fn test_display_skips_missing_fields() {
        let greeks = Greeks {
            delta: Some(-0.5),
            rho: Some(-0.25),
            ..Default::default()
        };
        assert_eq!(greeks.to_string(), "Greeks: Δ=-0.5000 ρ=-0.2500");
    }
}
