//! Black-Scholes analytical engine.

use pricer_core::types::PricingError;
use pricer_models::analytical::BlackScholes;
use pricer_models::instruments::EuropeanOption;
use pricer_models::market::MarketParameters;

use crate::engine::PricingEngine;
use crate::greeks::Greeks;
use crate::result::PricingResult;

/// Days per year used to quote theta per calendar day.
const DAYS_PER_YEAR: f64 = 365.0;

/// Percentage points per unit, for vega and rho.
const PER_PERCENT: f64 = 100.0;

/// Closed-form Black-Scholes engine.
///
/// Returns exact prices with all five Greeks populated in quoting units:
/// vega and rho per 1% move, theta per calendar day.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{EuropeanOption, OptionType};
/// use pricer_models::market::MarketParameters;
/// use pricer_pricing::analytical::BlackScholesEngine;
/// use pricer_pricing::engine::PricingEngine;
///
/// let engine = BlackScholesEngine::new();
/// let option = EuropeanOption::new(105.0, OptionType::Put, 1.0);
/// let market = MarketParameters::new(100.0, 0.05, 0.2).unwrap();
///
/// let result = engine.price(&option, &market).unwrap();
/// assert!(!result.has_uncertainty());
/// assert!(result.greeks().delta.unwrap() < 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BlackScholesEngine;

impl BlackScholesEngine {
    /// Creates the engine. It holds no state.
    pub fn new() -> Self {
        Self
    }
}

impl PricingEngine for BlackScholesEngine {
    fn price(
        &self,
        option: &EuropeanOption,
        market: &MarketParameters,
    ) -> Result<PricingResult, PricingError> {
        let model = BlackScholes::new(*market);
        let strike = option.strike();
        let expiry = option.expiry();
        let is_call = option.is_call();

        let price = model.price(option);
        if !price.is_finite() {
            return Err(PricingError::NumericalInstability(format!(
                "Black-Scholes price is not finite (K = {}, T = {})",
                strike, expiry
            )));
        }

        let greeks = Greeks {
            delta: Some(model.delta(strike, expiry, is_call)),
            gamma: Some(model.gamma(strike, expiry)),
            vega: Some(model.vega(strike, expiry) / PER_PERCENT),
            theta: Some(model.theta(strike, expiry, is_call) / DAYS_PER_YEAR),
            rho: Some(model.rho(strike, expiry, is_call) / PER_PERCENT),
        };

        Ok(PricingResult::deterministic(price, greeks, "Black-Scholes"))
    }

    fn name(&self) -> String {
        "Black-Scholes Analytical".to_string()
    }
}
