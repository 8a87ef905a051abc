//! Pricing engine capability.

use pricer_core::types::PricingError;
use pricer_models::instruments::EuropeanOption;
use pricer_models::market::MarketParameters;

use crate::result::PricingResult;

/// A model that prices a European option under given market conditions.
///
/// Implemented by [`BlackScholesEngine`](crate::analytical::BlackScholesEngine)
/// and [`MonteCarloEngine`](crate::mc::MonteCarloEngine). Consumers that
/// only need a price, such as
/// [`FiniteDifferenceGreeks`](crate::greeks::FiniteDifferenceGreeks), work
/// over any implementation, statically or through `&dyn PricingEngine`.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{EuropeanOption, OptionType};
/// use pricer_models::market::MarketParameters;
/// use pricer_pricing::analytical::BlackScholesEngine;
/// use pricer_pricing::engine::PricingEngine;
///
/// let option = EuropeanOption::new(105.0, OptionType::Call, 1.0);
/// let market = MarketParameters::new(100.0, 0.05, 0.2).unwrap();
///
/// let engine: &dyn PricingEngine = &BlackScholesEngine::new();
/// let result = engine.price(&option, &market).unwrap();
/// assert!((result.price() - 8.0214).abs() < 1e-4);
/// ```
pub trait PricingEngine {
    /// Prices `option` under `market`.
    ///
    /// Engines never mutate their inputs.
    fn price(
        &self,
        option: &EuropeanOption,
        market: &MarketParameters,
    ) -> Result<PricingResult, PricingError>;

    /// Human-readable engine name.
    fn name(&self) -> String;
}
