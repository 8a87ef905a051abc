//! Monte Carlo pricing engine.
//!
//! Simulates terminal spots under risk-neutral geometric Brownian motion in
//! a single step, averages the payoffs and discounts the mean and its
//! standard error to today.

use std::cell::RefCell;

use pricer_core::math::{discount_to_present, drift_term, simulate_gbm, volatility_term};
use pricer_core::types::PricingError;
use pricer_models::instruments::EuropeanOption;
use pricer_models::market::MarketParameters;
use tracing::debug;

use super::config::SimulationParameters;
use crate::engine::PricingEngine;
use crate::result::PricingResult;
use crate::rng::PricerRng;

/// Monte Carlo engine for European options.
///
/// The generator is seeded once at construction and advances across calls:
/// two consecutive `price` calls on one engine draw different samples,
/// while a fresh engine with the same parameters replays the first call
/// exactly. The generator sits in a `RefCell`, so the engine is `!Sync`
/// and cannot be shared between threads.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{EuropeanOption, OptionType};
/// use pricer_models::market::MarketParameters;
/// use pricer_pricing::engine::PricingEngine;
/// use pricer_pricing::mc::{MonteCarloEngine, SimulationParameters};
///
/// let params = SimulationParameters::new(50_000, 42).unwrap();
/// let engine = MonteCarloEngine::new(params);
///
/// let option = EuropeanOption::new(105.0, OptionType::Call, 1.0);
/// let market = MarketParameters::new(100.0, 0.05, 0.2).unwrap();
///
/// let result = engine.price(&option, &market).unwrap();
/// assert_eq!(result.paths_used(), Some(50_000));
/// assert!((result.price() - 8.02).abs() < 5.0 * result.standard_error().unwrap());
/// ```
#[derive(Debug)]
pub struct MonteCarloEngine {
    params: SimulationParameters,
    rng: RefCell<PricerRng>,
}

impl MonteCarloEngine {
    /// Creates an engine whose generator is seeded from `params`.
    pub fn new(params: SimulationParameters) -> Self {
        debug!(
            num_paths = params.num_paths(),
            seed = params.seed(),
            "Monte Carlo engine initialised"
        );

        Self {
            rng: RefCell::new(PricerRng::from_seed(params.seed())),
            params,
        }
    }

    /// Returns the simulation parameters.
    #[inline]
    pub fn parameters(&self) -> &SimulationParameters {
        &self.params
    }
}

impl PricingEngine for MonteCarloEngine {
    fn price(
        &self,
        option: &EuropeanOption,
        market: &MarketParameters,
    ) -> Result<PricingResult, PricingError> {
        let n_paths = self.params.num_paths();
        let spot = market.spot();
        let rate = market.rate();
        let vol = market.volatility();
        let expiry = option.expiry();

        // Shocks first, then mapped to payoffs in place
        let mut samples = vec![0.0; n_paths];
        self.rng.borrow_mut().fill_normal(&mut samples);

        let drift = drift_term(rate, vol, expiry);
        for sample in samples.iter_mut() {
            let terminal = simulate_gbm(spot, drift, volatility_term(vol, expiry, *sample));
            *sample = option.payoff(terminal);
        }

        let mean = samples.iter().sum::<f64>() / n_paths as f64;

        // Unbiased estimator is undefined for a single path
        let variance = if n_paths > 1 {
            samples.iter().map(|&p| (p - mean).powi(2)).sum::<f64>() / (n_paths - 1) as f64
        } else {
            0.0
        };
        let std_error = (variance / n_paths as f64).sqrt();

        let price = discount_to_present(mean, rate, expiry);
        let standard_error = discount_to_present(std_error, rate, expiry);

        if !price.is_finite() || !standard_error.is_finite() {
            return Err(PricingError::NumericalInstability(format!(
                "Monte Carlo estimate is not finite after {} paths",
                n_paths
            )));
        }

        debug!(
            num_paths = n_paths,
            price,
            standard_error,
            "Monte Carlo simulation complete"
        );

        Ok(PricingResult::stochastic(
            price,
            standard_error,
            n_paths,
            "Monte Carlo",
        ))
    }

    fn name(&self) -> String {
        format!("Monte Carlo ({} paths)", self.params.num_paths())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_models::instruments::OptionType;

    fn create_test_engine(paths: usize) -> MonteCarloEngine {
        MonteCarloEngine::new(SimulationParameters::new(paths, 42).unwrap())
    }

    fn market() -> MarketParameters {
        MarketParameters::new(100.0, 0.05, 0.2).unwrap()
    }

    #[test]
    fn test_result_shape() {
        let engine = create_test_engine(10_000);
        let option = EuropeanOption::new(100.0, OptionType::Call, 1.0);
        let result = engine.price(&option, &market()).unwrap();

        assert!(result.has_uncertainty());
        assert_eq!(result.paths_used(), Some(10_000));
        assert!(result.standard_error().unwrap() > 0.0);
        assert!(!result.greeks().has_greeks());
        assert_eq!(result.method_name(), "Monte Carlo");
    }

    #[test]
    fn test_name_includes_paths() {
        assert_eq!(create_test_engine(1_000).name(), "Monte Carlo (1000 paths)");
    }

    #[test]
    fn test_fresh_engines_reproduce() {
        let option = EuropeanOption::new(105.0, OptionType::Put, 1.0);
        let first = create_test_engine(5_000).price(&option, &market()).unwrap();
        let second = create_test_engine(5_000).price(&option, &market()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_consecutive_calls_advance_generator() {
        let engine = create_test_engine(5_000);
        let option = EuropeanOption::new(105.0, OptionType::Call, 1.0);
        let first = engine.price(&option, &market()).unwrap();
        let second = engine.price(&option, &market()).unwrap();
        assert_ne!(first.price(), second.price());
    }

    #[test]
    fn test_single_path_has_zero_standard_error() {
        let engine = create_test_engine(1);
        let option = EuropeanOption::new(100.0, OptionType::Call, 1.0);
        let result = engine.price(&option, &market()).unwrap();

        assert_eq!(result.standard_error(), Some(0.0));
        assert!(result.price() >= 0.0);
    }

    #[test]
    fn test_deep_otm_call_prices_zero() {
        let engine = create_test_engine(10_000);
        let option = EuropeanOption::new(10_000.0, OptionType::Call, 0.25);
        let result = engine.price(&option, &market()).unwrap();

        assert_eq!(result.price(), 0.0);
        assert_eq!(result.standard_error(), Some(0.0));
    }

    #[test]
    fn test_deep_itm_put_close_to_forward_intrinsic() {
        let engine = create_test_engine(50_000);
        let option = EuropeanOption::new(300.0, OptionType::Put, 1.0);
        let result = engine.price(&option, &market()).unwrap();

        // Always exercised: E[K - S_T] discounted = K·e^{-rT} - S
        let expected = 300.0 * (-0.05_f64).exp() - 100.0;
        assert!((result.price() - expected).abs() < 5.0 * result.standard_error().unwrap());
    }

    #[test]
    fn test_parameters_accessor() {
        let engine = create_test_engine(2_000);
        assert_eq!(engine.parameters().num_paths(), 2_000);
        assert_eq!(engine.parameters().seed(), 42);
    }
}
