//! Bump-and-reprice Greeks over any pricing engine.

use pricer_models::instruments::EuropeanOption;
use pricer_models::market::MarketParameters;
use tracing::{debug, trace};

use super::error::GreeksError;
use super::Greeks;
use crate::engine::PricingEngine;

/// Default relative spot bump and absolute vol/rate bump.
pub const DEFAULT_EPSILON: f64 = 0.01;

/// One calendar day in years.
const THETA_STEP: f64 = 1.0 / 365.0;

const DAYS_PER_YEAR: f64 = 365.0;
const PER_PERCENT: f64 = 100.0;

/// Finite-difference Greeks calculator.
///
/// Borrows an engine and re-prices under bumped inputs:
///
/// | Greek | Scheme | Bump |
/// |-------|--------|------|
/// | delta | forward | `h = S·ε` |
/// | gamma | central, centre re-priced | `h = S·ε` |
/// | vega  | forward, per 1% | `ε` absolute |
/// | theta | backward in expiry, per day | one day |
/// | rho   | forward, per 1% | `ε` absolute |
///
/// With a Monte Carlo engine every re-price draws fresh samples, so the
/// differences carry simulation noise on top of truncation error.
///
/// # Examples
///
/// ```rust
/// use pricer_models::instruments::{EuropeanOption, OptionType};
/// use pricer_models::market::MarketParameters;
/// use pricer_pricing::analytical::BlackScholesEngine;
/// use pricer_pricing::greeks::FiniteDifferenceGreeks;
///
/// let engine = BlackScholesEngine::new();
/// let option = EuropeanOption::new(105.0, OptionType::Call, 1.0);
/// let market = MarketParameters::new(100.0, 0.05, 0.2).unwrap();
///
/// let greeks = FiniteDifferenceGreeks::new(&engine)
///     .calculate(&option, &market)
///     .unwrap();
/// assert!((greeks.delta.unwrap() - 0.5422).abs() < 1e-2);
/// ```
#[derive(Debug)]
pub struct FiniteDifferenceGreeks<'a, E: PricingEngine + ?Sized> {
    engine: &'a E,
    epsilon: f64,
}

impl<'a, E: PricingEngine + ?Sized> FiniteDifferenceGreeks<'a, E> {
    /// Creates a calculator with [`DEFAULT_EPSILON`].
    pub fn new(engine: &'a E) -> Self {
        Self {
            engine,
            epsilon: DEFAULT_EPSILON,
        }
    }

    /// Creates a calculator with a custom bump size.
    ///
    /// # Errors
    ///
    /// [`GreeksError::InvalidEpsilon`] if `epsilon` is not positive and
    /// finite.
    pub fn with_epsilon(engine: &'a E, epsilon: f64) -> Result<Self, GreeksError> {
        if !(epsilon > 0.0 && epsilon.is_finite()) {
            return Err(GreeksError::InvalidEpsilon { epsilon });
        }
        Ok(Self { engine, epsilon })
    }

    /// Returns the bump size.
    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Computes all five Greeks.
    ///
    /// # Errors
    ///
    /// Propagates engine failures and invalid bumped market parameters,
    /// for example `S - h <= 0` when `ε >= 1`.
    pub fn calculate(
        &self,
        option: &EuropeanOption,
        market: &MarketParameters,
    ) -> Result<Greeks, GreeksError> {
        let base = self.reprice(option, market)?;

        let greeks = Greeks {
            delta: Some(self.delta(option, market, base)?),
            gamma: Some(self.gamma(option, market)?),
            vega: Some(self.vega(option, market, base)?),
            theta: Some(self.theta(option, market, base)?),
            rho: Some(self.rho(option, market, base)?),
        };

        debug!(
            engine = %self.engine.name(),
            epsilon = self.epsilon,
            base,
            "Finite-difference Greeks computed"
        );

        Ok(greeks)
    }

    fn reprice(
        &self,
        option: &EuropeanOption,
        market: &MarketParameters,
    ) -> Result<f64, GreeksError> {
        Ok(self.engine.price(option, market)?.price())
    }

    fn spot_bump(&self, market: &MarketParameters) -> f64 {
        market.spot() * self.epsilon
    }

    fn delta(
        &self,
        option: &EuropeanOption,
        market: &MarketParameters,
        base: f64,
    ) -> Result<f64, GreeksError> {
        let h = self.spot_bump(market);
        let up = self.reprice(option, &market.with_spot(market.spot() + h)?)?;

        let delta = (up - base) / h;
        trace!(h, up, delta, "delta bump");
        Ok(delta)
    }

    fn gamma(
        &self,
        option: &EuropeanOption,
        market: &MarketParameters,
    ) -> Result<f64, GreeksError> {
        let h = self.spot_bump(market);
        let market_up = market.with_spot(market.spot() + h)?;
        let market_down = market.with_spot(market.spot() - h)?;

        let up = self.reprice(option, &market_up)?;
        let centre = self.reprice(option, market)?;
        let down = self.reprice(option, &market_down)?;

        let gamma = (up - 2.0 * centre + down) / (h * h);
        trace!(h, up, centre, down, gamma, "gamma bump");
        Ok(gamma)
    }

    fn vega(
        &self,
        option: &EuropeanOption,
        market: &MarketParameters,
        base: f64,
    ) -> Result<f64, GreeksError> {
        let bumped = market.with_volatility(market.volatility() + self.epsilon)?;
        let up = self.reprice(option, &bumped)?;

        let vega = (up - base) / self.epsilon / PER_PERCENT;
        trace!(up, vega, "vega bump");
        Ok(vega)
    }

    fn theta(
        &self,
        option: &EuropeanOption,
        market: &MarketParameters,
        base: f64,
    ) -> Result<f64, GreeksError> {
        // No room to step back a full day
        if option.expiry() <= THETA_STEP {
            return Ok(0.0);
        }

        let shorter = option.with_expiry(option.expiry() - THETA_STEP);
        let decayed = self.reprice(&shorter, market)?;

        let theta = (decayed - base) / THETA_STEP / DAYS_PER_YEAR;
        trace!(decayed, theta, "theta bump");
        Ok(theta)
    }

    fn rho(
        &self,
        option: &EuropeanOption,
        market: &MarketParameters,
        base: f64,
    ) -> Result<f64, GreeksError> {
        let bumped = market.with_rate(market.rate() + self.epsilon)?;
        let up = self.reprice(option, &bumped)?;

        let rho = (up - base) / self.epsilon / PER_PERCENT;
        trace!(up, rho, "rho bump");
        Ok(rho)
    }
}
