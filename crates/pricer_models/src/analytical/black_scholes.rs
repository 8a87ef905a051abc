//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options with analytical Greeks calculations.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! All sensitivities are returned in raw units (per unit of spot,
//! volatility, year and rate). Market-quoting conventions are applied by
//! the pricing engines.

use pricer_core::math::{discount_factor, norm_cdf, norm_pdf};

use crate::instruments::{EuropeanOption, OptionType};
use crate::market::MarketParameters;

/// Expiries at or below this are treated as already expired.
const EXPIRY_EPSILON: f64 = 1e-10;

/// Black-Scholes model for European option pricing.
///
/// Wraps a validated [`MarketParameters`] snapshot, so construction cannot
/// fail.
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::market::MarketParameters;
///
/// let market = MarketParameters::new(100.0, 0.05, 0.2).unwrap();
/// let bs = BlackScholes::new(market);
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes {
    market: MarketParameters,
}

impl BlackScholes {
    /// Creates a new Black-Scholes model over a market snapshot.
    pub fn new(market: MarketParameters) -> Self {
        Self { market }
    }

    /// Returns the market snapshot.
    #[inline]
    pub fn market(&self) -> &MarketParameters {
        &self.market
    }

    /// Computes the d1 term of the Black-Scholes formula.
    ///
    /// For expiry ≈ 0 returns ±100 (or 0 at the money) as the limiting value.
    #[inline]
    pub fn d1(&self, strike: f64, expiry: f64) -> f64 {
        let spot = self.market.spot();

        if expiry <= EXPIRY_EPSILON {
            return if spot > strike {
                100.0
            } else if spot < strike {
                -100.0
            } else {
                0.0
            };
        }

        pricer_core::math::d1(
            spot,
            strike,
            self.market.rate(),
            self.market.volatility(),
            expiry,
        )
    }

    /// Computes the d2 term of the Black-Scholes formula.
    #[inline]
    pub fn d2(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return self.d1(strike, expiry);
        }

        pricer_core::math::d2(self.d1(strike, expiry), self.market.volatility(), expiry)
    }

    /// Computes European call option price.
    ///
    /// C = S·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    /// use pricer_models::market::MarketParameters;
    ///
    /// let market = MarketParameters::new(100.0, 0.05, 0.2).unwrap();
    /// let price = BlackScholes::new(market).price_call(105.0, 1.0);
    /// assert!((price - 8.0214).abs() < 1e-4);
    /// ```
    #[inline]
    pub fn price_call(&self, strike: f64, expiry: f64) -> f64 {
        let spot = self.market.spot();

        // Handle expiry = 0: return intrinsic value
        if expiry <= EXPIRY_EPSILON {
            return (spot - strike).max(0.0);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = discount_factor(self.market.rate(), expiry);

        spot * norm_cdf(d1) - strike * discount * norm_cdf(d2)
    }

    /// Computes European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
    #[inline]
    pub fn price_put(&self, strike: f64, expiry: f64) -> f64 {
        let spot = self.market.spot();

        if expiry <= EXPIRY_EPSILON {
            return (strike - spot).max(0.0);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = discount_factor(self.market.rate(), expiry);

        strike * discount * norm_cdf(-d2) - spot * norm_cdf(-d1)
    }

    /// Prices a European option.
    pub fn price(&self, option: &EuropeanOption) -> f64 {
        match option.option_type() {
            OptionType::Call => self.price_call(option.strike(), option.expiry()),
            OptionType::Put => self.price_put(option.strike(), option.expiry()),
        }
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = N(d₁)
    /// - Put Delta = N(d₁) - 1
    #[inline]
    pub fn delta(&self, strike: f64, expiry: f64, is_call: bool) -> f64 {
        let spot = self.market.spot();

        if expiry <= EXPIRY_EPSILON {
            return if is_call {
                if spot > strike { 1.0 } else { 0.0 }
            } else if spot < strike {
                -1.0
            } else {
                0.0
            };
        }

        let n_d1 = norm_cdf(self.d1(strike, expiry));

        if is_call {
            n_d1
        } else {
            n_d1 - 1.0
        }
    }

    /// Computes Gamma (∂²V/∂S²).
    ///
    /// Gamma = φ(d₁) / (S·σ·√T), identical for calls and puts.
    #[inline]
    pub fn gamma(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return 0.0;
        }

        let d1 = self.d1(strike, expiry);
        norm_pdf(d1) / (self.market.spot() * self.market.volatility() * expiry.sqrt())
    }

    /// Computes Vega (∂V/∂σ) per unit of volatility.
    ///
    /// Vega = S·√T·φ(d₁), identical for calls and puts.
    #[inline]
    pub fn vega(&self, strike: f64, expiry: f64) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return 0.0;
        }

        let d1 = self.d1(strike, expiry);
        self.market.spot() * expiry.sqrt() * norm_pdf(d1)
    }

    /// Computes Theta (∂V/∂t) per year of calendar time.
    ///
    /// - Call Theta = -(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂)
    /// - Put Theta = -(S·σ·φ(d₁))/(2√T) + r·K·e^(-rT)·N(-d₂)
    ///
    /// Usually negative (time decay).
    #[inline]
    pub fn theta(&self, strike: f64, expiry: f64, is_call: bool) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return 0.0;
        }

        let spot = self.market.spot();
        let rate = self.market.rate();
        let vol = self.market.volatility();

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let discount = discount_factor(rate, expiry);

        let term1 = -(spot * vol * norm_pdf(d1)) / (2.0 * expiry.sqrt());

        if is_call {
            term1 - rate * strike * discount * norm_cdf(d2)
        } else {
            term1 + rate * strike * discount * norm_cdf(-d2)
        }
    }

    /// Computes Rho (∂V/∂r) per unit of rate.
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂)
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂)
    #[inline]
    pub fn rho(&self, strike: f64, expiry: f64, is_call: bool) -> f64 {
        if expiry <= EXPIRY_EPSILON {
            return 0.0;
        }

        let d2 = self.d2(strike, expiry);
        let discount = discount_factor(self.market.rate(), expiry);

        if is_call {
            strike * expiry * discount * norm_cdf(d2)
        } else {
            -strike * expiry * discount * norm_cdf(-d2)
        }
    }
}
