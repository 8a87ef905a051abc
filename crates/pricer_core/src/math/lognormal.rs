//! Lognormal (geometric Brownian motion) helpers.
//!
//! Shared by the closed-form Black-Scholes model and the Monte Carlo
//! engine. Callers are expected to have validated `spot > 0`, `strike > 0`,
//! `volatility > 0` and `time > 0`; otherwise the results are NaN or infinite.
//!
//! ## Terminal spot under GBM
//!
//! S_T = S_0 · exp((r - σ²/2)·T + σ·√T·Z), Z ~ N(0, 1)

/// Black-Scholes d₁ term.
///
/// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
///
/// # Examples
/// ```
/// use pricer_core::math::lognormal::d1;
///
/// // ATM, r = 0: d1 = σ√T / 2
/// assert!((d1(100.0, 100.0, 0.0, 0.2, 1.0) - 0.1).abs() < 1e-12);
/// ```
#[inline]
pub fn d1(spot: f64, strike: f64, rate: f64, volatility: f64, time: f64) -> f64 {
    ((spot / strike).ln() + (rate + 0.5 * volatility * volatility) * time)
        / (volatility * time.sqrt())
}

/// Black-Scholes d₂ term, d₂ = d₁ - σ√T.
#[inline]
pub fn d2(d1: f64, volatility: f64, time: f64) -> f64 {
    d1 - volatility * time.sqrt()
}

/// Risk-neutral log drift over `time`: (r - σ²/2)·T.
#[inline]
pub fn drift_term(rate: f64, volatility: f64, time: f64) -> f64 {
    (rate - 0.5 * volatility * volatility) * time
}

/// Diffusion contribution for a single standard normal shock: σ·√T·Z.
#[inline]
pub fn volatility_term(volatility: f64, time: f64, shock: f64) -> f64 {
    volatility * time.sqrt() * shock
}

/// Terminal spot from the log drift and diffusion terms.
///
/// # Examples
/// ```
/// use pricer_core::math::lognormal::{drift_term, simulate_gbm, volatility_term};
///
/// let drift = drift_term(0.05, 0.2, 1.0);
/// let diffusion = volatility_term(0.2, 1.0, 0.0);
/// let terminal = simulate_gbm(100.0, drift, diffusion);
/// assert!((terminal - 100.0 * 0.03_f64.exp()).abs() < 1e-12);
/// ```
#[inline]
pub fn simulate_gbm(spot: f64, drift: f64, vol_term: f64) -> f64 {
    spot * (drift + vol_term).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_d1_d2_reference_values() {
        // S=100, K=105, r=5%, σ=20%, T=1
        let d1 = d1(100.0, 105.0, 0.05, 0.2, 1.0);
        assert_relative_eq!(d1, 0.106_049_179_152_839_75, epsilon = 1e-12);
        assert_relative_eq!(d2(d1, 0.2, 1.0), -0.093_950_820_847_160_26, epsilon = 1e-12);
    }

    #[test]
    fn test_d2_scales_with_sqrt_time() {
        assert_relative_eq!(d2(0.5, 0.2, 4.0), 0.1, epsilon = 1e-15);
    }

    #[test]
    fn test_drift_term() {
        assert_relative_eq!(drift_term(0.05, 0.2, 2.0), 0.06, epsilon = 1e-15);
        // Zero-rate drift is the Itô correction only
        assert_relative_eq!(drift_term(0.0, 0.3, 1.0), -0.045, epsilon = 1e-15);
    }

    #[test]
    fn test_volatility_term() {
        assert_relative_eq!(volatility_term(0.2, 0.25, 1.5), 0.15, epsilon = 1e-15);
        assert_eq!(volatility_term(0.2, 1.0, 0.0), 0.0);
    }

    #[test]
    fn test_simulate_gbm_martingale_median() {
        // With zero shock the terminal spot is the median of the lognormal law.
        let drift = drift_term(0.05, 0.2, 1.0);
        let terminal = simulate_gbm(100.0, drift, 0.0);
        assert_relative_eq!(terminal, 100.0 * (0.03_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_simulate_gbm_positive_for_extreme_shocks() {
        for shock in [-10.0, -5.0, 5.0, 10.0] {
            let terminal = simulate_gbm(100.0, 0.0, volatility_term(0.5, 1.0, shock));
            assert!(terminal > 0.0 && terminal.is_finite());
        }
    }
}
