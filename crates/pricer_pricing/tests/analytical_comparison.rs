//! Analytical comparison tests for the pricing engines.
//!
//! These tests verify that Monte Carlo prices converge to the Black-Scholes
//! closed form and that finite-difference Greeks agree with the analytical
//! ones.
//!
//! # Test Categories
//!
//! 1. **Put-call parity** on the analytical engine
//! 2. **Convergence**: MC error bounded by its reported standard error
//! 3. **Reproducibility** of the seeded generator
//! 4. **Confidence intervals**
//! 5. **Finite-difference Greeks** vs closed forms

use approx::assert_relative_eq;
use pricer_models::instruments::{EuropeanOption, OptionType};
use pricer_models::market::MarketParameters;
use pricer_pricing::analytical::BlackScholesEngine;
use pricer_pricing::engine::PricingEngine;
use pricer_pricing::greeks::FiniteDifferenceGreeks;
use pricer_pricing::mc::{MonteCarloEngine, SimulationParameters};
use proptest::prelude::*;

/// Call K=105, T=1 under S=100, r=5%, σ=20%.
fn standard_case() -> (EuropeanOption, MarketParameters) {
    (
        EuropeanOption::new(105.0, OptionType::Call, 1.0),
        MarketParameters::new(100.0, 0.05, 0.2).unwrap(),
    )
}

fn mc_engine(paths: usize, seed: u64) -> MonteCarloEngine {
    MonteCarloEngine::new(SimulationParameters::new(paths, seed).unwrap())
}

// ============================================================================
// Put-Call Parity
// ============================================================================

#[test]
fn test_put_call_parity_reference() {
    let market = MarketParameters::new(100.0, 0.05, 0.2).unwrap();
    let engine = BlackScholesEngine::new();

    let call = engine
        .price(&EuropeanOption::new(105.0, OptionType::Call, 1.0), &market)
        .unwrap();
    let put = engine
        .price(&EuropeanOption::new(105.0, OptionType::Put, 1.0), &market)
        .unwrap();

    let forward = 100.0 - 105.0 * (-0.05_f64).exp();
    assert_relative_eq!(call.price() - put.price(), forward, epsilon = 1e-10);
}

proptest! {
    #[test]
    fn prop_engine_put_call_parity(
        spot in 20.0f64..300.0,
        strike in 20.0f64..300.0,
        rate in 0.0f64..0.1,
        vol in 0.05f64..0.8,
        expiry in 0.1f64..3.0,
    ) {
        let market = MarketParameters::new(spot, rate, vol).unwrap();
        let engine = BlackScholesEngine::new();

        let call_option = EuropeanOption::new(strike, OptionType::Call, expiry);
        let put_option = EuropeanOption::new(strike, OptionType::Put, expiry);
        let call = engine.price(&call_option, &market).unwrap();
        let put = engine.price(&put_option, &market).unwrap();

        let forward = spot - strike * (-rate * expiry).exp();
        prop_assert!((call.price() - put.price() - forward).abs() < 1e-9 * spot.max(strike));

        // Gamma and vega do not depend on the option type
        prop_assert!((call.greeks().gamma.unwrap() - put.greeks().gamma.unwrap()).abs() < 1e-12);
        prop_assert!((call.greeks().vega.unwrap() - put.greeks().vega.unwrap()).abs() < 1e-12);
    }
}

// ============================================================================
// Convergence Tests
// ============================================================================

#[test]
fn test_mc_converges_to_black_scholes() {
    let (option, market) = standard_case();
    let exact = BlackScholesEngine::new().price(&option, &market).unwrap().price();

    let mut previous_se = f64::INFINITY;
    for paths in [1_000, 10_000, 100_000, 1_000_000] {
        let result = mc_engine(paths, 42).price(&option, &market).unwrap();
        let se = result.standard_error().unwrap();
        let error = (result.price() - exact).abs();

        assert!(
            error < 4.0 * se,
            "paths={}: MC={:.4}, BS={:.4}, error={:.4}, se={:.4}",
            paths,
            result.price(),
            exact,
            error,
            se
        );
        assert!(se < previous_se);
        previous_se = se;
    }

    // Standard error shrinks like 1/√n: 1000x the paths, ~1/31.6 the error
    assert!(previous_se < 0.05);
}

#[test]
fn test_scenario_500k_paths() {
    let (option, market) = standard_case();
    let exact = BlackScholesEngine::new().price(&option, &market).unwrap();
    assert_relative_eq!(exact.price(), 8.02, epsilon = 5e-3);

    let result = mc_engine(500_000, 42).price(&option, &market).unwrap();
    let se = result.standard_error().unwrap();

    assert_eq!(result.paths_used(), Some(500_000));
    assert!(
        (result.price() - exact.price()).abs() < 2.0 * se,
        "MC={:.4}, BS={:.4}, se={:.4}",
        result.price(),
        exact.price(),
        se
    );
}

#[test]
fn test_mc_put_converges() {
    let market = MarketParameters::new(100.0, 0.05, 0.2).unwrap();
    let option = EuropeanOption::new(105.0, OptionType::Put, 1.0);

    let exact = BlackScholesEngine::new().price(&option, &market).unwrap().price();
    let result = mc_engine(200_000, 7).price(&option, &market).unwrap();

    assert!((result.price() - exact).abs() < 4.0 * result.standard_error().unwrap());
}

// ============================================================================
// Reproducibility
// ============================================================================

#[test]
fn test_fresh_engines_are_reproducible() {
    let (option, market) = standard_case();

    let first = mc_engine(10_000, 123).price(&option, &market).unwrap();
    let second = mc_engine(10_000, 123).price(&option, &market).unwrap();

    assert_eq!(first.price(), second.price());
    assert_eq!(first.standard_error(), second.standard_error());
}

#[test]
fn test_consecutive_calls_are_not_reproducible() {
    let (option, market) = standard_case();
    let engine = mc_engine(10_000, 123);

    let first = engine.price(&option, &market).unwrap();
    let second = engine.price(&option, &market).unwrap();

    assert_ne!(first.price(), second.price());
}

#[test]
fn test_different_seeds_differ() {
    let (option, market) = standard_case();

    let a = mc_engine(10_000, 1).price(&option, &market).unwrap();
    let b = mc_engine(10_000, 2).price(&option, &market).unwrap();

    assert_ne!(a.price(), b.price());
}

// ============================================================================
// Confidence Intervals
// ============================================================================

#[test]
fn test_ci_width_monotonic_in_level() {
    let (option, market) = standard_case();
    let result = mc_engine(50_000, 42).price(&option, &market).unwrap();

    let width = |level: f64| {
        let (lower, upper) = result.confidence_interval(level).unwrap();
        upper - lower
    };

    assert!(width(0.99) > width(0.95));
    assert!(width(0.95) > width(0.90));
}

#[test]
fn test_ci_brackets_estimate() {
    let (option, market) = standard_case();
    let result = mc_engine(50_000, 42).price(&option, &market).unwrap();

    let (lower, upper) = result.confidence_interval(0.95).unwrap();
    let se = result.standard_error().unwrap();

    assert_relative_eq!(upper - result.price(), 1.959_963_984_540_054 * se, max_relative = 1e-8);
    assert_relative_eq!(result.price() - lower, upper - result.price(), max_relative = 1e-12);
}

#[test]
fn test_deterministic_ci_collapses() {
    let (option, market) = standard_case();
    let result = BlackScholesEngine::new().price(&option, &market).unwrap();

    assert_eq!(
        result.confidence_interval(0.95).unwrap(),
        (result.price(), result.price())
    );
    assert!(result.confidence_interval(1.0).is_err());
}

// ============================================================================
// Finite-Difference Greeks vs Closed Form
// ============================================================================

#[test]
fn test_fd_on_analytical_matches_closed_form() {
    let engine = BlackScholesEngine::new();
    let (option, market) = standard_case();

    let analytical = *engine.price(&option, &market).unwrap().greeks();
    let numerical = FiniteDifferenceGreeks::with_epsilon(&engine, 0.01)
        .unwrap()
        .calculate(&option, &market)
        .unwrap();

    // Forward differencing at h = 1: error ≈ Γ·h/2
    assert!((numerical.delta.unwrap() - analytical.delta.unwrap()).abs() < 1e-2);
    assert!((numerical.gamma.unwrap() - analytical.gamma.unwrap()).abs() < 1e-4);
    assert!((numerical.vega.unwrap() - analytical.vega.unwrap()).abs() < 1e-3);
    assert!((numerical.theta.unwrap() - analytical.theta.unwrap()).abs() < 1e-4);
    assert!((numerical.rho.unwrap() - analytical.rho.unwrap()).abs() < 1e-2);
}

#[test]
fn test_fd_tightens_with_smaller_bump() {
    let engine = BlackScholesEngine::new();
    let (option, market) = standard_case();

    let analytical = engine.price(&option, &market).unwrap().greeks().delta.unwrap();
    let coarse = FiniteDifferenceGreeks::with_epsilon(&engine, 0.01)
        .unwrap()
        .calculate(&option, &market)
        .unwrap()
        .delta
        .unwrap();
    let fine = FiniteDifferenceGreeks::with_epsilon(&engine, 0.001)
        .unwrap()
        .calculate(&option, &market)
        .unwrap()
        .delta
        .unwrap();

    assert!((fine - analytical).abs() < (coarse - analytical).abs());
    assert!((fine - analytical).abs() < 2e-3);
}

#[test]
fn test_fd_on_mc_has_sensible_signs() {
    let (option, market) = standard_case();
    let engine = mc_engine(200_000, 42);

    let greeks = FiniteDifferenceGreeks::new(&engine)
        .calculate(&option, &market)
        .unwrap();

    // Call delta lies in (0, 1) even with simulation noise at this path count
    let delta = greeks.delta.unwrap();
    assert!(delta > 0.0 && delta < 1.0, "delta = {}", delta);
    assert!(greeks.vega.unwrap() > 0.0);
    assert!(greeks.rho.unwrap() > 0.0);
}
