//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported
//! and accessible via absolute paths.

/// Distribution functions are reachable both from the submodule and the re-export.
#[test]
fn test_distribution_exports() {
    use pricer_core::math::distributions::{norm_cdf, norm_pdf, norm_quantile, z_score};

    let _ = norm_cdf(0.0);
    let _ = norm_pdf(0.0);
    assert!(norm_quantile(0.5).is_ok());
    assert!(z_score(0.95).is_ok());

    assert_eq!(pricer_core::math::norm_cdf(1.0), norm_cdf(1.0));
}

/// Lognormal helpers and discounting compose into a terminal spot and PV.
#[test]
fn test_lognormal_and_discounting_exports() {
    use pricer_core::math::discounting::discount_to_present;
    use pricer_core::math::lognormal::{d1, d2, drift_term, simulate_gbm, volatility_term};

    let d1 = d1(100.0, 100.0, 0.05, 0.2, 1.0);
    let _ = d2(d1, 0.2, 1.0);

    let terminal = simulate_gbm(
        100.0,
        drift_term(0.05, 0.2, 1.0),
        volatility_term(0.2, 1.0, 0.3),
    );
    let pv = discount_to_present(terminal, 0.05, 1.0);
    assert!(pv > 0.0 && pv < terminal);
}

/// Error types convert into the umbrella error.
#[test]
fn test_error_exports() {
    use pricer_core::types::error::{DistributionError, PricingError};

    let err = pricer_core::math::norm_quantile(0.0).unwrap_err();
    assert_eq!(err, DistributionError::InvalidProbability { p: 0.0 });

    let pricing: PricingError = err.into();
    assert!(pricing.to_string().contains("Probability"));
}
