//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//! - `norm_quantile`: Inverse CDF (Acklam rational approximation)
//! - `z_score`: Two-sided critical value for a confidence level

use statrs::function::erf::erfc;

use crate::types::DistributionError;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

// Acklam coefficients, central region numerator.
const A: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_690e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239e0,
];

// Central region denominator.
const B: [f64; 5] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
];

// Tail numerator.
const C: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838e0,
    -2.549_732_539_343_734e0,
    4.374_664_141_464_968e0,
    2.938_163_982_698_783e0,
];

// Tail denominator.
const D: [f64; 4] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996e0,
    3.754_408_661_907_416e0,
];

/// Lower breakpoint between the tail and central approximations.
const P_LOW: f64 = 0.02425;

/// Upper breakpoint between the central and tail approximations.
const P_HIGH: f64 = 1.0 - P_LOW;

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) using the complementary error function.
///
/// # Mathematical Definition
/// Φ(x) = (1/2) * erfc(-x / sqrt(2))
///
/// # Accuracy
/// The erfc evaluation is accurate to machine precision, so the lower tail
/// keeps full relative precision where `1 - Φ(-x)` would cancel to zero.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
/// assert!(norm_cdf(-3.0) < 0.01);
/// assert!(norm_cdf(3.0) > 0.99);
/// ```
#[inline]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_pdf;
///
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0) - 0.3989422804).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf(x: f64) -> f64 {
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Inverse of the standard normal CDF.
///
/// Uses Acklam's rational approximation, split into a lower tail
/// (`p < 0.02425`), a central region and an upper tail, each with its own
/// minimax rational polynomial. Relative error is below 1.15e-9.
///
/// # Errors
/// `DistributionError::InvalidProbability` unless `0 < p < 1`.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_quantile;
///
/// let z = norm_quantile(0.975).unwrap();
/// assert!((z - 1.959964).abs() < 1e-6);
///
/// assert!(norm_quantile(0.0).is_err());
/// assert!(norm_quantile(1.0).is_err());
/// ```
pub fn norm_quantile(p: f64) -> Result<f64, DistributionError> {
    // Written so that NaN is rejected as well.
    if !(p > 0.0 && p < 1.0) {
        return Err(DistributionError::InvalidProbability { p });
    }

    let x = if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        tail_ratio(q)
    } else if p <= P_HIGH {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -tail_ratio(q)
    };

    Ok(x)
}

#[inline]
fn tail_ratio(q: f64) -> f64 {
    (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
        / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
}

/// Two-sided critical value for a confidence level.
///
/// Returns `z` such that P(-z < Z < z) = `confidence_level`, i.e.
/// `norm_quantile((1 + c) / 2)`.
///
/// # Errors
/// `DistributionError::InvalidConfidenceLevel` unless `0 < c < 1`.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::z_score;
///
/// let z95 = z_score(0.95).unwrap();
/// assert!((z95 - 1.96).abs() < 1e-2);
/// ```
pub fn z_score(confidence_level: f64) -> Result<f64, DistributionError> {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(DistributionError::InvalidConfidenceLevel {
            level: confidence_level,
        });
    }

    norm_quantile((1.0 + confidence_level) / 2.0)
}
