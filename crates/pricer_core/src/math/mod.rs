//! Mathematical utilities shared by the pricing engines.
//!
//! This module provides:
//! - `distributions`: Standard normal CDF, PDF, quantile and z-scores
//! - `lognormal`: Black-Scholes d₁/d₂ and GBM drift/diffusion helpers
//! - `discounting`: Continuous-compounding present value

pub mod discounting;
pub mod distributions;
pub mod lognormal;

pub use discounting::{discount_factor, discount_to_present};
pub use distributions::{norm_cdf, norm_pdf, norm_quantile, z_score};
pub use lognormal::{d1, d2, drift_term, simulate_gbm, volatility_term};
