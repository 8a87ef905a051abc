//! # pricer_core: Numeric Foundation for European Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Standard normal distribution functions (`math::distributions`)
//! - Lognormal / GBM helpers and Black-Scholes auxiliary terms (`math::lognormal`)
//! - Present-value discounting (`math::discounting`)
//! - Error types: `PricingError`, `DistributionError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - statrs: Full-precision complementary error function
//! - thiserror: Error derivation
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::{norm_cdf, z_score};
//!
//! assert!((norm_cdf(0.0) - 0.5).abs() < 1e-15);
//!
//! let z = z_score(0.95).unwrap();
//! assert!((z - 1.959964).abs() < 1e-6);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
