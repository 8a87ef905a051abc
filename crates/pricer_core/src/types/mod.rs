//! Core error types.
//!
//! # Re-exports
//!
//! [`PricingError`] and [`DistributionError`] are re-exported at this level.

pub mod error;

pub use error::{DistributionError, PricingError};
