//! # Pricer Pricing (L3: Engines)
//!
//! Pricing engines for European options and the tooling built on them.
//!
//! - [`engine::PricingEngine`]: the capability every engine implements
//! - [`analytical::BlackScholesEngine`]: closed-form price with Greeks
//! - [`mc::MonteCarloEngine`]: simulated price with standard error
//! - [`greeks::FiniteDifferenceGreeks`]: bump-and-reprice over any engine
//! - [`result::PricingResult`]: exact or stochastic outcome, confidence
//!   intervals
//! - [`benchmark`]: wall-clock timing of repeated pricing calls
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::instruments::{EuropeanOption, OptionType};
//! use pricer_models::market::MarketParameters;
//! use pricer_pricing::analytical::BlackScholesEngine;
//! use pricer_pricing::engine::PricingEngine;
//! use pricer_pricing::greeks::FiniteDifferenceGreeks;
//! use pricer_pricing::mc::{MonteCarloEngine, SimulationParameters};
//!
//! let option = EuropeanOption::new(105.0, OptionType::Call, 1.0);
//! let market = MarketParameters::new(100.0, 0.05, 0.2).unwrap();
//!
//! let exact = BlackScholesEngine::new().price(&option, &market).unwrap();
//!
//! let mc = MonteCarloEngine::new(SimulationParameters::new(100_000, 42).unwrap());
//! let estimate = mc.price(&option, &market).unwrap();
//! let greeks = FiniteDifferenceGreeks::new(&mc).calculate(&option, &market).unwrap();
//!
//! assert!((estimate.price() - exact.price()).abs() < 4.0 * estimate.standard_error().unwrap());
//! assert!(greeks.has_greeks());
//! ```
//!
//! ## Threading
//!
//! Everything here is synchronous. [`mc::MonteCarloEngine`] owns mutable
//! generator state and is `!Sync`; parallel callers build one engine per
//! thread with independent seeds.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod benchmark;
pub mod engine;
pub mod greeks;
pub mod mc;
pub mod result;
pub mod rng;

// Re-export commonly used items for convenience
pub use analytical::BlackScholesEngine;
pub use engine::PricingEngine;
pub use greeks::{FiniteDifferenceGreeks, Greeks, GreeksError};
pub use mc::{ConfigError, MonteCarloEngine, SimulationParameters};
pub use result::PricingResult;
