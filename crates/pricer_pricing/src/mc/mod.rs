//! Monte Carlo pricing of European options.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloEngine
//! ├── SimulationParameters  (path count, seed)
//! ├── PricerRng             (seeded normal shocks, advances across calls)
//! └── price()
//!     ├── terminal spot per path (single-step GBM)
//!     ├── payoff per path
//!     └── discounted mean and standard error
//! ```
//!
//! # Examples
//!
//! ```rust
//! use pricer_models::instruments::{EuropeanOption, OptionType};
//! use pricer_models::market::MarketParameters;
//! use pricer_pricing::engine::PricingEngine;
//! use pricer_pricing::mc::{MonteCarloEngine, SimulationParameters};
//!
//! let engine = MonteCarloEngine::new(SimulationParameters::default());
//! let option = EuropeanOption::new(100.0, OptionType::Put, 0.5);
//! let market = MarketParameters::new(100.0, 0.03, 0.25).unwrap();
//!
//! let result = engine.price(&option, &market).unwrap();
//! let (lower, upper) = result.confidence_interval(0.99).unwrap();
//! assert!(lower < result.price() && result.price() < upper);
//! ```

mod config;
mod error;
mod pricer;

pub use config::{
    SimulationParameters, SimulationParametersBuilder, DEFAULT_NUM_PATHS, DEFAULT_SEED, MAX_PATHS,
};
pub use error::ConfigError;
pub use pricer::MonteCarloEngine;
