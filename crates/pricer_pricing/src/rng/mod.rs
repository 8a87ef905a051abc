//! # Random Number Generation
//!
//! Seeded pseudo-random number generation for the Monte Carlo engine.
//!
//! - **Reproducibility**: every generator is seeded; a fresh generator with
//!   the same seed replays the same stream
//! - **Efficiency**: batch draws via `&mut [f64]` slices, no allocation
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let mut shocks = [0.0; 256];
//! rng.fill_normal(&mut shocks);
//! ```

mod prng;

pub use prng::PricerRng;
