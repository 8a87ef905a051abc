//! Closed-form pricing of European options.
//!
//! Provides the Black-Scholes model and its analytical Greeks. Used both as
//! the deterministic pricing engine and as the reference that simulation
//! results are checked against.

pub mod black_scholes;

pub use black_scholes::BlackScholes;
