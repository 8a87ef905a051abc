//! Closed-form pricing engine.

mod black_scholes;

pub use black_scholes::BlackScholesEngine;
