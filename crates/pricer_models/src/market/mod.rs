//! Market state consumed by the pricing engines.
//!
//! - [`MarketParameters`]: validated spot / rate / volatility snapshot
//! - [`MarketError`]: validation failures

mod error;
mod params;

pub use error::MarketError;
pub use params::MarketParameters;
