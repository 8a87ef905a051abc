//! Financial instrument definitions.
//!
//! # Instrument Types
//!
//! - [`EuropeanOption`]: European call or put on a single underlying
//! - [`OptionType`]: Call/put flag carrying the terminal payoff
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{EuropeanOption, OptionType};
//!
//! let call = EuropeanOption::new(100.0, OptionType::Call, 1.0);
//! assert!(call.payoff(110.0) > 0.0);
//! ```

mod error;
mod payoff;
mod vanilla;

pub use error::InstrumentError;
pub use payoff::OptionType;
pub use vanilla::EuropeanOption;
