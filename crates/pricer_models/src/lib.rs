//! # Pricer Models (L2: Business Logic)
//!
//! European option contracts, market parameters and the closed-form
//! Black-Scholes model.
//!
//! This crate provides:
//! - [`instruments::EuropeanOption`] and [`instruments::OptionType`]
//! - [`market::MarketParameters`], validated on construction
//! - [`analytical::BlackScholes`] with price and raw Greeks
//!
//! ## Design Principles
//!
//! - **Validate at the boundary**: market inputs are checked once, in
//!   `MarketParameters::new`, and never again downstream
//! - **Immutable values**: contracts and market snapshots are `Copy`
//!   and re-bumped through `with_*` constructors

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod market;
