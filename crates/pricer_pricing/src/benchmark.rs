//! Wall-clock timing of repeated pricing calls.
//!
//! Backs the `pricer bench` command. For statistically robust numbers use
//! the criterion benches instead.
//!
//! # Usage
//!
//! ```rust
//! use pricer_models::instruments::{EuropeanOption, OptionType};
//! use pricer_models::market::MarketParameters;
//! use pricer_pricing::analytical::BlackScholesEngine;
//! use pricer_pricing::benchmark::Benchmark;
//! use pricer_pricing::engine::PricingEngine;
//!
//! let engine = BlackScholesEngine::new();
//! let option = EuropeanOption::new(105.0, OptionType::Call, 1.0);
//! let market = MarketParameters::new(100.0, 0.05, 0.2).unwrap();
//!
//! let mut bench = Benchmark::new();
//! let result = bench
//!     .run("Black-Scholes", 100, || Ok(engine.price(&option, &market)?.price()))
//!     .unwrap();
//! assert_eq!(result.iterations, 100);
//! ```

use std::time::Instant;

use pricer_core::types::PricingError;
use tracing::debug;

/// Timing of one benchmark run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BenchmarkResult {
    /// Label of the run.
    pub name: String,
    /// Total elapsed time over all timed iterations, in microseconds.
    pub time_microseconds: f64,
    /// Price returned by the last iteration.
    pub price: f64,
    /// Number of timed iterations (at least one).
    pub iterations: usize,
}

impl BenchmarkResult {
    /// Mean time per iteration in microseconds.
    #[inline]
    pub fn time_per_iteration_microseconds(&self) -> f64 {
        self.time_microseconds / self.iterations as f64
    }

    /// Mean time per iteration in milliseconds.
    #[inline]
    pub fn time_per_iteration_milliseconds(&self) -> f64 {
        self.time_per_iteration_microseconds() / 1_000.0
    }

    /// Total elapsed time in milliseconds.
    #[inline]
    pub fn time_milliseconds(&self) -> f64 {
        self.time_microseconds / 1_000.0
    }

    /// Throughput in iterations per second.
    #[inline]
    pub fn iterations_per_second(&self) -> f64 {
        self.iterations as f64 / (self.time_microseconds / 1_000_000.0)
    }
}

/// Benchmark runner that keeps every result it produced.
#[derive(Debug, Default)]
pub struct Benchmark {
    results: Vec<BenchmarkResult>,
}

impl Benchmark {
    /// Creates an empty runner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls `func` once untimed, then `iterations` times under the clock.
    ///
    /// The warm-up call counts against any stateful engine, e.g. it
    /// advances a Monte Carlo generator.
    ///
    /// # Errors
    ///
    /// [`PricingError::InvalidInput`] for zero iterations; otherwise the
    /// first error returned by `func`.
    pub fn run<F>(
        &mut self,
        name: impl Into<String>,
        iterations: usize,
        mut func: F,
    ) -> Result<BenchmarkResult, PricingError>
    where
        F: FnMut() -> Result<f64, PricingError>,
    {
        let name = name.into();
        if iterations == 0 {
            return Err(PricingError::InvalidInput(format!(
                "benchmark '{}' needs at least one iteration",
                name
            )));
        }

        func()?;

        let start = Instant::now();
        let mut last_price = 0.0;
        for _ in 0..iterations {
            last_price = func()?;
        }
        let elapsed = start.elapsed();

        let result = BenchmarkResult {
            name,
            time_microseconds: elapsed.as_secs_f64() * 1_000_000.0,
            price: last_price,
            iterations,
        };

        debug!(
            name = %result.name,
            iterations,
            time_us = result.time_microseconds,
            "Benchmark run complete"
        );

        self.results.push(result.clone());
        Ok(result)
    }

    /// All results so far, in run order.
    pub fn results(&self) -> &[BenchmarkResult] {
        &self.results
    }

    /// Forgets all results.
    pub fn clear(&mut self) {
        self.results.clear();
    }
}
