//! Bench command: convergence and throughput of the engines.
//!
//! Wall-clock figures from a single process run. The criterion benches in
//! `pricer_pricing` give statistically sound timings.

use pricer_models::instruments::{EuropeanOption, OptionType};
use pricer_models::market::MarketParameters;
use pricer_pricing::analytical::BlackScholesEngine;
use pricer_pricing::benchmark::{Benchmark, BenchmarkResult};
use pricer_pricing::engine::PricingEngine;
use pricer_pricing::mc::{MonteCarloEngine, SimulationParameters};
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Path counts of the convergence table.
pub const CONVERGENCE_PATHS: [usize; 6] = [1_000, 5_000, 10_000, 50_000, 100_000, 500_000];

/// Path counts of the Monte Carlo throughput runs.
pub const PERFORMANCE_PATHS: [usize; 3] = [1_000, 10_000, 100_000];

const BLACK_SCHOLES_ITERATIONS: usize = 100;
const MONTE_CARLO_ITERATIONS: usize = 10;

/// One row of the convergence table.
#[derive(Debug, Clone)]
pub struct ConvergenceRow {
    /// Simulated paths
    pub paths: usize,
    /// Timed Monte Carlo run
    pub run: BenchmarkResult,
    /// Absolute error against Black-Scholes
    pub error: f64,
    /// Error relative to the Black-Scholes price, in percent
    pub relative_error_pct: f64,
}

/// One timed run of the performance summary.
#[derive(Debug, Clone)]
pub struct PerformanceRow {
    /// Paths per pricing, `None` for the analytical engine
    pub paths: Option<usize>,
    /// Timed run
    pub run: BenchmarkResult,
}

impl PerformanceRow {
    /// Simulated paths per second of wall-clock time.
    pub fn paths_per_second(&self) -> Option<f64> {
        self.paths.map(|paths| paths as f64 * self.run.iterations_per_second())
    }
}

fn standard_case() -> Result<(EuropeanOption, MarketParameters)> {
    Ok((
        EuropeanOption::new(105.0, OptionType::Call, 1.0),
        MarketParameters::new(100.0, 0.05, 0.2)?,
    ))
}

/// Run the bench command
pub fn run(config: &CliConfig) -> Result<()> {
    let (exact, rows) = convergence(config.seed, &CONVERGENCE_PATHS)?;
    print!("{}", render_convergence(exact, &rows));

    let runs = performance(config.seed, &PERFORMANCE_PATHS)?;
    print!("{}", render_performance(&runs));
    Ok(())
}

/// Black-Scholes price and one timed Monte Carlo run per path count.
pub fn convergence(seed: u64, path_counts: &[usize]) -> Result<(f64, Vec<ConvergenceRow>)> {
    let (call, market) = standard_case()?;
    let exact = BlackScholesEngine::new().price(&call, &market)?.price();

    let mut bench = Benchmark::new();
    let mut rows = Vec::with_capacity(path_counts.len());

    for &paths in path_counts {
        info!(paths, "Convergence run");
        let engine = MonteCarloEngine::new(SimulationParameters::new(paths, seed)?);
        let run = bench.run(format!("MC {}", paths), 1, || {
            Ok(engine.price(&call, &market)?.price())
        })?;

        let error = (run.price - exact).abs();
        rows.push(ConvergenceRow {
            paths,
            error,
            relative_error_pct: error / exact * 100.0,
            run,
        });
    }

    Ok((exact, rows))
}

/// Timed Black-Scholes run followed by one Monte Carlo run per path count.
pub fn performance(seed: u64, path_counts: &[usize]) -> Result<Vec<PerformanceRow>> {
    let (call, market) = standard_case()?;
    let mut bench = Benchmark::new();
    let mut rows = Vec::with_capacity(path_counts.len() + 1);

    let analytical = BlackScholesEngine::new();
    let run = bench.run("Black-Scholes", BLACK_SCHOLES_ITERATIONS, || {
        Ok(analytical.price(&call, &market)?.price())
    })?;
    rows.push(PerformanceRow { paths: None, run });

    for &paths in path_counts {
        let engine = MonteCarloEngine::new(SimulationParameters::new(paths, seed)?);
        let run = bench.run(engine.name(), MONTE_CARLO_ITERATIONS, || {
            Ok(engine.price(&call, &market)?.price())
        })?;
        rows.push(PerformanceRow {
            paths: Some(paths),
            run,
        });
    }

    Ok(rows)
}

/// Console table for [`convergence`].
pub fn render_convergence(exact: f64, rows: &[ConvergenceRow]) -> String {
    let mut out = String::from("\n== Convergence Benchmark ==\n\n");
    out.push_str(&format!("Black-Scholes Price: ${:.4}\n\n", exact));
    out.push_str(&format!(
        "{:>10}{:>15}{:>15}{:>15}{:>15}\n",
        "Paths", "Price", "Error", "Rel Error %", "Time (ms)"
    ));
    out.push_str(&"-".repeat(70));
    out.push('\n');

    for row in rows {
        out.push_str(&format!(
            "{:>10}{:>15.4}{:>15.4}{:>15.4}{:>15.4}\n",
            row.paths,
            row.run.price,
            row.error,
            row.relative_error_pct,
            row.run.time_milliseconds()
        ));
    }

    out
}

/// Console summary for [`performance`].
pub fn render_performance(rows: &[PerformanceRow]) -> String {
    let mut out = String::from("\n== Performance Benchmark ==\n\n");

    for row in rows {
        out.push_str(&format!("{}:\n", row.run.name));
        out.push_str(&format!(
            "  Time per pricing: {:.4} ms\n",
            row.run.time_per_iteration_milliseconds()
        ));
        match row.paths_per_second() {
            Some(rate) => out.push_str(&format!("  Paths per second: {:.3e}\n\n", rate)),
            None => out.push_str(&format!(
                "  Pricings per second: {:.3e}\n\n",
                row.run.iterations_per_second()
            )),
        }
    }

    out
}
