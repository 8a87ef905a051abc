//! Price command implementation
//!
//! Prices a single European option with the analytical or the Monte Carlo
//! engine. Monte Carlo results come with finite-difference Greeks and a
//! confidence interval.

use clap::{Args, ValueEnum};
use pricer_models::instruments::{EuropeanOption, OptionType};
use pricer_models::market::MarketParameters;
use pricer_pricing::analytical::BlackScholesEngine;
use pricer_pricing::engine::PricingEngine;
use pricer_pricing::greeks::{FiniteDifferenceGreeks, Greeks};
use pricer_pricing::mc::{MonteCarloEngine, SimulationParameters};
use pricer_pricing::result::PricingResult;
use serde::Serialize;
use tracing::info;

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Pricing method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    /// Black-Scholes closed form
    Bs,
    /// Monte Carlo simulation
    Mc,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Console lines
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Arguments of `pricer price`.
#[derive(Args, Debug, Clone)]
pub struct PriceArgs {
    /// Spot price of the underlying
    #[arg(long)]
    pub spot: f64,

    /// Strike price
    #[arg(long)]
    pub strike: f64,

    /// Continuously compounded risk-free rate (e.g. 0.05)
    #[arg(long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Volatility (e.g. 0.2)
    #[arg(long)]
    pub vol: f64,

    /// Time to expiry in years
    #[arg(long)]
    pub expiry: f64,

    /// Option type: call|c or put|p
    #[arg(long = "type", value_name = "TYPE")]
    pub option_type: OptionType,

    /// Pricing method
    #[arg(long, value_enum, default_value_t = Method::Bs)]
    pub method: Method,

    /// Monte Carlo paths (default from config)
    #[arg(long)]
    pub paths: Option<usize>,

    /// Monte Carlo seed (default from config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Finite-difference bump size (default from config)
    #[arg(long)]
    pub epsilon: Option<f64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Everything the price command reports.
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    /// Engine display name
    pub engine: String,
    /// Engine output
    pub result: PricingResult,
    /// Analytical or finite-difference Greeks
    pub greeks: Greeks,
    /// Level of `confidence_interval`, for stochastic results
    pub confidence_level: Option<f64>,
    /// Confidence interval, for stochastic results
    pub confidence_interval: Option<(f64, f64)>,
}

/// Run the price command
pub fn run(args: &PriceArgs, config: &CliConfig) -> Result<()> {
    info!(
        method = ?args.method,
        option_type = %args.option_type,
        "Starting pricing"
    );

    let report = evaluate(args, config)?;

    match args.format {
        OutputFormat::Text => print!("{}", render_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    info!("Pricing complete");
    Ok(())
}

/// Price according to `args`, falling back to `config` for unset options.
pub fn evaluate(args: &PriceArgs, config: &CliConfig) -> Result<PriceReport> {
    if !(args.strike > 0.0 && args.strike.is_finite()) {
        return Err(CliError::InvalidArgument(format!(
            "strike must be positive, got {}",
            args.strike
        )));
    }
    if !(args.expiry > 0.0 && args.expiry.is_finite()) {
        return Err(CliError::InvalidArgument(format!(
            "expiry must be positive, got {}",
            args.expiry
        )));
    }

    let option = EuropeanOption::new(args.strike, args.option_type, args.expiry);
    let market = MarketParameters::new(args.spot, args.rate, args.vol)?;

    match args.method {
        Method::Bs => {
            let engine = BlackScholesEngine::new();
            let result = engine.price(&option, &market)?;
            Ok(PriceReport {
                engine: engine.name(),
                greeks: *result.greeks(),
                result,
                confidence_level: None,
                confidence_interval: None,
            })
        }
        Method::Mc => {
            let params = SimulationParameters::new(
                args.paths.unwrap_or(config.num_paths),
                args.seed.unwrap_or(config.seed),
            )?;
            let engine = MonteCarloEngine::new(params);
            let result = engine.price(&option, &market)?;

            let epsilon = args.epsilon.unwrap_or(config.epsilon);
            let greeks = FiniteDifferenceGreeks::with_epsilon(&engine, epsilon)?
                .calculate(&option, &market)?;

            let interval = result.confidence_interval(config.confidence_level)?;
            Ok(PriceReport {
                engine: engine.name(),
                result,
                greeks,
                confidence_level: Some(config.confidence_level),
                confidence_interval: Some(interval),
            })
        }
    }
}

/// Console rendering of a report.
pub fn render_text(report: &PriceReport) -> String {
    let mut out = format!("{}\n", report.result);

    if report.greeks.has_greeks() {
        out.push_str(&format!("{}\n", report.greeks));
    }

    if let (Some(level), Some((lower, upper))) =
        (report.confidence_level, report.confidence_interval)
    {
        out.push_str(&format!(
            "{:.1}% CI: [${:.4}, ${:.4}]\n",
            level * 100.0,
            lower,
            upper
        ));
    }

    out
}
