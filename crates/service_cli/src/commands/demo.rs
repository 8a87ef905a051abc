//! Demo command: closed form against Monte Carlo convergence.
//!
//! Prices a 1Y call struck at 105 with spot 110, 5% rate and 20% vol,
//! first in closed form and then by simulation at increasing path counts
//! with finite-difference Greeks.

use pricer_models::instruments::{EuropeanOption, OptionType};
use pricer_models::market::MarketParameters;
use pricer_pricing::analytical::BlackScholesEngine;
use pricer_pricing::engine::PricingEngine;
use pricer_pricing::greeks::FiniteDifferenceGreeks;
use pricer_pricing::mc::{MonteCarloEngine, SimulationParameters};
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Path counts of the convergence section.
pub const DEMO_PATHS: [usize; 3] = [10_000, 100_000, 1_000_000];

/// Runs the demonstration.
pub fn run(config: &CliConfig) -> Result<()> {
    print!("{}", render(config, &DEMO_PATHS)?);
    Ok(())
}

/// Builds the demo output for the given path counts.
pub fn render(config: &CliConfig, path_counts: &[usize]) -> Result<String> {
    let call = EuropeanOption::new(105.0, OptionType::Call, 1.0);
    let market = MarketParameters::new(110.0, 0.05, 0.2)?;

    let mut out = String::new();
    out.push_str("Option Pricing Demo\n");
    out.push_str("Configuration: Call $105 strike, $110 spot, 5% rate, 20% vol, 1Y expiry\n\n");

    out.push_str("Black-Scholes:\n");
    let bs_result = BlackScholesEngine::new().price(&call, &market)?;
    out.push_str(&format!("{}\n{}\n", bs_result, bs_result.greeks()));

    out.push_str("\nMonte Carlo Convergence:\n");
    for &paths in path_counts {
        info!(paths, "Running Monte Carlo");

        let engine = MonteCarloEngine::new(SimulationParameters::new(paths, config.seed)?);
        let result = engine.price(&call, &market)?;
        let greeks = FiniteDifferenceGreeks::with_epsilon(&engine, config.epsilon)?
            .calculate(&call, &market)?;

        out.push_str(&format!("{}\n{}\n", result, greeks));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_sections() {
        let out = render(&CliConfig::default(), &[1_000, 2_000]).unwrap();

        assert!(out.starts_with("Option Pricing Demo\n"));
        assert!(out.contains("Black-Scholes:\nPrice: $14.3703 [Black-Scholes]\n"));
        assert!(out.contains("(1000 paths) [Monte Carlo]"));
        assert!(out.contains("(2000 paths) [Monte Carlo]"));
        assert_eq!(out.matches("Greeks:").count(), 3);
    }
}
