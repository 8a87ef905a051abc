//! pricer - European option pricing from the command line
//!
//! # Commands
//!
//! - `pricer price --spot S --strike K --rate r --vol σ --expiry T --type call|put --method bs|mc`
//! - `pricer demo` - closed form against Monte Carlo convergence
//! - `pricer bench` - convergence table and engine throughput
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate only wires command-line input and
//! configuration into `pricer_pricing` and prints the results.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::price::PriceArgs;
use config::CliConfig;

/// European option pricer
#[derive(Parser)]
#[command(name = "pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (default: ./pricer.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a single European option
    Price(PriceArgs),

    /// Black-Scholes vs Monte Carlo convergence demonstration
    Demo,

    /// Convergence and throughput benchmark
    Bench,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            eprintln!("Run 'pricer --help' for usage.");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = CliConfig::resolve(cli.config.as_deref())?;
    init_tracing(&config, cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Price(args) => commands::price::run(&args, &config),
        Commands::Demo => commands::demo::run(&config),
        Commands::Bench => commands::bench::run(&config),
    }
}

/// Installs the global subscriber on stderr, so stdout carries only results.
///
/// `--verbose` forces `debug`; otherwise `RUST_LOG` wins over the configured
/// level.
fn init_tracing(config: &CliConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_lowercase()))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
