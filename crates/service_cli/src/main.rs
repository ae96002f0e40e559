//! Option Valuation CLI
//!
//! Values European vanilla and binary options on a Black-Scholes stock with
//! plain, antithetic and stratified Monte Carlo, next to the closed form.
//!
//! # Commands
//!
//! - `option-valuation value` - Value the reference options with every model
//! - `option-valuation variance --runs <N>` - Compare standard errors over repeated runs
//! - `option-valuation check` - Validate and print the resolved configuration
//!
//! # Configuration
//!
//! Settings come from, in increasing priority: defaults, a TOML file given by
//! `--config`, the `OPTION_VALUATION_*` environment variables, and CLI flags.
//! `RUST_LOG` overrides the configured log level.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

/// European option valuation with Monte Carlo variance reduction
#[derive(Parser)]
#[command(name = "option-valuation")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Base seed for all generator streams
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Value the reference options with the closed form and every model
    Value,

    /// Compare model standard errors over repeated runs
    Variance {
        /// Number of independent runs per model
        #[arg(short, long)]
        runs: Option<usize>,
    },

    /// Check the resolved configuration
    Check,
}

impl Cli {
    fn config_args(&self) -> config::CliArgs {
        let runs = match self.command {
            Commands::Variance { runs } => runs,
            _ => None,
        };
        config::CliArgs {
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            seed: self.seed,
            runs,
            verbose: self.verbose,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::build_config(&cli.config_args())?;

    // Initialise tracing
    init_tracing(config.log_level.as_filter_str());

    info!(
        log_level = %config.log_level,
        seed = config.simulation.seed,
        bins = config.simulation.bins,
        draws_per_bin = config.simulation.draws_per_bin,
        "Configuration loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Value => commands::value::run(&config, &mut out),
        Commands::Variance { .. } => commands::variance::run(&config, &mut out),
        Commands::Check => commands::check::run(&config, &mut out),
    }
}
