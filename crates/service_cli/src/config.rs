//! Valuation run configuration
//!
//! Handles loading configuration from TOML files, environment variables and
//! CLI arguments.

use pricer_models::instruments::{OptionStyle, OptionType};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "OPTION_VALUATION_LOG_LEVEL";
/// Environment variable overriding the simulation seed.
pub const ENV_SEED: &str = "OPTION_VALUATION_SEED";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid seed: {0}. Must be an unsigned 64-bit integer")]
    InvalidSeed(String),

    #[error("Invalid {field}: {value}. Must be finite and positive")]
    InvalidValue { field: &'static str, value: f64 },

    #[error("Invalid rate: {0}. Must be finite")]
    InvalidRate(f64),

    #[error("Invalid {field}: {value}. Must be at least {min}")]
    InvalidCount {
        field: &'static str,
        value: usize,
        min: usize,
    },

    #[error("Trial count overflows: {bins} bins x {draws_per_bin} draws")]
    TrialCountOverflow { bins: usize, draws_per_bin: usize },

    #[error("Contract lists no option {0}")]
    EmptyContract(&'static str),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Failed to serialise configuration: {0}")]
    SerialiseError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Underlying and rate.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Spot price of the stock
    pub spot: f64,
    /// Annualised volatility
    pub volatility: f64,
    /// Continuously compounded risk-free rate
    pub rate: f64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            spot: 100.0,
            volatility: 0.1,
            rate: 0.05,
        }
    }
}

/// Terms shared by every option in a run.
///
/// Every style is valued with every option type, styles first.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Strike price
    pub strike: f64,
    /// Time to maturity in years
    pub maturity: f64,
    /// Payoff styles to value
    pub styles: Vec<OptionStyle>,
    /// Option types to value for each style
    pub types: Vec<OptionType>,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            strike: 100.0,
            maturity: 1.0,
            styles: OptionStyle::ALL.to_vec(),
            types: OptionType::ALL.to_vec(),
        }
    }
}

/// Monte Carlo budget.
///
/// The plain model runs `bins * draws_per_bin` trials and the antithetic
/// model half as many pairs, so all three see the same number of draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Strata for the stratified model
    pub bins: usize,
    /// Draws per stratum
    pub draws_per_bin: usize,
    /// Base seed for every generator stream
    pub seed: u64,
    /// Repeated runs for the `variance` command
    pub runs: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            bins: 1_000,
            draws_per_bin: 10,
            seed: 42,
            runs: 32,
        }
    }
}

impl SimulationConfig {
    /// Total draws per valuation.
    pub fn trials(&self) -> Result<usize, ConfigError> {
        self.bins
            .checked_mul(self.draws_per_bin)
            .ok_or(ConfigError::TrialCountOverflow {
                bins: self.bins,
                draws_per_bin: self.draws_per_bin,
            })
    }
}

/// Full configuration of a valuation run
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ValuationConfig {
    /// Log level
    pub log_level: LogLevel,
    /// Market section
    pub market: MarketConfig,
    /// Contract section
    pub contract: ContractConfig,
    /// Simulation section
    pub simulation: SimulationConfig,
}

impl ValuationConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: ValuationConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Render the configuration as TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::SerialiseError(e.to_string()))
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// `build_config` passes `std::env::var`; tests pass a map.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            self.simulation.seed = seed
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidSeed(seed.clone()))?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        } else if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(seed) = cli.seed {
            self.simulation.seed = seed;
        }
        if let Some(runs) = cli.runs {
            self.simulation.runs = runs;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("spot", self.market.spot)?;
        check_positive("volatility", self.market.volatility)?;
        if !self.market.rate.is_finite() {
            return Err(ConfigError::InvalidRate(self.market.rate));
        }
        check_positive("strike", self.contract.strike)?;
        check_positive("maturity", self.contract.maturity)?;
        if self.contract.styles.is_empty() {
            return Err(ConfigError::EmptyContract("styles"));
        }
        if self.contract.types.is_empty() {
            return Err(ConfigError::EmptyContract("types"));
        }

        let simulation = &self.simulation;
        check_count("bins", simulation.bins, 2)?;
        check_count("draws_per_bin", simulation.draws_per_bin, 2)?;
        check_count("runs", simulation.runs, 2)?;
        simulation.trials()?;

        Ok(())
    }
}

fn check_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { field, value })
    }
}

fn check_count(field: &'static str, value: usize, min: usize) -> Result<(), ConfigError> {
    if value < min {
        return Err(ConfigError::InvalidCount { field, value, min });
    }
    Ok(())
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Seed override
    pub seed: Option<u64>,
    /// Run count override
    pub runs: Option<usize>,
    /// Raise the log level to debug unless one is given
    pub verbose: bool,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<ValuationConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => ValuationConfig::from_file(path)?,
        None => ValuationConfig::default(),
    };

    config.apply_env(|key| std::env::var(key).ok())?;
    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ValuationConfig::default();
        assert_eq!(config.market.spot, 100.0);
        assert_eq!(config.market.volatility, 0.1);
        assert_eq!(config.market.rate, 0.05);
        assert_eq!(config.contract.strike, 100.0);
        assert_eq!(config.contract.maturity, 1.0);
        assert_eq!(config.simulation.bins, 1_000);
        assert_eq!(config.simulation.draws_per_bin, 10);
        assert_eq!(config.simulation.trials().unwrap(), 10_000);
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_log_level_display() {
        assert_eq!(format!("{}", LogLevel::Trace), "trace");
        assert_eq!(format!("{}", LogLevel::Warn), "warn");
        assert_eq!(LogLevel::Error.as_filter_str(), "error");
    }

    #[test]
    fn test_toml_deserialization() {
        let toml_str = r#"
            log_level = "debug"

            [market]
            spot = 110.0
            volatility = 0.2
            rate = 0.03

            [contract]
            strike = 105.0
            maturity = 2.0

            [simulation]
            bins = 500
            draws_per_bin = 4
            seed = 7
            runs = 10
        "#;

        let config = ValuationConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.market.spot, 110.0);
        assert_eq!(config.market.volatility, 0.2);
        assert_eq!(config.market.rate, 0.03);
        assert_eq!(config.contract.strike, 105.0);
        assert_eq!(config.contract.maturity, 2.0);
        assert_eq!(config.simulation.bins, 500);
        assert_eq!(config.simulation.draws_per_bin, 4);
        assert_eq!(config.simulation.seed, 7);
        assert_eq!(config.simulation.runs, 10);
    }

    #[test]
    fn test_partial_toml_deserialization() {
        let toml_str = r#"
            [market]
            volatility = 0.3
        "#;

        let config = ValuationConfig::from_toml_str(toml_str).unwrap();
        // Should use defaults for unspecified fields
        assert_eq!(config.market.volatility, 0.3);
        assert_eq!(config.market.spot, 100.0);
        assert_eq!(config.contract, ContractConfig::default());
        assert_eq!(config.simulation, SimulationConfig::default());
    }

    #[test]
    fn test_toml_rejects_invalid_values() {
        assert!(matches!(
            ValuationConfig::from_toml_str("[contract]\nstrike = -1.0"),
            Err(ConfigError::InvalidValue { field: "strike", .. })
        ));
        assert!(matches!(
            ValuationConfig::from_toml_str("log_level = \"loud\""),
            Err(ConfigError::FileError(_))
        ));
        assert!(matches!(
            ValuationConfig::from_toml_str("[market\nspot = 1"),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_contract_option_lists() {
        let toml_str = r#"
            [contract]
            styles = ["binary"]
            types = ["put", "call"]
        "#;

        let config = ValuationConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.contract.styles, vec![OptionStyle::Binary]);
        assert_eq!(config.contract.types, vec![OptionType::Put, OptionType::Call]);

        assert!(matches!(
            ValuationConfig::from_toml_str("[contract]\nstyles = []"),
            Err(ConfigError::EmptyContract("styles"))
        ));
        assert!(matches!(
            ValuationConfig::from_toml_str("[contract]\nstyles = [\"asian\"]"),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = ValuationConfig::default();
        config.log_level = LogLevel::Warn;
        config.contract.styles = vec![OptionStyle::Binary, OptionStyle::Vanilla];
        config.contract.types = vec![OptionType::Put];
        config.simulation.seed = 1234;

        let rendered = config.to_toml_string().unwrap();
        assert!(rendered.contains(r#"log_level = "warn""#));
        assert!(rendered.contains("binary"));

        let parsed = ValuationConfig::from_toml_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_file() {
        let result = ValuationConfig::from_file(Path::new("/nonexistent/valuation.toml"));
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_validate_counts() {
        let mut config = ValuationConfig::default();
        config.simulation.draws_per_bin = 1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCount {
                field: "draws_per_bin",
                value: 1,
                min: 2
            })
        ));

        config.simulation.draws_per_bin = 10;
        config.simulation.bins = usize::MAX;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TrialCountOverflow { .. })
        ));
    }

    #[test]
    fn test_validate_market() {
        let mut config = ValuationConfig::default();
        config.market.volatility = 0.0;
        assert!(config.validate().is_err());

        config.market.volatility = 0.1;
        config.market.rate = f64::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRate(_))));

        // Negative rates are allowed
        config.market.rate = -0.01;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ValuationConfig::default();
        config
            .apply_env(lookup_from(&[(ENV_LOG_LEVEL, "warn"), (ENV_SEED, " 99 ")]))
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.simulation.seed, 99);

        let err = config
            .apply_env(lookup_from(&[(ENV_SEED, "minus one")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSeed(_)));
    }

    #[test]
    fn test_cli_args_merge() {
        let mut config = ValuationConfig::default();
        config
            .apply_env(lookup_from(&[(ENV_SEED, "5")]))
            .unwrap();

        let cli = CliArgs {
            log_level: Some("trace".to_string()),
            seed: Some(11),
            runs: Some(8),
            ..Default::default()
        };
        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.simulation.seed, 11);
        assert_eq!(config.simulation.runs, 8);
    }

    #[test]
    fn test_verbose_raises_level_only_without_explicit_level() {
        let mut config = ValuationConfig::default();
        let verbose = CliArgs {
            verbose: true,
            ..Default::default()
        };
        config.merge_with_cli(&verbose).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);

        let explicit = CliArgs {
            verbose: true,
            log_level: Some("error".to_string()),
            ..Default::default()
        };
        config.merge_with_cli(&explicit).unwrap();
        assert_eq!(config.log_level, LogLevel::Error);
    }
}
