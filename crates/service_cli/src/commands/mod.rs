//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. The helpers here build
//! the shared inputs of a run from a validated [`ValuationConfig`].

pub mod check;
pub mod value;
pub mod variance;

use pricer_core::types::PricingError;
use pricer_models::instruments::{EquityOption, OptionStyle, OptionType};
use pricer_models::Stock;
use pricer_pricing::mc::{
    AntitheticMonteCarloModel, MonteCarloModel, StratifiedMonteCarloModel, ValuationModel,
};

use crate::config::{ContractConfig, MarketConfig, SimulationConfig, ValuationConfig};
use crate::Result;

/// Row label for closed-form prices.
pub(crate) const ANALYTICAL_LABEL: &str = "Analytical solution";

pub(crate) fn build_stock(market: &MarketConfig) -> Result<Stock> {
    Ok(Stock::new(market.spot, market.volatility).map_err(PricingError::from)?)
}

/// Every configured style crossed with every configured type, styles first.
///
/// The defaults give vanilla call, vanilla put, binary call, binary put.
pub(crate) fn build_options(contract: &ContractConfig) -> Result<Vec<EquityOption>> {
    let mut options = Vec::with_capacity(contract.styles.len() * contract.types.len());
    for &style in &contract.styles {
        for &option_type in &contract.types {
            let option =
                EquityOption::new(style, option_type, contract.strike, contract.maturity)
                    .map_err(PricingError::from)?;
            options.push(option);
        }
    }
    Ok(options)
}

/// The three simulation models at an equal budget of underlying draws.
pub(crate) fn build_models(simulation: &SimulationConfig) -> Result<Vec<Box<dyn ValuationModel>>> {
    let trials = simulation.trials()?;
    let plain = MonteCarloModel::new(trials).map_err(PricingError::from)?;
    // Each antithetic trial evaluates two terminal prices
    let antithetic = AntitheticMonteCarloModel::new(trials / 2).map_err(PricingError::from)?;
    let stratified = StratifiedMonteCarloModel::new(simulation.bins, simulation.draws_per_bin)
        .map_err(PricingError::from)?;

    let models: Vec<Box<dyn ValuationModel>> =
        vec![Box::new(plain), Box::new(antithetic), Box::new(stratified)];
    Ok(models)
}

/// Width of the label column: the longest of the model names and
/// [`ANALYTICAL_LABEL`].
pub(crate) fn label_width(models: &[Box<dyn ValuationModel>]) -> usize {
    models
        .iter()
        .map(|model| model.name().len())
        .fold(ANALYTICAL_LABEL.len(), usize::max)
}

/// Everything a command needs, built once from the configuration.
pub(crate) struct RunInputs {
    pub stock: Stock,
    pub options: Vec<EquityOption>,
    pub models: Vec<Box<dyn ValuationModel>>,
}

impl RunInputs {
    pub(crate) fn from_config(config: &ValuationConfig) -> Result<Self> {
        Ok(Self {
            stock: build_stock(&config.market)?,
            options: build_options(&config.contract)?,
            models: build_models(&config.simulation)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_options_order() {
        let options = build_options(&ContractConfig::default()).unwrap();
        let kinds: Vec<_> = options
            .iter()
            .map(|o| (o.style(), o.option_type()))
            .collect();
        assert_eq!(
            kinds,
            vec![
                (OptionStyle::Vanilla, OptionType::Call),
                (OptionStyle::Vanilla, OptionType::Put),
                (OptionStyle::Binary, OptionType::Call),
                (OptionStyle::Binary, OptionType::Put),
            ]
        );
    }

    #[test]
    fn test_build_options_from_configured_lists() {
        let contract = ContractConfig {
            styles: vec![OptionStyle::Binary],
            types: vec![OptionType::Put],
            ..Default::default()
        };
        let options = build_options(&contract).unwrap();
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].style(), OptionStyle::Binary);
        assert_eq!(options[0].option_type(), OptionType::Put);
    }

    #[test]
    fn test_build_models_names() {
        let models = build_models(&SimulationConfig::default()).unwrap();
        let names: Vec<_> = models.iter().map(|m| m.name()).collect();
        assert_eq!(
            names,
            vec![
                "MonteCarloModel",
                "AntitheticMonteCarloModel",
                "StratifiedMonteCarloModel"
            ]
        );
        assert_eq!(label_width(&models), "AntitheticMonteCarloModel".len());
    }

    #[test]
    fn test_invalid_market_is_a_pricing_error() {
        let market = MarketConfig {
            spot: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            build_stock(&market),
            Err(crate::CliError::Pricing(PricingError::InvalidInput(_)))
        ));
    }
}
