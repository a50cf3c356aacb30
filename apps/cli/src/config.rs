use std::path::PathBuf;

use anyhow::anyhow;
use carteira_core::{BrokerFilter, CurrencyDisplay, ExchangeRate, PortfolioSettings};
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;

const DEFAULT_DATA_FILE: &str = "./data/carteira.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DisplayCurrency {
    #[value(alias = "domestic")]
    Brl,
    #[value(alias = "foreign")]
    Usd,
}

impl From<DisplayCurrency> for CurrencyDisplay {
    fn from(currency: DisplayCurrency) -> Self {
        match currency {
            DisplayCurrency::Brl => CurrencyDisplay::Domestic,
            DisplayCurrency::Usd => CurrencyDisplay::Foreign,
        }
    }
}

/// Settings taken from flags, falling back to `CARTEIRA_*` variables.
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// JSON file holding the portfolio
    #[arg(long, global = true, env = "CARTEIRA_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// USD -> BRL exchange rate
    #[arg(long, global = true, env = "CARTEIRA_EXCHANGE_RATE")]
    pub exchange_rate: Option<Decimal>,

    /// Currency used for totals
    #[arg(long, global = true, env = "CARTEIRA_CURRENCY", value_enum, ignore_case = true)]
    pub currency: Option<DisplayCurrency>,

    /// Only show positions held at this broker
    #[arg(long, global = true, env = "CARTEIRA_BROKER")]
    pub broker: Option<String>,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_file: PathBuf,
    pub settings: PortfolioSettings,
}

impl Config {
    pub fn from_args(args: &ConfigArgs) -> anyhow::Result<Self> {
        let mut settings = PortfolioSettings::default();
        if let Some(rate) = args.exchange_rate {
            settings.exchange_rate = ExchangeRate::new(rate).map_err(|e| anyhow!(e))?;
        }
        if let Some(currency) = args.currency {
            settings.currency_display = currency.into();
        }
        if let Some(broker) = &args.broker {
            settings.broker_filter = BrokerFilter::parse(broker);
        }
        Ok(Config {
            data_file: args.data_file.clone(),
            settings,
        })
    }
}
