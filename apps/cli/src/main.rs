mod config;
mod report;

use std::sync::Arc;

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use carteira_core::events::LogPortfolioEventSink;
use carteira_core::store::{SnapshotRepositoryTrait, StoreOptions};
use carteira_core::PortfolioStore;
use carteira_storage_json::{InMemorySnapshotRepository, JsonFileStore, JsonSnapshotRepository};
use config::{Config, ConfigArgs};

/// Carteira - portfolio valuation and allocation
#[derive(Parser)]
#[command(name = "carteira")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Keep every change in memory; the data file is neither read nor written
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(flatten)]
    config: ConfigArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Patrimony, dividends and alert counts
    Summary,
    /// Allocation by asset class and sector
    Allocation,
    /// Enriched position rows
    Positions,
    /// Watchlist entries at or below their target price
    Alerts,
    /// Accumulation goal progress
    Goals,
    /// Split a new contribution across the most underweight classes
    Suggest {
        #[arg(long)]
        amount: Decimal,
    },
    /// Discard persisted holdings and restore the sample portfolio
    Reset,
}

fn init_tracing() {
    let log_format = std::env::var("CARTEIRA_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false).with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_args(&cli.config)?;

    let repository: Arc<dyn SnapshotRepositoryTrait> = if cli.ephemeral {
        tracing::info!("Running without persistence");
        Arc::new(InMemorySnapshotRepository::new())
    } else {
        tracing::info!("Data file in use: {}", config.data_file.display());
        Arc::new(JsonSnapshotRepository::new(Arc::new(JsonFileStore::new(
            &config.data_file,
        ))))
    };
    let mut store = PortfolioStore::with_options(
        repository,
        config.settings.clone(),
        StoreOptions {
            event_sink: Arc::new(LogPortfolioEventSink),
            ..StoreOptions::default()
        },
    );

    let output = match cli.command {
        Command::Summary => report::summary(&store.derived()),
        Command::Allocation => report::allocation(&store.derived()),
        Command::Positions => report::positions(&store.derived()),
        Command::Alerts => report::alerts(&store.derived()),
        Command::Goals => report::goals(&store.derived()),
        Command::Suggest { amount } => {
            if amount <= Decimal::ZERO {
                return Err(anyhow!("--amount must be positive"));
            }
            report::contribution(&store.suggest_contribution(amount))
        }
        Command::Reset => {
            store.reset();
            report::summary(&store.derived())
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
