use clap::Parser;
use crypto_pair::{
    constants::exchanges::CLI_CHOICES, AppConfig, NormalizeError, PairNormalizer,
};
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Normalize a cryptocurrency trading pair
#[derive(Parser, Debug)]
#[command(name = "crypto_pair", version)]
struct Cli {
    /// The raw pair, as listed by the exchange
    raw_pair: String,

    /// Exchange the pair comes from, same as --exchange
    #[arg(
        value_name = "EXCHANGE",
        conflicts_with = "exchange",
        value_parser = clap::builder::PossibleValuesParser::new(CLI_CHOICES.iter().copied())
    )]
    exchange_arg: Option<String>,

    /// Exchange the pair comes from (defaults to the configured exchange)
    #[arg(
        long,
        value_parser = clap::builder::PossibleValuesParser::new(CLI_CHOICES.iter().copied())
    )]
    exchange: Option<String>,

    /// Treat RAW_PAIR as a single currency symbol
    #[arg(long)]
    symbol: bool,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = AppConfig::load()?;

    // Setup Logging (stderr, so stdout only carries the result)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let exchange = cli
        .exchange_arg
        .or(cli.exchange)
        .or_else(|| config.default_exchange.clone())
        .unwrap_or_default();
    info!("Normalizing {} for exchange '{}'", cli.raw_pair, exchange);

    let normalizer = PairNormalizer::new(config.normalizer);

    let result: Result<Option<String>, NormalizeError> = if cli.symbol {
        normalizer.normalize_symbol(&cli.raw_pair, &exchange).map(Some)
    } else {
        normalizer.normalize_pair(&cli.raw_pair, &exchange)
    };

    match result? {
        Some(normalized) => {
            println!("{}", normalized);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            warn!("Failed to parse {} of exchange {}", cli.raw_pair, exchange);
            Ok(ExitCode::FAILURE)
        }
    }
}
