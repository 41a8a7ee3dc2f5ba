//! Main entry point for the exchange-rates CLI

use clap::Parser;
use exchange_rates_fetcher::cli::Cli;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber with optional JSON formatting
///
/// Logs go to stderr so stdout only carries the report.
fn init_tracing() {
    let json_format = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("exchange_rates_fetcher=info"));

    if json_format {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[tokio::main]
async fn main() {
    init_tracing();

    // Invalid day counts exit here, before any request is made
    let cli = Cli::parse();

    if let Err(e) = cli.execute().await.map_err(|e| anyhow::anyhow!(e)) {
        error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}
