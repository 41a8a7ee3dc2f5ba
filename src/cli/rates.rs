//! Exchange rates command

use crate::fetcher::privat_config::MAX_DAYS;
use crate::fetcher::ProviderConfig;
use crate::orchestrator::FetchOrchestrator;
use crate::output::{write_report, OutputFormat};
use crate::RatesReport;
use clap::Parser;
use std::io::Write;

use super::CliError;

/// Parse and validate the number of days
///
/// Runs before any network activity, so a bad value never reaches the
/// orchestrator.
fn parse_days(s: &str) -> Result<u32, String> {
    let value: u32 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{s}' is not a number of days (for example: 3)"))?;

    if !(1..=MAX_DAYS).contains(&value) {
        return Err(format!("number of days must be between 1 and {MAX_DAYS}, got {value}"));
    }
    Ok(value)
}

/// PrivatBank exchange rates for the last N days
#[derive(Parser, Debug)]
#[command(name = "exchange-rates")]
#[command(about = "Fetch PrivatBank exchange rates for the last N days", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of days to fetch, today included (1-10)
    #[arg(default_value = "1", value_parser = parse_days)]
    pub days: u32,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Currency to report (repeatable, default: USD and EUR)
    #[arg(long = "currency", value_name = "CODE")]
    pub currencies: Vec<String>,
}

impl Cli {
    /// Provider configuration for this invocation
    pub fn provider_config(&self) -> ProviderConfig {
        let config = ProviderConfig::privatbank();
        if self.currencies.is_empty() {
            config
        } else {
            config.with_currencies(&self.currencies)
        }
    }

    /// Fetch the report and print it to stdout
    pub async fn execute(&self) -> Result<RatesReport, CliError> {
        let mut stdout = std::io::stdout();
        self.execute_with(self.provider_config(), &mut stdout).await
    }

    /// Fetch the report with `config` and render it into `writer`
    ///
    /// The day count is checked against `config.max_days` before any request.
    pub async fn execute_with<W: Write>(
        &self,
        config: ProviderConfig,
        writer: &mut W,
    ) -> Result<RatesReport, CliError> {
        if config.currencies.is_empty() {
            return Err(CliError::InvalidArgument(
                "at least one currency code is required".to_string(),
            ));
        }
        if self.days > config.max_days {
            return Err(CliError::InvalidArgument(format!(
                "number of days must be between 1 and {}, got {}",
                config.max_days, self.days
            )));
        }

        let orchestrator = FetchOrchestrator::new(config);
        let report = orchestrator.run(self.days).await?;
        write_report(writer, &report, self.format)?;
        Ok(report)
    }
}
