//! Human and JSON renderers for [`RatesReport`]

use crate::output::OutputResult;
use crate::{CurrencyQuote, DateOutcome, RatesReport};
use rust_decimal::Decimal;
use std::io::Write;

/// Message shown for a date whose request timed out
pub const TIMEOUT_MESSAGE: &str = "Час очікування вичерпано";

/// Placeholder for a rate the provider did not publish
const MISSING_RATE: &str = "-";

/// One block per date, newest first
///
/// ```text
/// 15.03.2024
///   EUR  sale 43.5  purchase 42.8
///   USD  sale 40.1  purchase 39.7
/// 14.03.2024
///   HTTP Error: 500
/// ```
pub fn render_human<W: Write>(writer: &mut W, report: &RatesReport) -> OutputResult<()> {
    for entry in report.entries() {
        writeln!(writer, "{}", entry.date)?;
        match &entry.outcome {
            DateOutcome::Success { rates } if rates.is_empty() => {
                writeln!(writer, "  no rates for tracked currencies")?;
            }
            DateOutcome::Success { rates } => {
                for (currency, quote) in rates {
                    writeln!(writer, "  {}", format_quote(currency, quote))?;
                }
            }
            DateOutcome::HttpError { status } => writeln!(writer, "  HTTP Error: {status}")?,
            DateOutcome::TransportError { message } => writeln!(writer, "  Error: {message}")?,
            DateOutcome::Timeout => writeln!(writer, "  {TIMEOUT_MESSAGE}")?,
        }
    }
    Ok(())
}

/// Pretty-printed JSON array, one object per date
pub fn render_json<W: Write>(writer: &mut W, report: &RatesReport) -> OutputResult<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    Ok(())
}

fn format_quote(currency: &str, quote: &CurrencyQuote) -> String {
    format!(
        "{currency}  sale {}  purchase {}",
        format_rate(quote.sale),
        format_rate(quote.purchase)
    )
}

fn format_rate(rate: Option<Decimal>) -> String {
    rate.map(|r| r.normalize().to_string())
        .unwrap_or_else(|| MISSING_RATE.to_string())
}
