//! # Exchange Rates Fetcher Library
//!
//! Retrieves daily currency exchange rates from the PrivatBank public archive
//! API for the last N days and aggregates them into a single report keyed by
//! date.
//!
//! ## Quick Start
//!
//! ```no_run
//! use exchange_rates_fetcher::fetcher::ProviderConfig;
//! use exchange_rates_fetcher::orchestrator::FetchOrchestrator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let orchestrator = FetchOrchestrator::new(ProviderConfig::privatbank());
//! let report = orchestrator.run(3).await?;
//!
//! for entry in report.entries() {
//!     println!("{}: {:?}", entry.date, entry.outcome);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`dates`] - Date range generation (today first, one entry per day)
//! - [`fetcher`] - Provider configuration, response schema and the per-date fetcher
//! - [`orchestrator`] - Concurrent scatter/gather over all requested dates
//! - [`output`] - Report rendering (human and JSON)
//! - [`cli`] - Command line surface
//!
//! Every requested date yields exactly one [`DateOutcome`]. Failures for one
//! date are recorded in the report and never abort the rest of the run.

#![warn(missing_docs)]
#![warn(clippy::all)]

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// CLI command implementation
pub mod cli;

/// Date range generation
pub mod dates;

/// Provider configuration and per-date fetcher
pub mod fetcher;

/// Concurrent fetch orchestration
pub mod orchestrator;

/// Report rendering
pub mod output;

/// Format used by the provider for the `date` query parameter.
pub const DATE_KEY_FORMAT: &str = "%d.%m.%Y";

/// Calendar date used both as the provider query parameter and as the report key.
///
/// Displays as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Wrap a calendar date
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Underlying calendar date
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s.trim(), DATE_KEY_FORMAT)
            .map(Self)
            .map_err(|e| format!("Invalid date key '{s}': {e}"))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Sale and purchase rate of one tracked currency on one date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CurrencyQuote {
    /// Bank sale rate, absent when the provider omits it
    pub sale: Option<Decimal>,
    /// Bank purchase rate, absent when the provider omits it
    pub purchase: Option<Decimal>,
}

/// Classified result of fetching one date
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DateOutcome {
    /// Provider answered with rates; only tracked currencies are kept
    Success {
        /// Quotes keyed by currency code
        rates: BTreeMap<String, CurrencyQuote>,
    },
    /// Provider answered with a non-200 status
    HttpError {
        /// HTTP status code
        status: u16,
    },
    /// Connection-level failure, including an undecodable 200 body
    TransportError {
        /// Underlying error message
        message: String,
    },
    /// Per-request timeout elapsed
    Timeout,
}

impl DateOutcome {
    /// Whether the provider returned rates for this date
    pub fn is_success(&self) -> bool {
        matches!(self, DateOutcome::Success { .. })
    }
}

/// One entry of the report: a date and its outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateReport {
    /// Requested date
    pub date: DateKey,
    /// What happened when fetching it
    #[serde(flatten)]
    pub outcome: DateOutcome,
}

impl DateReport {
    /// Pair a date with its outcome
    pub fn new(date: DateKey, outcome: DateOutcome) -> Self {
        Self { date, outcome }
    }
}

/// Ordered collection of per-date outcomes, most recent date first
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct RatesReport(Vec<DateReport>);

impl RatesReport {
    /// Build a report from entries already in generated order
    pub fn new(entries: Vec<DateReport>) -> Self {
        Self(entries)
    }

    /// Entries in generated order
    pub fn entries(&self) -> &[DateReport] {
        &self.0
    }

    /// Dates in generated order
    pub fn dates(&self) -> Vec<DateKey> {
        self.0.iter().map(|entry| entry.date).collect()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the report has no entries
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of dates fetched successfully
    pub fn successes(&self) -> usize {
        self.0.iter().filter(|e| e.outcome.is_success()).count()
    }

    /// Number of dates that ended in an error variant
    pub fn failures(&self) -> usize {
        self.len() - self.successes()
    }

    /// Outcome recorded for a given date
    pub fn get(&self, date: &DateKey) -> Option<&DateOutcome> {
        self.0
            .iter()
            .find(|entry| &entry.date == date)
            .map(|entry| &entry.outcome)
    }
}

impl IntoIterator for RatesReport {
    type Item = DateReport;
    type IntoIter = std::vec::IntoIter<DateReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
