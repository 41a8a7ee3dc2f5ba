//! Fetch orchestration
//!
//! Runs one fetch per requested date concurrently and gathers the outcomes
//! into a [`crate::RatesReport`].
//!
//! # Overview
//!
//! 1. **Dates**: [`crate::dates::last_days`] yields the dates, newest first
//! 2. **Session**: one `reqwest::Client` is built for the run and shared by all fetches
//! 3. **Scatter**: one [`crate::fetcher::RateFetcher`] future per date
//! 4. **Gather**: all futures are awaited; results keep the generated date order
//!
//! # Quick Start
//!
//! ```no_run
//! use exchange_rates_fetcher::fetcher::ProviderConfig;
//! use exchange_rates_fetcher::orchestrator::FetchOrchestrator;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let report = FetchOrchestrator::new(ProviderConfig::privatbank()).run(5).await?;
//! println!("{} of {} dates fetched", report.successes(), report.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Per-date failures are recorded as [`crate::DateOutcome`] variants and never
//! abort the run. Only failing to generate the dates or to build the session
//! is fatal and returned as [`OrchestratorError`].

pub mod executor;

pub use executor::FetchOrchestrator;

use crate::dates::DateRangeError;
use crate::fetcher::SessionError;

/// Orchestration errors
#[derive(Debug, thiserror::Error)]
pub enum OrchestratorError {
    /// Date range could not be generated
    #[error("date range error: {0}")]
    DateRange(#[from] DateRangeError),

    /// Shared HTTP session could not be created
    #[error("session error: {0}")]
    Session(#[from] SessionError),
}
