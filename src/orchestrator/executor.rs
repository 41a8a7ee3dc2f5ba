//! Scatter/gather executor over the requested dates

use chrono::{Local, NaiveDate};
use futures::future::join_all;
use std::time::Instant;
use tracing::{info, info_span, Instrument};

use crate::dates;
use crate::fetcher::session::build_session;
use crate::fetcher::{ProviderConfig, RateFetcher};
use crate::orchestrator::OrchestratorError;
use crate::RatesReport;

/// Runs one fetch per date concurrently and collects the outcomes in order
#[derive(Debug, Clone)]
pub struct FetchOrchestrator {
    config: ProviderConfig,
}

impl FetchOrchestrator {
    /// Create an orchestrator over an immutable provider configuration
    pub fn new(config: ProviderConfig) -> Self {
        Self { config }
    }

    /// Provider configuration used for every run
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Fetch the last `day_count` days ending at the local current date
    ///
    /// # Errors
    /// See [`FetchOrchestrator::run_for`].
    pub async fn run(&self, day_count: u32) -> Result<RatesReport, OrchestratorError> {
        self.run_for(Local::now().date_naive(), day_count).await
    }

    /// Fetch the last `day_count` days ending at `today`
    ///
    /// The returned report has exactly one entry per generated date, in the
    /// generated order, whatever the completion order of the fetches.
    ///
    /// # Errors
    /// Returns `OrchestratorError::DateRange` for a zero day count and
    /// `OrchestratorError::Session` when the HTTP client cannot be built.
    /// Individual fetch failures are never returned as errors.
    pub async fn run_for(
        &self,
        today: NaiveDate,
        day_count: u32,
    ) -> Result<RatesReport, OrchestratorError> {
        let dates = dates::last_days(today, day_count)?;
        let session = build_session(&self.config)?;
        let fetcher = RateFetcher::new(&session, &self.config);

        info!(
            days = dates.len(),
            currencies = ?self.config.currencies,
            "Fetching exchange rates"
        );
        let started = Instant::now();

        let fetches = dates.into_iter().map(|date| {
            let span = info_span!("fetch_date", date = %date);
            fetcher.fetch(date).instrument(span)
        });
        let report = RatesReport::new(join_all(fetches).await);

        info!(
            days = report.len(),
            succeeded = report.successes(),
            failed = report.failures(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Exchange rates fetched"
        );

        Ok(report)
    }
}
