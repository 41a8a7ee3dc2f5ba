//! Per-date rate fetcher
//!
//! Issues one GET for one date over the shared session and classifies the
//! result into a [`DateOutcome`]. Every terminal condition (success, non-200
//! status, transport failure, undecodable body, timeout) becomes a value; the
//! fetcher never returns an error to its caller and never retries.

use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::fetcher::privat_parser::PrivatParser;
use crate::fetcher::ProviderConfig;
use crate::{DateKey, DateOutcome, DateReport};

/// Fetches the archive rates for a single date
pub struct RateFetcher<'a> {
    client: &'a Client,
    config: &'a ProviderConfig,
}

impl<'a> RateFetcher<'a> {
    /// Create a fetcher borrowing the run's session and configuration
    pub fn new(client: &'a Client, config: &'a ProviderConfig) -> Self {
        Self { client, config }
    }

    /// Fetch and classify the rates for `date`
    ///
    /// The configured timeout covers sending the request and reading the body.
    /// When it elapses only this fetch is cancelled.
    pub async fn fetch(&self, date: DateKey) -> DateReport {
        let url = self.config.url_for(&date);
        debug!(date = %date, url = %url, "Requesting exchange rates");

        let outcome = match tokio::time::timeout(self.config.request_timeout, self.request(&url)).await {
            Ok(outcome) => outcome,
            Err(_) => DateOutcome::Timeout,
        };

        match &outcome {
            DateOutcome::Success { rates } => {
                debug!(date = %date, currencies = rates.len(), "Rates received");
            }
            DateOutcome::HttpError { status } => {
                warn!(date = %date, status = *status, "Provider returned an error status");
            }
            DateOutcome::TransportError { message } => {
                warn!(date = %date, error = %message, "Request failed");
            }
            DateOutcome::Timeout => {
                warn!(
                    date = %date,
                    timeout_ms = self.config.request_timeout.as_millis() as u64,
                    "Request timed out"
                );
            }
        }

        DateReport::new(date, outcome)
    }

    async fn request(&self, url: &str) -> DateOutcome {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => return classify_transport_error(&e),
        };

        let status = response.status();
        if status != StatusCode::OK {
            return DateOutcome::HttpError {
                status: status.as_u16(),
            };
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => return classify_transport_error(&e),
        };

        match PrivatParser::parse_rates(&body, &self.config.currencies) {
            Ok(rates) => DateOutcome::Success { rates },
            Err(e) => DateOutcome::TransportError {
                message: e.to_string(),
            },
        }
    }
}

/// Map a reqwest failure onto the outcome taxonomy
fn classify_transport_error(err: &reqwest::Error) -> DateOutcome {
    if err.is_timeout() {
        DateOutcome::Timeout
    } else {
        DateOutcome::TransportError {
            message: err.to_string(),
        }
    }
}
