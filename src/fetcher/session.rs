//! HTTP session construction
//!
//! One `reqwest::Client` is built per orchestration run and shared by every
//! fetch in that run, so all requests reuse the same connection pool. The
//! client is dropped when the run ends.

use reqwest::Client;
use std::time::Duration;

use crate::fetcher::ProviderConfig;

/// Upper bound on TCP/TLS connection setup (seconds)
const HTTP_CONNECT_TIMEOUT_SECS: u64 = 10;

/// User agent sent with every request
const USER_AGENT: &str = concat!("exchange-rates-fetcher/", env!("CARGO_PKG_VERSION"));

/// The HTTP client could not be built
#[derive(Debug, thiserror::Error)]
#[error("failed to build HTTP client: {0}")]
pub struct SessionError(#[from] reqwest::Error);

/// Build the shared HTTP session for one run
///
/// The connect timeout never exceeds the per-request timeout, and the client
/// timeout mirrors it so a stalled body read is reported as a timeout too.
///
/// # Errors
/// Returns [`SessionError`] if the TLS backend cannot be initialized.
pub fn build_session(config: &ProviderConfig) -> Result<Client, SessionError> {
    let connect_timeout = Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS).min(config.request_timeout);

    Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(connect_timeout)
        .timeout(config.request_timeout)
        .build()
        .map_err(SessionError::from)
}
