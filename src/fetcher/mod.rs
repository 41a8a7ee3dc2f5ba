//! Provider configuration, response schema and the per-date rate fetcher

pub mod privat_config;
pub mod privat_http;
pub mod privat_parser;
pub mod session;

pub use privat_config::ProviderConfig;
pub use privat_http::RateFetcher;
pub use session::SessionError;

/// Fetcher errors
///
/// These never reach the caller: the fetcher folds them into a
/// [`crate::DateOutcome`].
#[derive(Debug, thiserror::Error)]
pub enum FetcherError {
    /// Response body did not match the expected schema
    #[error("parse error: {0}")]
    ParseError(String),
}

/// Result type for fetcher operations
pub type FetcherResult<T> = Result<T, FetcherError>;
