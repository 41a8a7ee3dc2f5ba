//! PrivatBank provider configuration
//!
//! All provider constants live in one immutable [`ProviderConfig`] that the
//! orchestrator holds for its whole lifetime.
//!
//! # Endpoint
//!
//! The public archive endpoint takes the date as the last query parameter:
//! `GET https://api.privatbank.ua/p24api/exchange_rates?json&date=DD.MM.YYYY`

use crate::DateKey;
use std::time::Duration;

/// Archive endpoint, ready to have a `DD.MM.YYYY` date appended
pub const DEFAULT_BASE_URL: &str = "https://api.privatbank.ua/p24api/exchange_rates?json&date=";

/// Currencies reported when none are requested explicitly
pub const DEFAULT_CURRENCIES: &[&str] = &["USD", "EUR"];

/// Time allowed for one request, including reading the body
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Largest day count accepted at the CLI boundary
pub const MAX_DAYS: u32 = 10;

/// Provider configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// URL prefix the date is appended to
    pub base_url: String,

    /// Tracked currency codes, upper case
    pub currencies: Vec<String>,

    /// Per-request timeout
    pub request_timeout: Duration,

    /// Upper bound on the number of days per run
    pub max_days: u32,
}

impl ProviderConfig {
    /// PrivatBank archive API with the default currencies and timeout
    pub fn privatbank() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            currencies: DEFAULT_CURRENCIES.iter().map(|c| c.to_string()).collect(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            max_days: MAX_DAYS,
        }
    }

    /// Replace the URL prefix (used to point at a local mock)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replace the tracked currency set
    ///
    /// Codes are trimmed, upper-cased and deduplicated; blank codes are dropped.
    pub fn with_currencies<I, S>(mut self, currencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut codes: Vec<String> = Vec::new();
        for code in currencies {
            let code = code.as_ref().trim().to_uppercase();
            if !code.is_empty() && !codes.contains(&code) {
                codes.push(code);
            }
        }
        self.currencies = codes;
        self
    }

    /// Replace the per-request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Replace the upper bound on the number of days per run
    pub fn with_max_days(mut self, max_days: u32) -> Self {
        self.max_days = max_days;
        self
    }

    /// Request URL for one date
    pub fn url_for(&self, date: &DateKey) -> String {
        format!("{}{}", self.base_url, date)
    }

    /// Whether a currency code belongs to the tracked set
    pub fn tracks(&self, currency: &str) -> bool {
        self.currencies.iter().any(|c| c == currency)
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::privatbank()
    }
}
