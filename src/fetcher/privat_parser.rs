//! PrivatBank response parser
//!
//! Decodes the archive response against an explicit schema and keeps only the
//! tracked currencies. Fields the provider may omit are modeled as `Option`,
//! unknown fields are ignored.

use crate::fetcher::{FetcherError, FetcherResult};
use crate::CurrencyQuote;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Archive response body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRatesResponse {
    /// Requested date as echoed by the provider
    #[serde(default)]
    pub date: Option<String>,

    /// Per-currency rate entries
    #[serde(default)]
    pub exchange_rate: Option<Vec<RateEntry>>,
}

/// One currency entry of the archive response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateEntry {
    /// Currency code (e.g. "USD")
    #[serde(default)]
    pub currency: Option<String>,

    /// Bank sale rate
    #[serde(default)]
    pub sale_rate: Option<Decimal>,

    /// Bank purchase rate
    #[serde(default)]
    pub purchase_rate: Option<Decimal>,
}

/// Stateless parser for PrivatBank responses
pub struct PrivatParser;

impl PrivatParser {
    /// Decode a response body and extract quotes for the tracked currencies
    ///
    /// A body without an `exchangeRate` list yields an empty mapping. When the
    /// provider repeats a currency, the last entry wins.
    ///
    /// # Errors
    /// Returns `FetcherError::ParseError` if the body is not a JSON object or
    /// does not match the response schema.
    pub fn parse_rates(
        body: &[u8],
        tracked: &[String],
    ) -> FetcherResult<BTreeMap<String, CurrencyQuote>> {
        let value: Value = serde_json::from_slice(body).map_err(|e| {
            FetcherError::ParseError(format!("Failed to decode exchange rates: {e}"))
        })?;

        // serde accepts a sequence for a struct, so `[]` would decode to defaults
        if !value.is_object() {
            return Err(FetcherError::ParseError(format!(
                "Expected a JSON object, got: {}",
                json_kind(&value)
            )));
        }

        let response: ExchangeRatesResponse = serde_json::from_value(value).map_err(|e| {
            FetcherError::ParseError(format!("Failed to decode exchange rates: {e}"))
        })?;

        Ok(Self::extract_quotes(response, tracked))
    }

    /// Keep the entries whose currency is tracked
    pub fn extract_quotes(
        response: ExchangeRatesResponse,
        tracked: &[String],
    ) -> BTreeMap<String, CurrencyQuote> {
        response
            .exchange_rate
            .unwrap_or_default()
            .into_iter()
            .filter_map(|entry| {
                let currency = entry.currency?;
                tracked.contains(&currency).then(|| {
                    (
                        currency,
                        CurrencyQuote {
                            sale: entry.sale_rate,
                            purchase: entry.purchase_rate,
                        },
                    )
                })
            })
            .collect()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
