//! Unit tests for the exchange rates command

use crate::common::{mock_config, three_currency_body, ARCHIVE_PATH};
use clap::Parser;
use exchange_rates_fetcher::cli::{Cli, CliError};
use exchange_rates_fetcher::output::OutputFormat;
use httpmock::prelude::*;

#[test]
fn test_cli_defaults_to_one_day() {
    let cli = Cli::try_parse_from(["exchange-rates"]).unwrap();
    assert_eq!(cli.days, 1);
    assert_eq!(cli.format, OutputFormat::Human);
    assert!(cli.currencies.is_empty());
}

#[test]
fn test_cli_accepts_max_days() {
    let cli = Cli::try_parse_from(["exchange-rates", "10"]).unwrap();
    assert_eq!(cli.days, 10);
}

#[test]
fn test_cli_rejects_out_of_range() {
    assert!(Cli::try_parse_from(["exchange-rates", "0"]).is_err());
    assert!(Cli::try_parse_from(["exchange-rates", "11"]).is_err());
    assert!(Cli::try_parse_from(["exchange-rates", "abc"]).is_err());
}

#[test]
fn test_cli_currency_override() {
    let cli = Cli::try_parse_from([
        "exchange-rates",
        "--currency",
        "gbp",
        "--currency",
        "USD",
        "--format",
        "json",
        "3",
    ])
    .unwrap();

    assert_eq!(cli.days, 3);
    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(cli.provider_config().currencies, vec!["GBP", "USD"]);
}

#[test]
fn test_cli_default_currencies() {
    let cli = Cli::try_parse_from(["exchange-rates"]).unwrap();
    assert_eq!(cli.provider_config().currencies, vec!["USD", "EUR"]);
}

/// The rendered JSON has one entry for today with only tracked currencies
#[tokio::test]
async fn test_execute_renders_json() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(ARCHIVE_PATH);
            then.status(200).json_body(three_currency_body());
        })
        .await;

    let cli = Cli::try_parse_from(["exchange-rates", "--format", "json", "--currency", "GBP"]).unwrap();
    let config = mock_config(&server).with_currencies(&cli.currencies);

    let mut out = Vec::new();
    let report = cli.execute_with(config, &mut out).await.unwrap();
    assert_eq!(report.len(), 1);

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["date"], report.entries()[0].date.to_string());
    assert_eq!(entries[0]["outcome"], "success");
    assert_eq!(entries[0]["rates"].as_object().unwrap().len(), 1);
    assert!(entries[0]["rates"].get("GBP").is_some());
}

#[tokio::test]
async fn test_execute_renders_human_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(ARCHIVE_PATH);
            then.status(500);
        })
        .await;

    let cli = Cli::try_parse_from(["exchange-rates", "2"]).unwrap();
    let mut out = Vec::new();
    cli.execute_with(mock_config(&server), &mut out).await.unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("HTTP Error: 500").count(), 2);
}

#[tokio::test]
async fn test_execute_requires_a_currency() {
    let cli = Cli::try_parse_from(["exchange-rates"]).unwrap();
    let config = exchange_rates_fetcher::fetcher::ProviderConfig::privatbank()
        .with_currencies(Vec::<String>::new());

    let mut out = Vec::new();
    let result = cli.execute_with(config, &mut out).await;
    assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    assert!(out.is_empty());
}

/// A day count above the configured bound is refused before any request
#[tokio::test]
async fn test_execute_honours_config_max_days() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path(ARCHIVE_PATH);
            then.status(200).json_body(three_currency_body());
        })
        .await;

    let cli = Cli::try_parse_from(["exchange-rates", "3"]).unwrap();
    let config = mock_config(&server).with_max_days(2);

    let mut out = Vec::new();
    let result = cli.execute_with(config, &mut out).await;
    match result {
        Err(CliError::InvalidArgument(message)) => {
            assert!(message.contains("between 1 and 2"), "unexpected message: {message}");
        }
        other => panic!("expected invalid argument, got {other:?}"),
    }
    assert!(out.is_empty());
    assert_eq!(mock.hits_async().await, 0);
}
