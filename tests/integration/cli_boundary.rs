//! Integration tests for the command line boundary
//!
//! Every case here is rejected before the orchestrator runs, so none of them
//! touch the network.

use assert_cmd::Command;
use predicates::prelude::*;

fn exchange_rates() -> Command {
    Command::cargo_bin("exchange-rates").unwrap()
}

#[test]
fn test_zero_days_rejected() {
    exchange_rates()
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 10"));
}

#[test]
fn test_above_max_days_rejected() {
    exchange_rates()
        .arg("11")
        .assert()
        .failure()
        .stderr(predicate::str::contains("between 1 and 10"));
}

#[test]
fn test_non_integer_rejected() {
    exchange_rates()
        .arg("three")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a number of days"));
}

#[test]
fn test_negative_rejected() {
    exchange_rates()
        .args(["--", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a number of days"));
}

#[test]
fn test_unknown_format_rejected() {
    exchange_rates()
        .args(["--format", "xml", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("xml"));
}

#[test]
fn test_help_mentions_days() {
    exchange_rates()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of days to fetch"));
}
