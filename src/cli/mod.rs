//! CLI command implementation

pub mod error;
pub mod rates;

pub use error::CliError;
pub use rates::Cli;
