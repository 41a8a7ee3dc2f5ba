//! Report rendering

use crate::RatesReport;
use std::io::Write;

pub mod report;

pub use report::{render_human, render_json};

/// Output errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// Pretty-printed JSON
    Json,
}

/// Render `report` in the chosen format
pub fn write_report<W: Write>(
    writer: &mut W,
    report: &RatesReport,
    format: OutputFormat,
) -> OutputResult<()> {
    match format {
        OutputFormat::Human => render_human(writer, report),
        OutputFormat::Json => render_json(writer, report),
    }?;
    writer.flush()?;
    Ok(())
}
