//! CLI error types and conversions

use crate::orchestrator::OrchestratorError;
use crate::output::OutputError;

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Orchestration error
    #[error("orchestration error: {0}")]
    OrchestratorError(#[from] OrchestratorError),

    /// Output error
    #[error("output error: {0}")]
    OutputError(#[from] OutputError),

    /// Invalid argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
