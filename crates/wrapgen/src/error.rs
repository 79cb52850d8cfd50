use std::path::PathBuf;

use thiserror::Error;
use wrapgen_gen::GenError;
use wrapgen_scan::ScanError;

/// Result type alias for runs.
pub type Result<T> = std::result::Result<T, RunError>;

/// Why a single package produced no module. Never affects siblings.
#[derive(Debug, Error)]
pub enum PackageFailure {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Generate(#[from] GenError),

    #[error("package processing panicked: {0}")]
    Panicked(String),

    #[error("cancelled before processing started")]
    Cancelled,
}

impl PackageFailure {
    /// Short failure name for summaries (`ClientClassNotFound`, ...).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scan(error) => error.kind(),
            Self::Generate(GenError::InvalidIdentifier { .. }) => "InvalidIdentifier",
            Self::Generate(GenError::KeyMismatch { .. }) => "KeyMismatch",
            Self::Generate(GenError::Aggregation { .. }) => "Aggregation",
            Self::Panicked(_) => "Panicked",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// Errors that fail a whole run.
#[derive(Debug, Error)]
pub enum RunError {
    /// The combined entry module could not be built.
    #[error("aggregation failed: {0}")]
    Aggregation(#[source] GenError),

    /// At least one package failed and the run aborts on failure.
    #[error("{} package(s) failed: {}", failures.len(), failure_names(failures))]
    PackagesFailed {
        failures: Vec<(String, PackageFailure)>,
    },

    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A worker task could not be joined.
    #[error("worker task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("run cancelled")]
    Cancelled,
}

fn failure_names(failures: &[(String, PackageFailure)]) -> String {
    failures
        .iter()
        .map(|(name, failure)| format!("{name} ({})", failure.kind()))
        .collect::<Vec<_>>()
        .join(", ")
}
