use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for scanning operations.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Errors that make a package unusable for generation.
///
/// Every variant is fatal for the package being scanned and for that package
/// only; sibling packages in the same run are unaffected.
#[derive(Debug, Error)]
pub enum ScanError {
    /// No class name ends with the client suffix.
    #[error("client class not found in '{package}' (no class ending in '{suffix}')")]
    ClientClassNotFound { package: String, suffix: String },

    /// No class name ends with the service exception suffix.
    #[error("exception class not found in '{package}' (no class ending in '{suffix}')")]
    ExceptionClassNotFound { package: String, suffix: String },

    /// No interface name ends with the client config suffix.
    #[error("config interface not found in '{package}' (no interface ending in '{suffix}')")]
    ConfigInterfaceNotFound { package: String, suffix: String },

    /// The package has no declaration files at all.
    #[error("no declaration files found for '{package}' in '{}'", location.display())]
    PackageNotFound { package: String, location: PathBuf },

    /// Failed to read a declaration file.
    #[error("failed to read '{}': {error}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    /// OXC reported errors for a declaration file.
    #[error("failed to parse '{}': {message}", path.display())]
    Parse { path: PathBuf, message: String },
}

impl ScanError {
    /// Helper to create a parse error from multiple diagnostic strings.
    pub fn parse_error(path: PathBuf, diagnostics: &[String]) -> Self {
        let message = diagnostics.join("; ");
        Self::Parse { path, message }
    }

    /// Name of the anchor-level failure, used in run summaries.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ClientClassNotFound { .. } => "ClientClassNotFound",
            Self::ExceptionClassNotFound { .. } => "ExceptionClassNotFound",
            Self::ConfigInterfaceNotFound { .. } => "ConfigInterfaceNotFound",
            Self::PackageNotFound { .. } => "PackageNotFound",
            Self::Io { .. } => "Io",
            Self::Parse { .. } => "Parse",
        }
    }
}
