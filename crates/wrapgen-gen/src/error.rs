//! Error types for wrapper module generation

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while generating wrapper modules
#[derive(Error, Debug, Diagnostic)]
pub enum GenError {
    /// A name that must be emitted as an identifier is not one
    #[error("Invalid identifier: '{identifier}'{}", suggestion.as_ref().map(|s| format!(" - {}", s)).unwrap_or_default())]
    #[diagnostic(code(wrapgen::gen::invalid_identifier))]
    InvalidIdentifier {
        identifier: String,
        suggestion: Option<String>,
    },

    /// The operation type map and the dispatch table disagree on their keys
    #[error("Operation keys of '{package}' diverge between the type map and the dispatch table: {}", keys.join(", "))]
    #[diagnostic(
        code(wrapgen::gen::key_mismatch),
        help("every operation key must appear exactly once in both tables")
    )]
    KeyMismatch { package: String, keys: Vec<String> },

    /// The combined entry module cannot be built
    #[error("Aggregation failed: {reason}")]
    #[diagnostic(code(wrapgen::gen::aggregation))]
    Aggregation { reason: String },
}

impl GenError {
    /// Create an InvalidIdentifier error
    pub fn invalid_identifier(identifier: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            identifier: identifier.into(),
            suggestion: None,
        }
    }

    /// Create an InvalidIdentifier error with a hint
    pub fn invalid_identifier_with_suggestion(
        identifier: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self::InvalidIdentifier {
            identifier: identifier.into(),
            suggestion: Some(suggestion.into()),
        }
    }

    pub fn aggregation(reason: impl Into<String>) -> Self {
        Self::Aggregation {
            reason: reason.into(),
        }
    }
}

/// Result type for generation operations
pub type Result<T> = std::result::Result<T, GenError>;
