//! Error types for configuration loading and validation.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("invalid value for '{field}': {value} ({hint})")]
    InvalidValue {
        field: String,
        value: String,
        hint: String,
    },

    #[error("missing required field '{field}' ({hint})")]
    MissingField { field: String, hint: String },

    #[error("failed to load configuration: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("failed to parse '{}': {source}", path.display())]
    PackageJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        Self::Extract(Box::new(error))
    }
}
