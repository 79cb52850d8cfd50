//! wrapgen CLI - typed Effect wrappers for AWS SDK v3 client packages.
//!
//! The binary is a thin shell over the [`wrapgen`] crate:
//!
//! - [`cli`] - argument definitions (clap derive)
//! - [`commands`] - `generate` and `schema`
//! - [`error`] - CLI error type and miette conversion
//! - [`logger`] - tracing subscriber setup
//! - [`ui`] - status lines and the run summary

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
