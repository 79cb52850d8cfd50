//! Typed Effect wrappers for AWS SDK v3 client packages.
//!
//! `wrapgen` scans the TypeScript declarations of `@aws-sdk/client-*`
//! packages and generates, for each package, a module exposing one dispatch
//! function, an operation type map and the package's declared error taxonomy,
//! plus an entry module combining them.
//!
//! The pipeline lives in three crates re-exported here:
//!
//! - [`scan`]: declaration parsing, anchor lookup, command/exception models
//! - [`codegen`]: module, aggregate and helper generation
//! - [`config`]: `aws-sdk.json` loading and client discovery
//!
//! This crate adds the [`Orchestrator`], which runs packages concurrently
//! with per-package failure isolation, and [`write_report`].
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use wrapgen::{ConfigOverrides, Orchestrator, WrapgenConfig, write_report};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let root = Path::new(".");
//! let config = WrapgenConfig::load(root, None, &ConfigOverrides::default())?;
//! let report = Orchestrator::from_config(&config, root)
//!     .run(&config.clients)
//!     .await?;
//! write_report(&report, &config.output_dir(root))?;
//! # Ok(())
//! # }
//! ```

mod error;
pub mod orchestrator;
pub mod writer;

pub use wrapgen_config as config;
pub use wrapgen_gen as codegen;
pub use wrapgen_scan as scan;

pub use error::{PackageFailure, Result, RunError};
pub use orchestrator::{
    GeneratedPackage, Orchestrator, PackageOutcome, PackageState, RunOptions, RunReport,
    process_package,
};
pub use writer::{write_module, write_report};

pub use wrapgen_config::{ConfigError, ConfigOverrides, FailurePolicy, WrapgenConfig};
