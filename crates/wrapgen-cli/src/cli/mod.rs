//! Command-line interface definition.
//!
//! - `wrapgen generate` - scan client packages and write the wrappers
//! - `wrapgen schema` - print the `aws-sdk.json` JSON schema

mod commands;

use clap::Parser;

pub use commands::{Command, GenerateArgs, SchemaArgs};

/// wrapgen - typed Effect wrappers for AWS SDK v3 clients
#[derive(Parser, Debug)]
#[command(
    name = "wrapgen",
    version,
    about = "Generate typed Effect wrappers for AWS SDK v3 client packages",
    long_about = "wrapgen reads the TypeScript declarations of installed @aws-sdk/client-* packages\n\
                  and generates one Effect module per client, with a typed error taxonomy per\n\
                  operation, plus an index module combining every client layer."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows per-package state transitions and anchor resolution details.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}
