use clap::{Args, Subcommand};
use std::path::PathBuf;
use wrapgen::{ConfigOverrides, FailurePolicy};

/// Available wrapgen subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate wrapper modules for the configured clients
    ///
    /// Reads aws-sdk.json (or the file given with --config), scans every
    /// client package in node_modules and writes one module per client plus
    /// index.ts and internal/utils.ts to the output directory.
    Generate(GenerateArgs),

    /// Print the JSON schema of aws-sdk.json
    Schema(SchemaArgs),
}

/// Arguments for the generate command
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Path to the config file, relative to the project root
    ///
    /// Defaults to aws-sdk.json in the project root when present.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output directory for generated modules (overrides generate_to)
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Client to generate, without the package prefix (repeatable)
    ///
    /// Examples:
    ///   wrapgen generate --client s3
    ///   wrapgen generate -C s3 -C dynamodb
    #[arg(short = 'C', long = "client", value_name = "NAME")]
    pub clients: Vec<String>,

    /// node_modules directory, relative to the project root
    #[arg(long, value_name = "DIR")]
    pub node_modules: Option<PathBuf>,

    /// Maximum number of packages processed at once
    #[arg(short = 'j', long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub concurrency: Option<u64>,

    /// Fail the run when any package fails instead of skipping it
    #[arg(long)]
    pub abort_on_failure: bool,

    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,
}

impl GenerateArgs {
    /// Flags as the highest-priority configuration layer.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            generate_to: self.out.clone(),
            clients: self.clients.clone(),
            node_modules: self.node_modules.clone(),
            concurrency: self.concurrency.map(|n| n as usize),
            on_failure: self.abort_on_failure.then_some(FailurePolicy::Abort),
        }
    }
}

/// Arguments for the schema command
#[derive(Args, Debug, Default)]
pub struct SchemaArgs {
    /// Write the schema to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}
