//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use miette::Report;
use wrapgen::RunError;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Run(e) => run_error_to_miette(e),
        CliError::Config(e) => miette::miette!(
            help = "Run 'wrapgen schema' to see every accepted field",
            "Configuration error: {}",
            e
        ),
        _ => miette::miette!("{}", err),
    }
}

/// Convert RunError to miette Report
pub fn run_error_to_miette(err: RunError) -> Report {
    match err {
        RunError::Aggregation(e) => Report::new(e),
        RunError::PackagesFailed { failures } => {
            let lines: Vec<String> = failures
                .iter()
                .map(|(package, failure)| format!("  {package}: {failure}"))
                .collect();
            miette::miette!(
                help = "Drop --abort-on-failure to generate the remaining clients",
                "{} package(s) failed:\n{}",
                failures.len(),
                lines.join("\n")
            )
        }
        RunError::Cancelled => miette::miette!("Generation cancelled, no files were written"),
        _ => miette::miette!("{}", err),
    }
}
