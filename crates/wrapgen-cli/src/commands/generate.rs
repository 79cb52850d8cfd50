//! Generate command implementation.

use std::path::PathBuf;
use std::time::Instant;

use tracing::debug;
use wrapgen::{Orchestrator, WrapgenConfig, write_report};

use crate::cli::GenerateArgs;
use crate::error::{Result, ResultExt};
use crate::ui;

/// Execute the generate command.
///
/// 1. Resolve the project root (`--cwd` or the current directory)
/// 2. Load `aws-sdk.json` layered with env and flags
/// 3. Run every client, stopping early on Ctrl-C
/// 4. Write the modules and print a per-package summary
///
/// Files are only written once the whole run has finished, so a cancelled
/// or aborted run leaves the output directory untouched.
pub async fn execute(args: GenerateArgs) -> Result<()> {
    let root = project_root(&args)?;
    let config = WrapgenConfig::load(&root, args.config.as_deref(), &args.overrides())?;
    debug!(?config, root = %root.display(), "resolved configuration");

    ui::info(&format!(
        "Generating {} client(s) from {}",
        config.clients.len(),
        config.node_modules_dir(&root).display()
    ));

    let started = Instant::now();
    let report = Orchestrator::from_config(&config, &root)
        .run_until(&config.clients, shutdown_signal())
        .await?;

    let out_dir = config.output_dir(&root);
    let written = write_report(&report, &out_dir)?;
    debug!(files = written.len(), "modules written");

    ui::print_run_summary(&report, &out_dir, started.elapsed());
    let failed = report.failed().count();
    if failed > 0 {
        ui::warning(&format!("{failed} client(s) skipped, see above"));
    } else {
        ui::success("All clients generated");
    }
    Ok(())
}

fn project_root(args: &GenerateArgs) -> Result<PathBuf> {
    match &args.cwd {
        Some(dir) if dir.is_dir() => Ok(dir.clone()),
        Some(dir) => Err(crate::CliError::FileNotFound(dir.clone())),
        None => std::env::current_dir().context("Failed to read the current directory"),
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        ui::warning("Interrupted, finishing in-flight clients");
    } else {
        // no signal handler available: never cancel
        std::future::pending::<()>().await;
    }
}
