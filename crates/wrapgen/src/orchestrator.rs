//! Concurrent scan, extract and generate over many packages.
//!
//! Every package moves through `Queued -> Scanning -> Extracting ->
//! Generating -> Done | Failed`. At most `concurrency` packages are past
//! `Queued` at any time. Once every package is terminal the run moves to
//! `Aggregating` and builds the entry module from the successful packages in
//! requested order, whatever order they completed in.

use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use indexmap::IndexSet;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, error, info, warn};
use wrapgen_config::{FailurePolicy, WrapgenConfig};
use wrapgen_gen::{
    GenerateOptions, GeneratedModule, PackageSummary, TypeNames, generate, generate_index,
    generate_support,
};
use wrapgen_scan::{ModelCache, NodeModulesSource, Scanner};

use crate::error::{PackageFailure, Result, RunError};

/// Lifecycle of one package within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageState {
    Queued,
    Scanning,
    Extracting,
    Generating,
    Done,
    Failed,
}

/// Run-level knobs.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Maximum number of packages processed at once (at least 1).
    pub concurrency: usize,
    pub on_failure: FailurePolicy,
    pub generate: GenerateOptions,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            concurrency: 3,
            on_failure: FailurePolicy::default(),
            generate: GenerateOptions::default(),
        }
    }
}

impl RunOptions {
    pub fn from_config(config: &WrapgenConfig) -> Self {
        Self {
            concurrency: config.concurrency,
            on_failure: config.on_failure,
            generate: GenerateOptions {
                package_prefix: config.package_prefix.clone(),
                global: config.global.clone(),
                ..GenerateOptions::default()
            },
        }
    }
}

/// A package that made it to `Done`.
#[derive(Debug, Clone)]
pub struct GeneratedPackage {
    pub module: GeneratedModule,
    pub summary: PackageSummary,
    pub commands: usize,
    pub exceptions: usize,
}

/// Terminal state of one requested package.
#[derive(Debug)]
pub struct PackageOutcome {
    pub package_name: String,
    pub result: std::result::Result<GeneratedPackage, PackageFailure>,
}

impl PackageOutcome {
    pub fn state(&self) -> PackageState {
        match self.result {
            Ok(_) => PackageState::Done,
            Err(_) => PackageState::Failed,
        }
    }
}

/// Everything a finished run produced.
#[derive(Debug)]
pub struct RunReport {
    /// One outcome per distinct requested package, in requested order.
    pub outcomes: Vec<PackageOutcome>,
    pub index: GeneratedModule,
    pub support: GeneratedModule,
}

impl RunReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &GeneratedPackage> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().ok())
    }

    pub fn failed(&self) -> impl Iterator<Item = (&str, &PackageFailure)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.package_name.as_str(), e)))
    }

    /// Every module to write: package modules, then the entry and helper modules.
    pub fn modules(&self) -> impl Iterator<Item = &GeneratedModule> {
        self.succeeded()
            .map(|package| &package.module)
            .chain([&self.index, &self.support])
    }
}

/// Drives the pipeline over a set of packages.
///
/// The model cache outlives a single run, so running twice over the same
/// package reuses its extracted commands and exceptions.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    scanner: Scanner,
    cache: Arc<ModelCache>,
    options: RunOptions,
}

impl Orchestrator {
    pub fn new(scanner: Scanner, options: RunOptions) -> Self {
        Self {
            scanner,
            cache: Arc::new(ModelCache::new()),
            options,
        }
    }

    /// Orchestrator reading packages from the project's `node_modules`.
    pub fn from_config(config: &WrapgenConfig, root: &Path) -> Self {
        let source = NodeModulesSource::new(
            config.node_modules_dir(root),
            config.package_prefix.clone(),
        );
        let scanner = Scanner::new(Arc::new(source), config.scan_conventions());
        Self::new(scanner, RunOptions::from_config(config))
    }

    pub fn with_cache(mut self, cache: Arc<ModelCache>) -> Self {
        self.cache = cache;
        self
    }

    pub fn cache(&self) -> &Arc<ModelCache> {
        &self.cache
    }

    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Process `packages` and aggregate the results.
    pub async fn run(&self, packages: &[String]) -> Result<RunReport> {
        self.run_until(packages, std::future::pending()).await
    }

    /// Like [`run`](Self::run), but stops scheduling new packages once
    /// `shutdown` resolves. Packages already in flight finish; the run then
    /// fails with [`RunError::Cancelled`].
    pub async fn run_until(
        &self,
        packages: &[String],
        shutdown: impl Future<Output = ()>,
    ) -> Result<RunReport> {
        let requested = distinct(packages);
        let concurrency = self.options.concurrency.max(1);
        info!(packages = requested.len(), concurrency, "starting run");

        let semaphore = Arc::new(Semaphore::new(concurrency));
        let mut join_set = JoinSet::new();

        for (index, package) in requested.iter().enumerate() {
            let package = package.clone();
            let semaphore = Arc::clone(&semaphore);
            let scanner = self.scanner.clone();
            let cache = Arc::clone(&self.cache);
            let options = self.options.generate.clone();
            debug!(package = %package, state = ?PackageState::Queued);

            join_set.spawn(async move {
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    return (index, package, Err(PackageFailure::Cancelled));
                };
                let name = package.clone();
                let result = tokio::task::spawn_blocking(move || {
                    process_package(&scanner, &cache, &name, &options)
                })
                .await
                .unwrap_or_else(|join_error| Err(PackageFailure::Panicked(join_error.to_string())));
                (index, package, result)
            });
        }

        let mut slots: Vec<Option<PackageOutcome>> = requested.iter().map(|_| None).collect();
        let drained = drain(&mut join_set, &mut slots, &semaphore, shutdown).await;

        if drained.cancelled {
            return Err(RunError::Cancelled);
        }
        if let Some(join_error) = drained.join_failure {
            return Err(RunError::Join(join_error));
        }

        let outcomes: Vec<PackageOutcome> = slots.into_iter().flatten().collect();
        self.finish(outcomes)
    }

    fn finish(&self, outcomes: Vec<PackageOutcome>) -> Result<RunReport> {
        let failed = outcomes.iter().filter(|o| o.result.is_err()).count();
        if failed > 0 && self.options.on_failure == FailurePolicy::Abort {
            let failures = outcomes
                .into_iter()
                .filter_map(|o| o.result.err().map(|e| (o.package_name, e)))
                .collect();
            return Err(RunError::PackagesFailed { failures });
        }

        debug!(
            succeeded = outcomes.len() - failed,
            failed,
            "aggregating"
        );
        let summaries: Vec<PackageSummary> = outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .map(|package| package.summary.clone())
            .collect();

        let indent = self.options.generate.indent;
        let index = generate_index(&summaries, indent).map_err(RunError::Aggregation)?;
        let support = generate_support(indent);

        info!(
            generated = summaries.len(),
            failed, "run finished"
        );
        Ok(RunReport {
            outcomes,
            index,
            support,
        })
    }
}

type TaskOutput = (
    usize,
    String,
    std::result::Result<GeneratedPackage, PackageFailure>,
);

struct Drained {
    cancelled: bool,
    join_failure: Option<JoinError>,
}

// Waits for every task, whatever happens to the others. Shutdown closes the
// semaphore so queued tasks bail out instead of starting.
async fn drain(
    join_set: &mut JoinSet<TaskOutput>,
    slots: &mut [Option<PackageOutcome>],
    semaphore: &Semaphore,
    shutdown: impl Future<Output = ()>,
) -> Drained {
    let mut drained = Drained {
        cancelled: false,
        join_failure: None,
    };
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            joined = join_set.join_next() => {
                let Some(joined) = joined else { break };
                match joined {
                    Ok((index, package_name, result)) => {
                        log_outcome(&package_name, &result);
                        slots[index] = Some(PackageOutcome { package_name, result });
                    }
                    Err(join_error) => {
                        error!(%join_error, "worker task failed");
                        drained.join_failure.get_or_insert(join_error);
                    }
                }
            }
            () = &mut shutdown, if !drained.cancelled => {
                warn!("shutdown requested, letting in-flight packages finish");
                drained.cancelled = true;
                semaphore.close();
            }
        }
    }

    drained
}

/// Scan, extract and generate one package. Runs on a blocking thread.
pub fn process_package(
    scanner: &Scanner,
    cache: &ModelCache,
    package_name: &str,
    options: &GenerateOptions,
) -> std::result::Result<GeneratedPackage, PackageFailure> {
    debug!(package = package_name, state = ?PackageState::Scanning);
    let package = scanner.scan(package_name)?;

    debug!(package = package_name, state = ?PackageState::Extracting);
    let commands = cache.commands(&package);
    let exceptions = cache.exceptions(&package);

    debug!(package = package_name, state = ?PackageState::Generating);
    let names = TypeNames::for_package(&package)?;
    let module = generate(&package, &commands, &exceptions, &names, options)?;

    Ok(GeneratedPackage {
        summary: PackageSummary::new(&package, &names, options),
        module,
        commands: commands.len(),
        exceptions: exceptions.len(),
    })
}

fn log_outcome(
    package: &str,
    result: &std::result::Result<GeneratedPackage, PackageFailure>,
) {
    match result {
        Ok(generated) => info!(
            package,
            state = ?PackageState::Done,
            commands = generated.commands,
            exceptions = generated.exceptions,
            "package generated"
        ),
        Err(failure) => warn!(
            package,
            state = ?PackageState::Failed,
            kind = failure.kind(),
            "package failed: {failure}"
        ),
    }
}

// Duplicate names collapse to their first occurrence.
fn distinct(packages: &[String]) -> Vec<String> {
    let set: IndexSet<&str> = packages.iter().map(String::as_str).collect();
    if set.len() < packages.len() {
        warn!(
            requested = packages.len(),
            distinct = set.len(),
            "ignoring duplicate package names"
        );
    }
    set.into_iter().map(str::to_string).collect()
}
