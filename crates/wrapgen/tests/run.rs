//! Orchestrator runs over in-memory packages.

use std::fs;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use tempfile::TempDir;
use wrapgen::codegen::GENERATED_MARKER;
use wrapgen::scan::{
    Conventions, DeclarationFile, DeclarationSource, InMemorySource, ModelCache, Scanner,
};
use wrapgen::{
    FailurePolicy, Orchestrator, PackageState, RunError, RunOptions, write_report,
};

fn package_source(prefix: &str) -> String {
    format!(
        r#"
export declare class {prefix}Client {{}}
export declare class {prefix}ServiceException extends __ServiceException {{}}
export interface {prefix}ClientConfig {{}}
export declare class NotFoundException extends {prefix}ServiceException {{
    readonly name: "NotFoundException";
}}
/**
 * @throws {{@link NotFoundException}} (client fault)
 */
export declare class DescribeThingCommand extends DescribeThingCommand_base {{}}
"#
    )
}

fn source() -> InMemorySource {
    InMemorySource::new()
        .with_file("s3", "index.d.ts", package_source("S3"))
        .with_file("sqs", "index.d.ts", package_source("SQS"))
        .with_file("kms", "index.d.ts", package_source("KMS"))
        .with_file(
            "broken",
            "index.d.ts",
            r#"
            export declare class BrokenServiceException extends __ServiceException {}
            export interface BrokenClientConfig {}
            "#,
        )
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn orchestrator(source: impl DeclarationSource + 'static, options: RunOptions) -> Orchestrator {
    Orchestrator::new(Scanner::new(Arc::new(source), Conventions::default()), options)
}

/// Delays each package by a fixed amount and records how many loads overlap.
struct SlowSource {
    inner: InMemorySource,
    delays: Vec<(&'static str, u64)>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    completed: std::sync::Mutex<Vec<String>>,
}

impl SlowSource {
    fn new(delays: Vec<(&'static str, u64)>) -> Self {
        Self {
            inner: source(),
            delays,
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            completed: std::sync::Mutex::new(Vec::new()),
        }
    }
}

impl DeclarationSource for SlowSource {
    fn load(&self, package: &str) -> wrapgen::scan::Result<Vec<DeclarationFile>> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        let delay = self
            .delays
            .iter()
            .find(|(name, _)| *name == package)
            .map_or(0, |(_, ms)| *ms);
        thread::sleep(Duration::from_millis(delay));

        self.completed.lock().unwrap().push(package.to_string());
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.inner.load(package)
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn failing_package_does_not_affect_siblings() {
    let orchestrator = orchestrator(source(), RunOptions::default());
    let report = orchestrator
        .run(&names(&["s3", "broken", "sqs"]))
        .await
        .expect("skip policy should aggregate the rest");

    let states: Vec<(&str, PackageState)> = report
        .outcomes
        .iter()
        .map(|o| (o.package_name.as_str(), o.state()))
        .collect();
    assert_eq!(
        states,
        vec![
            ("s3", PackageState::Done),
            ("broken", PackageState::Failed),
            ("sqs", PackageState::Done),
        ]
    );

    let (name, failure) = report.failed().next().unwrap();
    assert_eq!(name, "broken");
    assert_eq!(failure.kind(), "ClientClassNotFound");

    let index = report.index.render();
    assert!(index.contains("export { s3, sqs };"));
    assert!(!index.contains("broken"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn aggregate_order_follows_request_not_completion() {
    // kms finishes first, s3 last
    let source = SlowSource::new(vec![("s3", 150), ("sqs", 60), ("kms", 0)]);
    let options = RunOptions {
        concurrency: 3,
        ..RunOptions::default()
    };
    let source = Arc::new(source);
    let orchestrator = Orchestrator::new(
        Scanner::new(source.clone(), Conventions::default()),
        options,
    );

    let report = orchestrator.run(&names(&["s3", "sqs", "kms"])).await.unwrap();

    let completed = source.completed.lock().unwrap().clone();
    assert_eq!(completed.first().map(String::as_str), Some("kms"));

    let index = report.index.render();
    assert!(index.contains("export { s3, sqs, kms };"));
    let s3 = index.find("s3.S3Client.Default()").unwrap();
    let sqs = index.find("sqs.SQSClient.Default()").unwrap();
    let kms = index.find("kms.KMSClient.Default()").unwrap();
    assert!(s3 < sqs && sqs < kms);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrency_is_bounded() {
    let source = Arc::new(SlowSource::new(vec![
        ("s3", 40),
        ("sqs", 40),
        ("kms", 40),
        ("broken", 40),
    ]));
    let options = RunOptions {
        concurrency: 2,
        ..RunOptions::default()
    };
    let orchestrator = Orchestrator::new(
        Scanner::new(source.clone(), Conventions::default()),
        options,
    );

    orchestrator
        .run(&names(&["s3", "sqs", "kms", "broken"]))
        .await
        .unwrap();
    assert!(source.max_in_flight.load(Ordering::SeqCst) <= 2);
}

#[tokio::test]
async fn abort_policy_fails_the_run() {
    let options = RunOptions {
        on_failure: FailurePolicy::Abort,
        ..RunOptions::default()
    };
    let err = orchestrator(source(), options)
        .run(&names(&["s3", "broken"]))
        .await
        .unwrap_err();

    match err {
        RunError::PackagesFailed { failures } => {
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].0, "broken");
        }
        other => panic!("expected PackagesFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn nothing_generated_is_an_aggregation_error() {
    let err = orchestrator(source(), RunOptions::default())
        .run(&names(&["broken", "missing"]))
        .await
        .unwrap_err();
    assert!(matches!(err, RunError::Aggregation(_)));
}

#[tokio::test]
async fn duplicate_requests_are_collapsed() {
    let report = orchestrator(source(), RunOptions::default())
        .run(&names(&["sqs", "s3", "sqs"]))
        .await
        .unwrap();
    let requested: Vec<&str> = report
        .outcomes
        .iter()
        .map(|o| o.package_name.as_str())
        .collect();
    assert_eq!(requested, vec!["sqs", "s3"]);
}

#[tokio::test]
async fn cache_is_reused_across_runs() {
    let cache = Arc::new(ModelCache::new());
    let scanner = Scanner::new(Arc::new(source()), Conventions::default());
    let orchestrator =
        Orchestrator::new(scanner.clone(), RunOptions::default()).with_cache(Arc::clone(&cache));

    orchestrator.run(&names(&["s3"])).await.unwrap();
    assert!(cache.contains("s3"));

    let package = scanner.scan("s3").unwrap();
    let first = cache.commands(&package);
    orchestrator.run(&names(&["s3"])).await.unwrap();
    assert!(Arc::ptr_eq(&first, &cache.commands(&package)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn shutdown_stops_scheduling() {
    let source = Arc::new(SlowSource::new(vec![("s3", 100), ("sqs", 100), ("kms", 100)]));
    let options = RunOptions {
        concurrency: 1,
        ..RunOptions::default()
    };
    let orchestrator = Orchestrator::new(
        Scanner::new(source.clone(), Conventions::default()),
        options,
    );

    let err = orchestrator
        .run_until(
            &names(&["s3", "sqs", "kms"]),
            tokio::time::sleep(Duration::from_millis(20)),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, RunError::Cancelled));
    assert_eq!(source.completed.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn report_is_written_to_disk() {
    let dir = TempDir::new().unwrap();
    let report = orchestrator(source(), RunOptions::default())
        .run(&names(&["s3", "kms"]))
        .await
        .unwrap();

    let written = write_report(&report, dir.path()).unwrap();
    assert_eq!(written.len(), 4);

    for file in ["s3.ts", "kms.ts", "index.ts", "internal/utils.ts"] {
        let text = fs::read_to_string(dir.path().join(file)).unwrap();
        assert!(text.starts_with(GENERATED_MARKER), "{file} lacks the marker");
    }
    let s3 = fs::read_to_string(dir.path().join("s3.ts")).unwrap();
    assert!(s3.contains("describe_thing: Sdk.NotFoundException;"));
}
