//! End-to-end tests for the wrapgen binary.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const S3_TYPES: &str = r#"
export declare class S3Client {}
export declare class S3ServiceException extends __ServiceException {}
export interface S3ClientConfig {}
export declare class NoSuchKey extends S3ServiceException {
    readonly name: "NoSuchKey";
}
/**
 * @throws {@link NoSuchKey} (client fault)
 */
export declare class GetObjectCommand extends GetObjectCommand_base {}
"#;

fn install(root: &Path, client: &str, types: &str) {
    let dir = root
        .join("node_modules/@aws-sdk")
        .join(format!("client-{client}"))
        .join("dist-types");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("index.d.ts"), types).unwrap();
}

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    install(temp.path(), "s3", S3_TYPES);
    temp
}

#[test]
fn test_schema_prints_config_fields() {
    cargo_bin_cmd!("wrapgen")
        .arg("schema")
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"generate_to\""))
        .stdout(predicate::str::contains("\"clients\""));
}

#[test]
fn test_schema_writes_file() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("aws-sdk.schema.json");

    cargo_bin_cmd!("wrapgen")
        .arg("schema")
        .arg("--output")
        .arg(&output)
        .env("NO_COLOR", "1")
        .assert()
        .success();

    let schema: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
    assert!(schema["properties"]["concurrency"].is_object());
}

#[test]
fn test_generate_from_config_file() {
    let temp = project();
    fs::write(
        temp.path().join("aws-sdk.json"),
        r#"{ "clients": ["s3"], "generate_to": "src/aws" }"#,
    )
    .unwrap();

    cargo_bin_cmd!("wrapgen")
        .arg("generate")
        .arg("--cwd")
        .arg(temp.path())
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stderr(predicate::str::contains("s3"));

    let out = temp.path().join("src/aws");
    let module = fs::read_to_string(out.join("s3.ts")).unwrap();
    assert!(module.contains("get_object: Sdk.NoSuchKey;"));
    assert!(out.join("index.ts").is_file());
    assert!(out.join("internal/utils.ts").is_file());
}

#[test]
fn test_generate_discovers_clients_from_package_json() {
    let temp = project();
    fs::write(
        temp.path().join("package.json"),
        r#"{ "name": "app", "dependencies": { "@aws-sdk/client-s3": "^3.0.0", "effect": "^3.0.0" } }"#,
    )
    .unwrap();

    cargo_bin_cmd!("wrapgen")
        .args(["generate", "--out", "gen", "--cwd"])
        .arg(temp.path())
        .env("NO_COLOR", "1")
        .assert()
        .success();

    let index = fs::read_to_string(temp.path().join("gen/index.ts")).unwrap();
    assert!(index.contains("export { s3 };"));
}

#[test]
fn test_generate_skips_broken_client() {
    let temp = project();
    install(temp.path(), "broken", "export interface BrokenClientConfig {}");

    cargo_bin_cmd!("wrapgen")
        .args(["generate", "-C", "s3", "-C", "broken", "--cwd"])
        .arg(temp.path())
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stderr(predicate::str::contains("ClientClassNotFound"));

    let out = temp.path().join("src/generated");
    assert!(out.join("s3.ts").is_file());
    assert!(!out.join("broken.ts").exists());
}

#[test]
fn test_generate_abort_on_failure_writes_nothing() {
    let temp = project();
    install(temp.path(), "broken", "export interface BrokenClientConfig {}");

    cargo_bin_cmd!("wrapgen")
        .args(["generate", "-C", "s3", "-C", "broken", "--abort-on-failure", "--cwd"])
        .arg(temp.path())
        .env("NO_COLOR", "1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken"));

    assert!(!temp.path().join("src/generated").exists());
}

#[test]
fn test_generate_without_clients_fails() {
    let temp = TempDir::new().unwrap();

    cargo_bin_cmd!("wrapgen")
        .args(["generate", "--cwd"])
        .arg(temp.path())
        .env("NO_COLOR", "1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("clients"));
}

#[test]
fn test_generate_missing_explicit_config_fails() {
    let temp = project();

    cargo_bin_cmd!("wrapgen")
        .args(["generate", "--config", "custom.json", "--cwd"])
        .arg(temp.path())
        .env("NO_COLOR", "1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("custom.json"));
}
