//! End-to-end tests for the `sitepack` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn sitepack(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sitepack").unwrap();
    cmd.arg("--cwd")
        .arg(dir.path())
        .arg("--no-color")
        .env_remove("npm_lifecycle_event")
        .env_remove("RUST_LOG");
    cmd
}

fn site() -> TempDir {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("index.html"), "").unwrap();
    fs::write(src.join("contact.html"), "").unwrap();
    fs::write(src.join("index.js"), "").unwrap();
    dir
}

#[test]
fn test_pages_lists_templates_in_order() {
    let dir = site();

    sitepack(&dir)
        .arg("pages")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("contact.html\t"))
        .stdout(predicate::str::contains("index.html\t"));
}

#[test]
fn test_config_dev_prints_json() {
    let dir = site();

    sitepack(&dir)
        .args(["config", "--mode", "dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""mode": "development""#))
        .stdout(predicate::str::contains(r#""devtool": "source-map""#))
        .stdout(predicate::str::contains("[name].bundle.js"));
}

#[test]
fn test_config_reads_lifecycle_event() {
    let dir = site();

    sitepack(&dir)
        .arg("config")
        .env("npm_lifecycle_event", "build")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""mode": "production""#));
}

#[test]
fn test_config_unknown_mode_warns() {
    let dir = site();

    sitepack(&dir)
        .args(["config", "--mode", "lint"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""mode""#).not())
        .stderr(predicate::str::contains("unrecognized mode signal"));
}

#[test]
fn test_missing_source_root_is_an_error() {
    let dir = TempDir::new().unwrap();

    sitepack(&dir)
        .args(["config", "--mode", "build"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot discover pages"));
}

#[test]
fn test_after_build_reports_missing_assets() {
    let dir = site();

    sitepack(&dir)
        .arg("after-build")
        .assert()
        .success()
        .stderr(predicate::str::contains("failed to copy images"))
        .stderr(predicate::str::contains("failed to copy icons"));
}
