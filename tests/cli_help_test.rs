//! CLI help output integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_root_help() {
    Command::cargo_bin("rui")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("UI Component Registry CLI"));
}

#[test]
fn test_build_help() {
    Command::cargo_bin("rui")
        .unwrap()
        .args(["build", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--source"))
        .stdout(predicate::str::contains("--also-out"));
}

#[test]
fn test_add_help() {
    Command::cargo_bin("rui")
        .unwrap()
        .args(["add", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--overwrite"))
        .stdout(predicate::str::contains("--alias-symbol"))
        .stdout(predicate::str::contains("--registry"));
}

#[test]
fn test_init_help() {
    Command::cargo_bin("rui")
        .unwrap()
        .args(["init", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--components-dir"))
        .stdout(predicate::str::contains("--lib-dir"))
        .stdout(predicate::str::contains("--composables-dir"));
}

#[test]
fn test_unknown_subcommand_fails() {
    Command::cargo_bin("rui")
        .unwrap()
        .arg("unknown")
        .assert()
        .failure();
}

#[test]
fn test_add_unknown_component_exits_non_zero() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("registry.json"),
        r#"{
            "schemaVersion": 1,
            "generatedAt": "2025-06-01T12:00:00Z",
            "source": { "rootDir": "/repo", "componentsDir": "ui" },
            "components": [
                {
                    "name": "Button",
                    "dependencies": [],
                    "files": [{ "path": "index.vue", "content": "<template />" }]
                }
            ]
        }"#,
    )
    .unwrap();
    std::fs::write(temp_dir.path().join("package.json"), r#"{ "name": "demo" }"#).unwrap();

    Command::cargo_bin("rui")
        .unwrap()
        .args([
            "add",
            "Dialog",
            "--yes",
            "--registry",
            "registry.json",
            "--cwd",
        ])
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("component not found"));
}
