//! End-to-end tests for the monomap binary.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

const SCENARIO: &str = r#"{"monorepo_mapping_plan":{"core":{"category_description":"desc","repositories":[{"repo_name":"r1","destination_path":"apps/r1","migration_method":"copy","priority":"high","language":"js"}]},"directory_structure":{"apps":["r1"]}}}"#;

/// Command isolated from the user's config file and environment
fn monomap(config_home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("monomap");
    cmd.env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("MONOMAP_PLAN")
        .env_remove("MONOMAP_NO_EMOJI")
        .env_remove("RUST_LOG");
    cmd
}

fn write_plan(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("monorepo-mapping-plan.json");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn report_prints_scenario_sections() {
    let dir = tempfile::tempdir().unwrap();
    let plan = write_plan(&dir, SCENARIO);

    let output = monomap(dir.path())
        .arg("--plan")
        .arg(&plan)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    assert!(stdout.contains("Total Repositories: 1\n"));
    assert!(stdout.contains("  copy: 1\n"));
    assert!(stdout.contains("  high: 1\n  medium: 0\n  low: 0\n  archive: 0\n"));
    assert!(stdout.contains("  js: 1\n"));
    assert!(stdout.contains("  - r1 → apps/r1 (copy)\n"));
    assert!(stdout.contains("apps\n  ├── r1/\n"));
}

#[test]
fn plan_path_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let plan = write_plan(&dir, SCENARIO);

    let output = monomap(dir.path())
        .env("MONOMAP_PLAN", &plan)
        .arg("--no-emoji")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    assert!(stdout.starts_with("Monorepo Mapping Plan Validator\n"));
    assert!(stdout.contains("Validation Complete - Plan is ready for implementation!"));
}

#[test]
fn malformed_plan_exits_zero_with_one_error_line() {
    let dir = tempfile::tempdir().unwrap();
    let plan = write_plan(&dir, "this is not json");

    let assert = monomap(dir.path()).arg("--plan").arg(&plan).assert().success();
    let output = assert.get_output();

    let stderr = String::from_utf8(output.stderr.clone()).unwrap();
    assert_eq!(stderr.lines().count(), 1);
    assert!(stderr.contains("Validation failed:"));

    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    assert!(!stdout.contains("Total Repositories"));
}

#[test]
fn strict_mode_fails_on_missing_plan() {
    let dir = tempfile::tempdir().unwrap();

    monomap(dir.path())
        .arg("--plan")
        .arg(dir.path().join("missing.json"))
        .arg("--strict")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn config_file_supplies_plan_path() {
    let dir = tempfile::tempdir().unwrap();
    let plan = write_plan(&dir, SCENARIO);

    let config_dir = dir.path().join("monomap");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        format!("[report]\nplan_path = {:?}\nemoji = false\n", plan.display().to_string()),
    )
    .unwrap();

    let output = monomap(dir.path())
        .arg("--strict")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    assert!(stdout.starts_with("Monorepo Mapping Plan Validator\n"));
    assert!(stdout.contains("CORE:\n  Description: desc\n  Repositories: 1\n"));
}

#[test]
fn version_command() {
    let dir = tempfile::tempdir().unwrap();

    let output = monomap(dir.path())
        .arg("version")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        format!("monomap {}\n", env!("CARGO_PKG_VERSION"))
    );
}
