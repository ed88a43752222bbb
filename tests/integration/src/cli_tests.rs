//! CLI tests for the itemsync binary
//!
//! These run the built binary against the sample behavior files under
//! test-fixtures/behaviors/.

use std::path::PathBuf;

#[allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;

/// Path to a fixture behavior file (relative to the workspace root).
fn fixture(name: &str) -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // tests/integration -> ../../test-fixtures/behaviors
    manifest_dir.join("../../test-fixtures/behaviors").join(name)
}

#[allow(deprecated)]
fn itemsync() -> Command {
    Command::cargo_bin("itemsync").unwrap()
}

#[test]
fn validate_accepts_a_clean_file() {
    itemsync()
        .arg("validate")
        .arg(fixture("valid.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("2 behavior(s)"))
        .stdout(predicate::str::contains("points to schedule"))
        .stdout(predicate::str::contains("bugs to backlog"));
}

#[test]
fn validate_reports_warnings_without_failing() {
    itemsync()
        .arg("validate")
        .arg(fixture("lint-warnings.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("warning(s)"))
        .stdout(predicate::str::contains("last write wins"))
        .stdout(predicate::str::contains("same find expression"));
}

#[test]
fn validate_rejects_an_unknown_view_kind() {
    itemsync()
        .arg("validate")
        .arg(fixture("invalid-view.toml"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error"));
}

#[test]
fn validate_rejects_a_behavior_without_mappings() {
    itemsync()
        .arg("validate")
        .arg(fixture("no-mappings.toml"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed validation"));
}

#[test]
fn validate_fails_on_a_missing_file() {
    itemsync()
        .arg("validate")
        .arg("/nonexistent/behaviors.toml")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn validate_json_emits_a_machine_readable_report() {
    let output = itemsync()
        .arg("validate")
        .arg(fixture("lint-warnings.toml"))
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();

    let report: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(report["behaviors"], 1);
    assert!(report["errors"].as_array().unwrap().is_empty());
    assert!(!report["warnings"].as_array().unwrap().is_empty());

    // Warning levels serialize as lowercase strings.
    let level = regex::Regex::new(r#""level": "(info|warning)""#).unwrap();
    assert!(level.is_match(&text), "unexpected level encoding in: {text}");
}

#[test]
fn show_prints_endpoints_and_mappings() {
    itemsync()
        .arg("show")
        .arg(fixture("valid.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("points to schedule"))
        .stdout(predicate::str::contains(
            "source: Apollo / backlog (find: \"ready\")",
        ))
        .stdout(predicate::str::contains("custom:Points -> custom:Points"))
        .stdout(predicate::str::contains(
            "builtin:work-remaining -> custom:Remaining",
        ));
}

#[test]
fn completions_generate_for_bash() {
    itemsync()
        .arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("itemsync"));
}

#[test]
fn no_command_prints_a_help_hint() {
    itemsync()
        .assert()
        .success()
        .stdout(predicate::str::contains("--help"));
}
