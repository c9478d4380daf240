use std::{path::PathBuf, process::Command};

fn harness() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pregrade"))
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("submissions")
        .join(name)
}

#[test]
fn no_arguments_is_a_usage_error() {
    let output = harness().output().expect("run");

    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
    assert!(output.stdout.is_empty());
}

#[test]
fn two_positional_arguments_is_a_usage_error() {
    let output = harness()
        .arg(fixture("complete.rhai"))
        .arg(fixture("empty.rhai"))
        .output()
        .expect("run");

    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
    assert!(output.stdout.is_empty());
}

#[test]
fn help_goes_to_stderr_and_exits_nonzero() {
    let output = harness().arg("--help").output().expect("run");

    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
    assert!(output.stdout.is_empty());
}

#[test]
fn a_complete_submission_grades_to_full_credit() {
    let output = harness().arg(fixture("complete.rhai")).output().expect("run");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Practice Grading for Hands-On 1"));
    assert!(stdout.contains("Total: 16.00/16.00"));
}

#[test]
fn json_output_parses_and_carries_totals() {
    let output = harness()
        .arg("--json")
        .arg(fixture("empty.rhai"))
        .output()
        .expect("run");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON report");
    assert_eq!(json["total"], 1.0);
    assert_eq!(json["out_of"], 16.0);
}

#[test]
fn a_missing_submission_path_is_fatal() {
    let output = harness().arg("definitely-not-here.rhai").output().expect("run");

    assert!(!output.status.success());
    assert!(!output.stderr.is_empty());
}
