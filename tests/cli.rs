//! CLI argument handling tests
//!
//! Only exercises paths that fail or exit before any AWS call is made.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;

/// Exit code 2 with the usage message: region argument is required
#[test]
fn test_missing_region_is_a_usage_error() {
    cargo_bin_cmd!("sg-attachments")
        .assert()
        .code(2)
        .stderr(contains("Usage: sg-attachments"));
}

/// Exit code 2 with the usage message: only one positional argument is
/// accepted
#[test]
fn test_extra_arguments_are_rejected() {
    cargo_bin_cmd!("sg-attachments")
        .args(["us-east-1", "us-east-2"])
        .assert()
        .code(2)
        .stderr(contains("Usage: sg-attachments"));
}

/// Exit code 2: unknown flags are rejected
#[test]
fn test_unknown_flag_is_rejected() {
    cargo_bin_cmd!("sg-attachments")
        .arg("--invalid-option")
        .assert()
        .code(2)
        .stderr(contains("Usage: sg-attachments"));
}

/// Exit code 0: --help should return success
#[test]
fn test_help_exits_zero() {
    cargo_bin_cmd!("sg-attachments").arg("--help").assert().code(0);
}

/// Exit code 0: --version should return success
#[test]
fn test_version_exits_zero() {
    cargo_bin_cmd!("sg-attachments")
        .arg("--version")
        .assert()
        .code(0);
}
