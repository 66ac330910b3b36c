//! Test assertion helpers.

use std::process::Output;

use super::fixtures::{ERRORS_RULE, FOUND_RULE};

/// Assert that a command output was successful.
pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("Command failed:\n{}", stderr);
    }
}

/// Assert that a command failed with the -1 exit status.
pub fn assert_fatal(output: &Output) {
    assert!(
        !output.status.success(),
        "Expected command to fail but it succeeded"
    );
    #[cfg(unix)]
    assert_eq!(output.status.code(), Some(255), "exit status should be -1");
}

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert stderr contains a string.
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(
        err.contains(expected),
        "stderr missing '{}', got: {}",
        expected,
        err
    );
}

/// Lines between the two delimiters of a report section.
pub fn section(out: &str, rule: &str) -> Vec<String> {
    let lines: Vec<&str> = out.lines().collect();
    let open = lines
        .iter()
        .position(|l| *l == rule)
        .unwrap_or_else(|| panic!("section '{}' missing, got: {}", rule, out));
    let close = lines[open + 1..]
        .iter()
        .position(|l| *l == rule)
        .unwrap_or_else(|| panic!("section '{}' not closed, got: {}", rule, out));
    lines[open + 1..open + 1 + close]
        .iter()
        .map(|l| l.to_string())
        .collect()
}

/// Names listed in the matches section.
pub fn found(output: &Output) -> Vec<String> {
    section(&stdout(output), FOUND_RULE)
}

/// Messages listed in the errors section.
pub fn errors(output: &Output) -> Vec<String> {
    section(&stdout(output), ERRORS_RULE)
}
