//! Integration tests for veil CLI output behavior
//!
//! The default behavior is quiet (no logs). Use -v/--verbose to enable logs.

use std::process::Command;

/// Execute veil with the given args inside a fresh directory and require success
fn run_veil(args: &[&str]) -> std::process::Output {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let output = Command::new(env!("CARGO_BIN_EXE_veil"))
        .current_dir(temp_dir.path())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to execute 'veil {}': {}", args.join(" "), e));

    assert!(
        output.status.success(),
        "veil {} failed with exit code {:?}. stderr: {}",
        args.join(" "),
        output.status.code(),
        String::from_utf8_lossy(&output.stderr)
    );

    output
}

// =============================================================================
// Default Mode (Quiet) Behavioral Tests
// =============================================================================

/// Verify that default mode (no flags) suppresses INFO-level logs
#[test]
fn test_default_mode_suppresses_info_logs() {
    let output = run_veil(&["show"]);

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        !stderr.contains(r#""level":"INFO""#),
        "Default mode should suppress INFO logs, but stderr contains: {}",
        stderr
    );
    assert!(
        !stderr.contains(r#""level":"WARN""#),
        "Default mode should suppress WARN logs, but stderr contains: {}",
        stderr
    );
}

/// Verify that stdout contains only user-facing output (no JSON logs)
#[test]
fn test_stdout_is_clean() {
    let output = run_veil(&["show"]);

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        stdout.starts_with("Cursor shown (backend: "),
        "Unexpected stdout: {}",
        stdout
    );
    assert!(
        !stdout.contains(r#""level""#),
        "stdout should not contain log lines: {}",
        stdout
    );
}

// =============================================================================
// Verbose Mode Behavioral Tests
// =============================================================================

/// Verify that verbose mode emits INFO-level JSON logs to stderr
#[test]
fn test_verbose_mode_emits_info_logs() {
    let output = run_veil(&["-v", "show"]);

    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(
        stderr.contains(r#""level":"INFO""#),
        "Verbose mode should emit INFO logs, but stderr was: {}",
        stderr
    );
    assert!(
        stderr.contains("cli.show_completed"),
        "Expected show completion event in stderr: {}",
        stderr
    );
}

// =============================================================================
// Command Behavior
// =============================================================================

/// Hold hides, waits, then restores the cursor before exiting
#[test]
fn test_hold_succeeds() {
    let output = run_veil(&["--backend", "none", "-v", "hold", "--ms", "10"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Cursor hidden for 10ms"),
        "Unexpected stdout: {}",
        stdout
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    let hide = stderr.find("cli.hold_started").expect("hold start event");
    let show = stderr
        .find("core.cursor.show_")
        .expect("show event from the hold guard");
    let done = stderr.find("cli.hold_completed").expect("hold completed event");
    assert!(hide < show && show < done, "stderr: {}", stderr);
}

/// `hide` points at `hold`, since the cursor returns when the process exits
#[test]
fn test_hide_mentions_hold() {
    let output = run_veil(&["--backend", "none", "hide"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.starts_with("Cursor hidden (backend: none)"),
        "Unexpected stdout: {}",
        stdout
    );
    assert!(stdout.contains("veil hold"), "Unexpected stdout: {}", stdout);
}

/// The fallback backend always shows up in the JSON listing
#[test]
fn test_backends_json_lists_fallback() {
    let output = run_veil(&["backends", "--json"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value =
        serde_json::from_str(&stdout).expect("backends --json should print valid JSON");

    let backends = value["backends"].as_array().expect("backends array");
    assert!(
        backends.iter().any(|b| b["name"] == "none"),
        "Expected 'none' backend in: {}",
        stdout
    );
    assert!(value["active"].is_string());
}

/// `--backend` overrides the detected backend
#[test]
fn test_backend_flag_overrides_detection() {
    let output = run_veil(&["--backend", "none", "backends", "--json"]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["active"], "none");
}

/// Unknown backend names are rejected before anything runs
#[test]
fn test_unknown_backend_rejected() {
    let output = Command::new(env!("CARGO_BIN_EXE_veil"))
        .args(["--backend", "x11", "show"])
        .output()
        .expect("Failed to execute veil");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("x11"), "stderr: {}", stderr);
}

/// Patching through the fallback backend reports failure
#[test]
fn test_patch_fails_on_fallback_backend() {
    let output = Command::new(env!("CARGO_BIN_EXE_veil"))
        .args(["--backend", "none", "patch"])
        .output()
        .expect("Failed to execute veil");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to enable background cursor hiding"),
        "stderr: {}",
        stderr
    );
}
