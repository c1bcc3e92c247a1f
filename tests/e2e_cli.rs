// SliceUtils - tests/e2e_cli.rs
//
// End-to-end tests for the `sliceutils` binary: argument handling,
// config precedence, JSON output and exit codes. Each run uses a fresh
// temp dir as its working directory so a stray ./config.toml never leaks in.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

// =============================================================================
// Helpers
// =============================================================================

/// Run the binary in `dir` with `args`, with RUST_LOG cleared so the
/// log filter comes only from flags and config.
fn sliceutils(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sliceutils"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

/// Parse stdout as the JSON array the binary prints.
fn stdout_values(output: &Output) -> Vec<i64> {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(stdout.trim())
        .unwrap_or_else(|e| panic!("stdout is not a JSON array ({e}): {stdout:?}"))
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// =============================================================================
// Output and steps
// =============================================================================

#[test]
fn e2e_cli_prints_json_array() {
    let dir = tempfile::tempdir().unwrap();
    let out = sliceutils(
        dir.path(),
        &["1", "2", "3", "4", "5", "-s", "filter:even", "-s", "map:mul:2", "-s", "push:100"],
    );
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "[4,8,100]\n");
}

#[test]
fn e2e_cli_no_steps_echoes_input() {
    let dir = tempfile::tempdir().unwrap();
    let out = sliceutils(dir.path(), &["-3", "0", "7"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout_values(&out), vec![-3, 0, 7]);
}

#[test]
fn e2e_cli_empty_input() {
    let dir = tempfile::tempdir().unwrap();
    let out = sliceutils(dir.path(), &["-s", "filter:odd"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(String::from_utf8_lossy(&out.stdout), "[]\n");
}

// =============================================================================
// Config precedence
// =============================================================================

#[test]
fn e2e_cli_implicit_config_supplies_steps() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[pipeline]\nsteps = [\"map:add:1\"]\n",
    )
    .unwrap();

    let out = sliceutils(dir.path(), &["1", "2"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout_values(&out), vec![2, 3]);
}

#[test]
fn e2e_cli_step_flags_override_config_steps() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[pipeline]\nsteps = [\"map:add:1\"]\n",
    )
    .unwrap();

    let out = sliceutils(dir.path(), &["1", "2", "-s", "map:mul:10"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout_values(&out), vec![10, 20]);
}

#[test]
fn e2e_cli_growth_flag_overrides_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[push]\ngrowth = \"amortized\"\n",
    )
    .unwrap();

    let out = sliceutils(dir.path(), &["1", "-s", "push:2,3", "-g", "exact", "-d"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout_values(&out), vec![1, 2, 3]);
    let log = stderr(&out);
    assert!(log.contains("growth=exact"), "stderr: {log}");
    assert!(!log.contains("growth=amortized"), "stderr: {log}");
}

#[test]
fn e2e_cli_config_growth_used_without_flag() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "[push]\ngrowth = \"exact\"\n").unwrap();

    let out = sliceutils(dir.path(), &["1", "-s", "push:2", "-d"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert!(stderr(&out).contains("growth=exact"), "stderr: {}", stderr(&out));
}

#[test]
fn e2e_cli_implicit_bad_config_is_lenient() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[pipeline]\nsteps = [\"map:cube\"]\n",
    )
    .unwrap();

    let out = sliceutils(dir.path(), &["4", "5"]);
    assert!(out.status.success(), "stderr: {}", stderr(&out));
    assert_eq!(stdout_values(&out), vec![4, 5]);
    assert!(stderr(&out).contains("Config warning"), "stderr: {}", stderr(&out));
}

#[test]
fn e2e_cli_explicit_bad_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slices.toml");
    fs::write(&path, "[pipeline]\nsteps = [\"map:cube\"]\n").unwrap();

    let out = sliceutils(dir.path(), &["4", "5", "--config", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());

    let err = stderr(&out);
    assert!(
        err.contains("Error: Configuration error: Config [pipeline] steps[0]"),
        "stderr: {err}"
    );
    // Logging is up before the failure is reported.
    assert!(err.contains("sliceutils failed"), "stderr: {err}");
}

#[test]
fn e2e_cli_explicit_missing_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = sliceutils(dir.path(), &["1", "-c", "absent.toml"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("Config I/O error"), "stderr: {}", stderr(&out));
}

// =============================================================================
// Pipeline errors
// =============================================================================

#[test]
fn e2e_cli_unknown_step_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    let out = sliceutils(dir.path(), &["1", "-s", "sort:asc"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    assert!(
        stderr(&out).contains("Error: Pipeline error: Unknown step 'sort:asc'"),
        "stderr: {}",
        stderr(&out)
    );
}

#[test]
fn e2e_cli_overflow_exits_2() {
    let max = i64::MAX.to_string();
    let dir = tempfile::tempdir().unwrap();
    let out = sliceutils(dir.path(), &["1", &max, "-s", "map:square"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    assert!(
        stderr(&out).contains("Transform 'square' overflowed at index 1"),
        "stderr: {}",
        stderr(&out)
    );
}
