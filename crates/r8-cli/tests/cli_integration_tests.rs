//! CLI integration tests
//!
//! Each test runs the built `r8` binary and inspects stdout, stderr and the
//! exit status.

use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_r8(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_r8"))
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "CLI command should succeed. Stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout should be JSON")
}

fn write_json(dir: &TempDir, name: &str, value: Value) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, value.to_string()).unwrap();
    path
}

#[test]
fn test_phones_prints_groups_as_json() {
    let output = run_r8(&["phones", "0912000010", "0912000001", "0912000002", "0912000003"]);
    let groups = stdout_json(&output);

    assert_eq!(
        groups,
        json!([
            {"label": "0912000001-3", "numbers": ["0912000001", "0912000002", "0912000003"]},
            {"label": "0912000010", "numbers": ["0912000010"]}
        ])
    );
}

#[test]
fn test_phones_text_output() {
    let output = run_r8(&["phones", "--text", "100", "101", "555"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec!["100-1: 100, 101", "555: 555"]);
}

#[test]
fn test_phones_without_numbers_fails_with_code() {
    let output = run_r8(&["phones"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: [ERR_INVALID_INPUT]"), "stderr: {}", stderr);
}

#[test]
fn test_diff_reports_changed_fields_only() {
    let dir = TempDir::new().unwrap();
    let current = write_json(&dir, "current.json", json!({"Id": 1, "Name": "Bob", "Age": 30}));
    let original = write_json(&dir, "original.json", json!({"Id": 2, "Name": "Bob", "Age": 29}));

    let output = run_r8(&[
        "diff",
        "--current",
        current.to_str().unwrap(),
        "--original",
        original.to_str().unwrap(),
    ]);
    let changes = stdout_json(&output);

    assert_eq!(changes, json!({"old_values": {"Age": 29}, "new_values": {"Age": 30}}));
}

#[test]
fn test_diff_exclude_flag_adds_to_defaults() {
    let dir = TempDir::new().unwrap();
    let current = write_json(&dir, "current.json", json!({"Name": "Bob", "Age": 30}));
    let original = write_json(&dir, "original.json", json!({"Name": "Rob", "Age": 29}));

    let output = run_r8(&[
        "diff",
        "--current",
        current.to_str().unwrap(),
        "--original",
        original.to_str().unwrap(),
        "--exclude",
        "Age",
    ]);
    let changes = stdout_json(&output);

    assert_eq!(changes["new_values"], json!({"Name": "Bob"}));
}

#[test]
fn test_diff_missing_file_reports_io_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.json");

    let output = run_r8(&[
        "diff",
        "--current",
        missing.to_str().unwrap(),
        "--original",
        missing.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_IO"));
}

#[test]
fn test_audit_prints_record() {
    let dir = TempDir::new().unwrap();
    let current = write_json(&dir, "current.json", json!({"Status": "shipped", "RowVersion": 2}));
    let original = write_json(&dir, "original.json", json!({"Status": "paid", "RowVersion": 1}));

    let output = run_r8(&[
        "audit",
        "--current",
        current.to_str().unwrap(),
        "--original",
        original.to_str().unwrap(),
        "--row-id",
        "order-17",
        "--ip",
        "10.0.0.5",
        "--user-agent",
        "curl/8.0",
        "--request-id",
        "req-cli-1",
    ]);
    let record = stdout_json(&output);

    assert_eq!(record["row_id"], json!("order-17"));
    assert_eq!(record["flag"], json!("changed"));
    assert_eq!(record["ip_address"], json!("10.0.0.5"));
    assert_eq!(record["user_agent"], json!("curl/8.0"));
    assert_eq!(record["request_id"], json!("req-cli-1"));
    assert_eq!(record["caller"], json!("r8 audit"));
    assert_eq!(record["old_values"], json!({"Status": "paid"}));
    assert_eq!(record["new_values"], json!({"Status": "shipped"}));
}

#[test]
fn test_audit_unchanged_state_has_no_values() {
    let dir = TempDir::new().unwrap();
    let current = write_json(&dir, "current.json", json!({"Status": "shipped"}));
    let original = write_json(&dir, "original.json", json!({"Status": "paid"}));

    let output = run_r8(&[
        "audit",
        "--current",
        current.to_str().unwrap(),
        "--original",
        original.to_str().unwrap(),
        "--row-id",
        "order-17",
        "--state",
        "unchanged",
        "--flag",
        "deleted",
    ]);
    let record = stdout_json(&output);

    assert_eq!(record["flag"], json!("deleted"));
    assert_eq!(record["old_values"], json!({}));
    assert_eq!(record["new_values"], json!({}));
}

#[test]
fn test_audit_empty_row_id_fails_with_request_id() {
    let dir = TempDir::new().unwrap();
    let current = write_json(&dir, "current.json", json!({}));

    let output = run_r8(&[
        "audit",
        "--current",
        current.to_str().unwrap(),
        "--original",
        current.to_str().unwrap(),
        "--row-id",
        "",
        "--request-id",
        "req-cli-2",
    ]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_INVALID_ARGUMENT"), "stderr: {}", stderr);
    assert!(stderr.contains("(request_id: req-cli-2)"), "stderr: {}", stderr);
}

#[test]
fn test_currency_grouping_and_words() {
    let output = run_r8(&["currency", "-999.5"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "-1,000");

    let output = run_r8(&["currency", "--words", "1,500,000"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "1 میلیون و 500 هزار"
    );
}

#[test]
fn test_config_file_changes_words_and_exclusions() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("r8.toml");
    fs::write(
        &config,
        "[audit]\nexcluded_fields = [\"Name\"]\n\n[currency]\nthousand = \"thousand\"\nseparator = \" and \"\n",
    )
    .unwrap();

    let output = run_r8(&[
        "--config",
        config.to_str().unwrap(),
        "currency",
        "--words",
        "2005",
    ]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "2 thousand and 5");

    let current = write_json(&dir, "current.json", json!({"Id": 1, "Name": "Bob"}));
    let original = write_json(&dir, "original.json", json!({"Id": 2, "Name": "Rob"}));
    let output = run_r8(&[
        "diff",
        "--config",
        config.to_str().unwrap(),
        "--current",
        current.to_str().unwrap(),
        "--original",
        original.to_str().unwrap(),
    ]);
    let changes = stdout_json(&output);
    assert_eq!(changes["old_values"], json!({"Id": 2}));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("r8.toml");
    fs::write(&config, "[audit]\nunknown_key = 1\n").unwrap();

    let output = run_r8(&["--config", config.to_str().unwrap(), "digits", "12"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("ERR_CONFIG"));
}

#[test]
fn test_digits_normalizes_persian_and_arabic() {
    let output = run_r8(&["digits", "۰۹۱۲-٣٤٥"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "0912-345");
}

#[test]
fn test_log_flag_keeps_stdout_clean() {
    let output = run_r8(&["--log", "prod", "phones", "555"]);
    let groups = stdout_json(&output);
    assert_eq!(groups, json!([{"label": "555", "numbers": ["555"]}]));
}
