//! CLI integration tests for bountyboard commands
//!
//! Each invocation is its own process, so every test sees a fresh
//! in-memory store seeded per its config.

use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::Value;

/// Get the path to the bountyboard binary
fn bountyboard_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_bountyboard"))
}

/// A --config path that does not exist, so defaults apply regardless of
/// the host machine's real config
fn default_config_args(temp: &tempfile::TempDir) -> [String; 2] {
    [
        "--config".to_string(),
        temp.path().join("absent.toml").display().to_string(),
    ]
}

fn run(args: &[&str]) -> Output {
    Command::new(bountyboard_binary())
        .args(args)
        .output()
        .expect("failed to run bountyboard")
}

fn parse_stdout(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap_or_else(|e| {
        panic!(
            "invalid JSON output: {}\n{}",
            e,
            String::from_utf8_lossy(&output.stdout)
        )
    })
}

#[test]
fn test_no_subcommand_prints_version() {
    let output = run(&[]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("bountyboard v"));
}

#[test]
fn test_list_json_returns_seeded_rows() {
    let temp = tempfile::tempdir().unwrap();
    let config = default_config_args(&temp);
    let output = run(&["list", "--json", config[0].as_str(), config[1].as_str()]);
    assert!(output.status.success());

    let json = parse_stdout(&output);
    assert_eq!(json["schema_version"], "1");
    assert_eq!(json["command"], "list");
    assert_eq!(json["status"], "ok");
    assert_eq!(json["data"]["subscription"]["name"], "Subscription 01");

    // 6 single-asset demo programs plus the two-asset legacy intake
    let rows = json["data"]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0]["program"], "Web AI Pentest - B2 team");
    assert_eq!(rows[0]["start_date"], "2023-11-02");

    // The legacy ANDROID variant survives in display data
    assert!(rows.iter().any(|r| r["type"] == "ANDROID"));
}

#[test]
fn test_list_eligibility_filter() {
    let temp = tempfile::tempdir().unwrap();
    let config = default_config_args(&temp);
    let output = run(&[
        "list",
        "--json",
        "--eligibility",
        "ineligible",
        config[0].as_str(),
        config[1].as_str(),
    ]);
    assert!(output.status.success());

    let json = parse_stdout(&output);
    let rows = json["data"]["rows"].as_array().unwrap();
    assert!(!rows.is_empty());
    assert!(rows.iter().all(|r| r["bounty_eligibility"] == "INELIGIBLE"));
}

#[test]
fn test_list_rejects_unknown_filter() {
    let temp = tempfile::tempdir().unwrap();
    let config = default_config_args(&temp);
    let output = run(&["list", "--eligibility", "android", config[0].as_str(), config[1].as_str()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid eligibility filter"));
}

#[test]
fn test_list_without_seed_data() {
    let temp = tempfile::tempdir().unwrap();
    let config_path = temp.path().join("config.toml");
    std::fs::write(&config_path, "[board]\nseed_demo_data = false\n").unwrap();

    let output = run(&["list", "--config", config_path.to_str().unwrap()]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("No programs found"));
}

#[test]
fn test_create_non_interactive() {
    let temp = tempfile::tempdir().unwrap();
    let config = default_config_args(&temp);
    let output = run(&[
        "create",
        "--json",
        "--name",
        "Acme Pentest",
        "--start-date",
        "2024-01-15",
        "--asset",
        "web:acme.com:login:eligible",
        "--asset",
        "mobile:acme-app:store build:ineligible",
        config[0].as_str(),
        config[1].as_str(),
    ]);
    assert!(
        output.status.success(),
        "create failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json = parse_stdout(&output);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["data"]["name"], "Acme Pentest");
    assert_eq!(json["data"]["asset_count"], 2);
    assert!(json["data"]["program_id"].as_str().is_some());
}

#[test]
fn test_create_rejects_duplicate_identifiers() {
    let temp = tempfile::tempdir().unwrap();
    let config = default_config_args(&temp);
    let output = run(&[
        "create",
        "--name",
        "Dupes",
        "--asset",
        "web:Trustline.sa",
        "--asset",
        "web:trustline.SA",
        config[0].as_str(),
        config[1].as_str(),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));
}

#[test]
fn test_create_rejects_android_asset_type() {
    let temp = tempfile::tempdir().unwrap();
    let config = default_config_args(&temp);
    let output = run(&[
        "create",
        "--name",
        "Legacy",
        "--asset",
        "android:legacy.apk",
        config[0].as_str(),
        config[1].as_str(),
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unsupported asset type"));
}

#[test]
fn test_create_rejects_empty_name() {
    let temp = tempfile::tempdir().unwrap();
    let config = default_config_args(&temp);
    let output = run(&["create", "--name", "   ", config[0].as_str(), config[1].as_str()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("name is required"));
}

#[test]
fn test_create_without_name_needs_terminal() {
    // Test processes run without a TTY, so interactive mode is refused
    let temp = tempfile::tempdir().unwrap();
    let config = default_config_args(&temp);
    let output = run(&["create", config[0].as_str(), config[1].as_str()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--name"));
}

#[test]
fn test_board_refuses_non_tty() {
    let temp = tempfile::tempdir().unwrap();
    let config = default_config_args(&temp);
    let output = run(&["board", config[0].as_str(), config[1].as_str()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("interactive terminal"));
}

#[test]
fn test_create_table_output_shows_new_program() {
    let temp = tempfile::tempdir().unwrap();
    let config = default_config_args(&temp);
    let output = run(&[
        "create",
        "--name",
        "Acme Pentest",
        "--start-date",
        "2024-01-15",
        "--asset",
        "web:acme.com:login",
        config[0].as_str(),
        config[1].as_str(),
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Acme Pentest"));
    assert!(stdout.contains("acme.com"));
    assert!(stdout.contains("15/01/2024"));
}
