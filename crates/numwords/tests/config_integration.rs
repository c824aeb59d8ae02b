//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` and `convert` to assert actual config effects, not just
//! process success.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

/// Run `convert` from a directory and return stdout.
fn convert_in(dir: &std::path::Path, value: &str) -> String {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "convert", value])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout).expect("stdout is UTF-8")
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "info");
    assert_eq!(json["config"]["ands"], false);
    assert_eq!(json["config"]["commas"], false);
    assert!(
        json["config"]["config_file"].is_null(),
        "no config file should be reported"
    );
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".numwords.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "debug");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with(".numwords.toml"),
        "should report dotfile: {reported}"
    );
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("nested").join("deep");
    fs::create_dir_all(&sub_dir).unwrap();

    fs::write(tmp.path().join("numwords.toml"), r#"style = "british""#).unwrap();

    let json = info_json(&sub_dir);
    assert_eq!(json["config"]["style"], "british");
    assert_eq!(
        json["config"]["sample"],
        "one thousand, one hundred and one"
    );
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".numwords.toml"), r#"log_level = "debug""#).unwrap();
    fs::write(tmp.path().join("numwords.toml"), r#"log_level = "error""#).unwrap();

    let json = info_json(tmp.path());
    assert_eq!(
        json["config"]["log_level"], "error",
        "regular file should override dotfile"
    );
}

// =============================================================================
// Config Format Parsing
// =============================================================================

#[test]
fn parses_yaml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".numwords.yaml"), "ands: true\n").unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["ands"], true);
    assert_eq!(json["config"]["commas"], false);
}

#[test]
fn parses_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".numwords.json"), r#"{"commas": true}"#).unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["commas"], true);
}

// =============================================================================
// Config Effects on Conversion
// =============================================================================

#[test]
fn configured_style_applies_to_convert() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".numwords.toml"), "style = \"british\"\n").unwrap();

    assert_eq!(
        convert_in(tmp.path(), "112621"),
        "one hundred and twelve thousand, six hundred and twenty-one\n"
    );
}

#[test]
fn configured_ands_applies_to_convert() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".numwords.toml"), "ands = true\n").unwrap();

    assert_eq!(convert_in(tmp.path(), "111"), "one hundred and eleven\n");
}

#[test]
fn style_flag_overrides_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".numwords.toml"), "style = \"british\"\n").unwrap();

    cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "convert",
            "--style",
            "american",
            "101",
        ])
        .assert()
        .success()
        .stdout("one hundred one\n");
}

#[test]
fn env_var_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".numwords.toml"), "style = \"american\"\n").unwrap();

    cmd()
        .env("NUMWORDS_STYLE", "british")
        .args(["-C", tmp.path().to_str().unwrap(), "convert", "1000000001"])
        .assert()
        .success()
        .stdout("one billion, and one\n");
}

// =============================================================================
// Config Precedence
// =============================================================================

#[test]
fn closer_config_takes_precedence() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("project");
    fs::create_dir_all(&sub_dir).unwrap();

    fs::write(tmp.path().join(".numwords.toml"), r#"log_level = "error""#).unwrap();
    fs::write(sub_dir.join(".numwords.toml"), r#"log_level = "debug""#).unwrap();

    let json = info_json(&sub_dir);
    assert_eq!(
        json["config"]["log_level"], "debug",
        "closer config should win"
    );
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".numwords.toml"), r#"style = "british""#).unwrap();

    let explicit = tmp.path().join("override.toml");
    fs::write(&explicit, r#"style = "american""#).unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .expect("failed to run command");
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["style"], "american");
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with("override.toml"),
        "--config path should be reported: {reported}"
    );
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn invalid_toml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".numwords.toml"),
        "this is not valid toml [[[",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn unknown_style_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".numwords.toml"), "style = \"pirate\"\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "convert", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}
