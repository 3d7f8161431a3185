//! Integration tests for settings files

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_generate_config_command() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("nerfuse.toml");

    let mut cmd = Command::cargo_bin("nerfuse").unwrap();
    cmd.args([
        "generate-config",
        "--output",
        output_path.to_str().unwrap(),
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains(
        "Settings template generated successfully",
    ));

    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.contains("[fusion]"));
    assert!(content.contains("[heuristics]"));
    assert!(content.contains("ignore_labels = [\"MONEY\"]"));
}

#[test]
fn test_validate_generated_config() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("nerfuse.toml");

    Command::cargo_bin("nerfuse")
        .unwrap()
        .args(["generate-config", "-o", output_path.to_str().unwrap()])
        .assert()
        .success();

    Command::cargo_bin("nerfuse")
        .unwrap()
        .args(["validate", "-c", output_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings are valid"))
        .stdout(predicate::str::contains("Ignored labels: MONEY"));
}

#[test]
fn test_validate_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad.toml");
    fs::write(&config_path, "[fusion]\nunknown_key = true\n").unwrap();

    Command::cargo_bin("nerfuse")
        .unwrap()
        .args(["validate", "-c", config_path.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Settings are invalid"));
}

#[test]
fn test_process_with_settings() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("nerfuse.toml");
    fs::write(
        &config_path,
        "[fusion]\nignore_labels = [\"DATE\"]\ninput_format = \"slash-tags\"\n",
    )
    .unwrap();

    Command::cargo_bin("nerfuse")
        .unwrap()
        .args(["process", "-c", config_path.to_str().unwrap()])
        .write_stdin("On/O June/DATE 5/DATE ,/O Acme/ORGANIZATION paid/O 5/MONEY euros/MONEY\n")
        .assert()
        .success()
        .stdout("On June 5 , Acme_ORGANIZATION paid 5_euros_MONEY\n");
}

#[test]
fn test_process_with_unreadable_settings() {
    Command::cargo_bin("nerfuse")
        .unwrap()
        .args(["process", "-c", "/nonexistent/nerfuse.toml"])
        .write_stdin("plain\n")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Configuration error"));
}
