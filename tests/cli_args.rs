//! Tests for CLI argument parsing against the built binary.

mod common;

use common::temp_config;
use std::process::Command;

fn fraudshield_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fraudshield"))
}

#[test]
fn help_lists_options() {
    let output = fraudshield_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--model"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--print-config"));
}

#[test]
fn print_config_uses_defaults_for_missing_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = fraudshield_cmd()
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .arg("--print-config")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("id = \"model1\""));
    assert!(stdout.contains("#039855"));
}

#[test]
fn model_override_is_printed() {
    let (_dir, path) = temp_config("");
    let output = fraudshield_cmd()
        .arg("--config")
        .arg(&path)
        .args(["--model", "model2", "--print-config"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("default_model = \"model2\""));
}

#[test]
fn unknown_model_exits_with_error() {
    let (_dir, path) = temp_config("");
    let output = fraudshield_cmd()
        .arg("--config")
        .arg(&path)
        .args(["--model", "nonexistent_model_xyz"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Model 'nonexistent_model_xyz' not found"));
    assert!(stderr.contains("model1, model2, model3"));
}

#[test]
fn invalid_config_exits_with_error() {
    let (_dir, path) = temp_config("[theme]\nbrand = \"blue\"\n");
    let output = fraudshield_cmd()
        .arg("--config")
        .arg(&path)
        .arg("--print-config")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("theme.brand"));
}
