//! Tests that run the built `dashboard` binary.

use std::process::{Command, Stdio};

#[test]
fn unreadable_config_exits_with_stderr_message() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");

    let output = Command::new(env!("CARGO_BIN_EXE_dashboard"))
        .arg("--config")
        .arg(&missing)
        .stdout(Stdio::null())
        .output()
        .expect("Failed to run dashboard binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to load configuration: Failed to read config file"),
        "got {stderr}"
    );
}

#[test]
fn invalid_config_exits_with_stderr_message() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[logging]\nformat = \"xml\"\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_dashboard"))
        .arg("--config")
        .arg(&path)
        .stdout(Stdio::null())
        .output()
        .expect("Failed to run dashboard binary");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to load configuration: Failed to parse config"),
        "got {stderr}"
    );
}
