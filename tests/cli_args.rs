//! Runs the built binary. The config directory is pointed at an empty temp
//! dir so a user config never leaks into the results.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn toa_login(args: &[&str]) -> (Output, TempDir) {
    let config_home = TempDir::new().expect("Failed to create temp dir");
    let output = Command::new(env!("CARGO_BIN_EXE_toa-login"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("TOA_LOGIN_LOG")
        .output()
        .expect("Failed to execute command");
    (output, config_home)
}

#[test]
fn help_lists_preview() {
    let (output, _dir) = toa_login(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("preview"));
    assert!(stdout.contains("--config"));
}

#[test]
fn preview_single_state() {
    let (output, _dir) = toa_login(&["preview", "--state", "submission-error"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("── submission-error ──"));
    assert!(stdout.contains("Something went wrong."));
    assert!(stdout.contains("Test@testface.com"));
    assert!(!stdout.contains("PASSWORD"));
}

#[test]
fn preview_all_states() {
    let (output, _dir) = toa_login(&["preview"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in [
        "initial",
        "active",
        "submitting",
        "submission-error",
        "field-errors",
    ] {
        assert!(
            stdout.contains(&format!("── {} ──", name)),
            "missing preview for {}",
            name
        );
    }
    assert!(stdout.contains("Signing in..."));
    assert!(stdout.contains("Please enter an email."));
}

#[test]
fn preview_respects_config_strings() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[ui]\nuppercase_buttons = false\n\n[strings]\nlog_in = \"Sign in\"\n",
    )
    .expect("Failed to write config");

    let path = path.to_string_lossy().to_string();
    let (output, _home) = toa_login(&["--config", &path, "preview", "--state", "initial"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Sign in"));
    assert!(stdout.contains("Sign Up"));
}

#[test]
fn missing_config_exits_with_error() {
    let (output, dir) = toa_login(&["--config", "/nonexistent/toa-login.toml", "preview"]);
    drop(dir);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read config file"));
}

#[test]
fn unknown_preview_state_is_rejected() {
    let (output, _dir) = toa_login(&["preview", "--state", "bogus"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value"));
}
