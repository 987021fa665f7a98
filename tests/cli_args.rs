//! Tests for CLI argument handling against the built binary.

mod common;

use common::mock_resource::{MockResource, MockResponse};
use common::{sample_users, users_json};
use std::process::Command;

fn user_console_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_user-console"));
    // Missing config file means built-in defaults.
    cmd.args(["--config", "/nonexistent/user-console/config.toml"]);
    cmd.env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_help_lists_options_and_commands() {
    let output = user_console_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--base-url"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("show"));
}

#[test]
fn test_invalid_base_url_exits_with_error() {
    let output = user_console_cmd()
        .args(["--base-url", "not-a-url", "list"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must start with http:// or https://"));
}

#[test]
fn test_unreachable_resource_reports_error() {
    let output = user_console_cmd()
        .args(["--base-url", "http://127.0.0.1:1", "list"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed"), "unexpected stderr: {stderr}");
}

#[test]
fn test_show_requires_id() {
    let output = user_console_cmd()
        .arg("show")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_show_accepts_user_path() {
    let mock = MockResource::start().await;
    mock.enqueue_response(MockResponse::json(&users_json(&sample_users(&[1, 2]))))
        .await;

    let output = user_console_cmd()
        .args(["--base-url", &mock.base_url(), "show", "/user/2"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("User 2's Details"), "unexpected stdout: {stdout}");
    assert!(stdout.contains("Gwenborough"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_show_unknown_user_exits_with_error() {
    let mock = MockResource::start().await;
    mock.enqueue_response(MockResponse::json(&users_json(&sample_users(&[1]))))
        .await;

    let output = user_console_cmd()
        .args(["--base-url", &mock.base_url(), "show", "9"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("User not found"));
}
