//! Integration tests for top-level CLI behavior.

use std::process::Command;

fn run_taskpad(args: &[&str], api_url: Option<&str>) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_taskpad");
    let mut command = Command::new(bin);
    command.args(args).env_remove("TASKPAD_API_URL").env_remove("TASKPAD_SECRET_KEY");
    if let Some(url) = api_url {
        command.env("TASKPAD_API_URL", url);
    }
    command.output().expect("failed to run taskpad binary")
}

#[test]
fn help_lists_subcommands() {
    let output = run_taskpad(&["--help"], None);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("list"));
    assert!(stdout.contains("add"));
    assert!(stdout.contains("edit"));
    assert!(stdout.contains("remove"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_taskpad(&["nonsense"], None);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}

#[test]
fn missing_api_url_is_reported() {
    let output = run_taskpad(&["list"], None);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("TASKPAD_API_URL"));
}

#[test]
fn add_requires_a_name_argument() {
    let output = run_taskpad(&["add"], Some("http://127.0.0.1:1"));
    assert!(!output.status.success());
}

#[test]
fn unreachable_service_is_a_transport_error() {
    // Port 1 refuses connections locally; no network involved.
    let output = run_taskpad(&["list"], Some("http://127.0.0.1:1"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("request failed"));
}
