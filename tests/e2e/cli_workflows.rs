//! E2E tests for complete CLI workflows
//! Tests the entire application through the command-line interface

use std::process::{Command, Output};

const CLI_BINARY: &str = env!("CARGO_BIN_EXE_intlist");

fn run_command(args: &[&str]) -> Output {
    Command::new(CLI_BINARY)
        .args(args)
        .env_remove("INTLIST_LOG")
        .output()
        .unwrap_or_else(|_| panic!("Failed to execute {CLI_BINARY}"))
}

fn run_command_string(command: &str) -> Output {
    run_command(&["-c", command])
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_print_after_push_back() {
    let output = run_command_string("push_back 1; push_back 2; push_back 3; print");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "[1, 2, 3]\n");
}

#[test]
fn test_empty_list_prints_brackets() {
    let output = run_command_string("print");

    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "[]");
}

#[test]
fn test_round_trip_removals() {
    let output = run_command_string(
        "push_back 1; push_back 2; push_front 0; remove_front; remove_back; print",
    );

    assert!(output.status.success());
    assert_eq!(stdout(&output), "0\n2\n[1]\n");
}

#[test]
fn test_out_of_range_fails() {
    let output = run_command_string("push_back 1; print; get 4");

    assert!(!output.status.success());
    assert_eq!(stdout(&output), "[1]\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_OUT_OF_RANGE"));
    assert!(stderr.contains("intlist:<command>:1:21"));
}

#[test]
fn test_unknown_command_fails() {
    let output = run_command_string("push_back 1; reverse");

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("reverse"));
    assert!(stderr.contains("ERR_UNKNOWN_COMMAND"));
}

#[test]
fn test_sentinel_flag() {
    let output = run_command(&["--sentinel", "-c", "remove_front; get 0; push_back 5; print"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "-1\n-1\n[5]\n");
}

#[test]
fn test_json_flag() {
    let output = run_command(&["--json", "-c", "push_back 1; insert 0 0; push_back 2"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "[0,1,2]\n");
}

#[test]
fn test_clamped_insert_is_logged() {
    let output = run_command_string("insert 4 10; print");

    assert!(output.status.success());
    assert_eq!(stdout(&output), "[4]\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("appended instead"));
}

#[test]
fn test_clamped_insert_is_logged_in_sentinel_mode() {
    let output = run_command(&["--sentinel", "-c", "insert 4 10; print"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "[4]\n");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("appended instead"));
    assert!(stderr.contains("requested=10"));
}

#[test]
fn test_captured_log_has_no_colour_codes() {
    let output = run_command_string("insert 4 10");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("appended instead"));
    assert!(!stderr.contains('\x1b'));
}

#[test]
fn test_command_and_file_conflict() {
    let output = run_command(&["-c", "print", "/nonexistent/script.il"]);

    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot be used with"));
}

#[test]
fn test_no_input_fails() {
    let output = run_command(&[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expected a command string"));
}
