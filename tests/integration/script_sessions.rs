//! Integration tests for parser + session pipeline
//! Tests scripts driving a list and error propagation

use intlist_core::ListError;
use intlist_script::{ErrorMode, Output, RuntimeFailure, ScriptError, Session, parse_script};

fn run(source: &str) -> Result<Output, ScriptError> {
    let script = parse_script(source, "test.il")?;
    Session::new().execute(&script)
}

#[test]
fn test_parser_session_simple_execution() {
    let output = run("push_back 1; push_back 2; push_back 3; print").unwrap();
    assert_eq!(output.text(), "[1, 2, 3]\n");
}

#[test]
fn test_remove_at_shifts_following_element() {
    let output = run("push_back 10; push_back 20; push_back 30; remove 1; get 1").unwrap();
    assert_eq!(output.lines, vec!["20", "30"]);
}

#[test]
fn test_error_propagation_out_of_range() {
    let result = run("push_back 1\nget 1");

    match result.unwrap_err() {
        ScriptError::Runtime {
            failure,
            filename,
            line,
            column,
            ..
        } => {
            assert_eq!(
                failure,
                RuntimeFailure::List(ListError::OutOfRange { index: 1, len: 1 })
            );
            assert_eq!(filename, "test.il");
            assert_eq!((line, column), (2, 1));
        }
        other => panic!("Expected Runtime error, got {other:?}"),
    }
}

#[test]
fn test_failed_command_leaves_list_unchanged() {
    let script = parse_script("push_back 1; push_back 2; remove 5", "test.il").unwrap();
    let mut session = Session::new();
    let mut output = Output::new();

    assert!(session.run(&script, &mut output).is_err());
    assert_eq!(session.list().to_vec(), vec![1, 2]);
}

#[test]
fn test_syntax_error_runs_nothing() {
    let result = parse_script("push_back 1\npush_back\n", "test.il");
    match result.unwrap_err() {
        ScriptError::Syntax { line, .. } => assert_eq!(line, 2),
        other => panic!("Expected Syntax error, got {other:?}"),
    }
}

#[test]
fn test_sentinel_session_reports_minus_one() {
    let script = parse_script("push_back -1; get 0; get 1; remove_back; remove_back", "test.il").unwrap();
    let output = Session::with_mode(ErrorMode::Sentinel)
        .execute(&script)
        .unwrap();

    // A stored -1 and a failed lookup look the same in this mode
    assert_eq!(output.lines, vec!["-1", "-1", "-1", "-1"]);
}

#[test]
fn test_session_list_reflects_script() {
    let script = parse_script("push_front 2; push_front 1; insert 3 99", "test.il").unwrap();
    let mut session = Session::new();
    session.execute(&script).unwrap();

    let list = session.into_list();
    assert_eq!(list.to_vec(), vec![1, 2, 3]);
    assert_eq!(list.stats().live, 3);
}
