// tests/request_validation.rs

use std::error::Error;
use std::io::Write;

use tasksort::errors::TasksortError;
use tasksort::request::{TasksRequest, load_tasks_from_path, load_tasks_from_reader};
use tasksort::task::TaskSet;
use tasksort_test_utils::builders::{TasksRequestBuilder, task};
use tempfile::Builder;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn valid_request_converts_in_input_order() -> TestResult {
    let request = TasksRequestBuilder::new()
        .with("task-3", "task command 3", &["task-1", "task-2", "task-1"])
        .with("task-1", "task command 1", &[])
        .with_no_requires("task-2", "task command 2")
        .build();

    let tasks = TaskSet::try_from(request)?;

    assert_eq!(
        tasks.tasks(),
        &[
            task("task-3", "task command 3", &["task-1", "task-2"]),
            task("task-1", "task command 1", &[]),
            task("task-2", "task command 2", &[]),
        ]
    );
    Ok(())
}

#[test]
fn unknown_prerequisite_is_rejected() {
    let request = TasksRequestBuilder::new()
        .with("task-2", "task command 2", &["invalid-task-name"])
        .with("task-1", "task command 1", &["task-2"])
        .with("task-3", "task command 3", &[])
        .build();

    match TaskSet::try_from(request) {
        Err(TasksortError::UnknownPrerequisite { task, prerequisite }) => {
            assert_eq!(task, "task-2");
            assert_eq!(prerequisite, "invalid-task-name");
        }
        other => panic!("Expected UnknownPrerequisite, got: {:?}", other),
    }
}

#[test]
fn duplicate_names_are_rejected() {
    let request = TasksRequestBuilder::new()
        .with("build", "make", &[])
        .with("build", "make all", &[])
        .build();

    match TaskSet::try_from(request) {
        Err(TasksortError::DuplicateTaskName(name)) => assert_eq!(name, "build"),
        other => panic!("Expected DuplicateTaskName, got: {:?}", other),
    }
}

#[test]
fn blank_names_are_rejected() {
    let request = TasksRequestBuilder::new()
        .with("ok", "true", &[])
        .with("  ", "true", &[])
        .build();

    let err = TaskSet::try_from(request).unwrap_err();
    assert!(matches!(err, TasksortError::InvalidRequest(ref msg) if msg.contains("position 1")));
    assert!(err.is_client_error());
}

#[test]
fn self_requirement_passes_validation() -> TestResult {
    let request = TasksRequestBuilder::new().with("loop", "true", &["loop"]).build();
    let tasks = TaskSet::try_from(request)?;
    assert_eq!(tasks.len(), 1);
    Ok(())
}

#[test]
fn json_task_file_is_loaded() -> TestResult {
    let mut file = Builder::new().suffix(".json").tempfile()?;
    write!(
        file,
        r#"{{
  "tasks": [
    {{ "name": "test", "command": "cargo test", "requires": ["build"] }},
    {{ "name": "build", "command": "cargo build" }},
    {{ "name": "lint", "command": "cargo clippy", "requires": null }}
  ]
}}"#
    )?;

    let request = load_tasks_from_path(file.path())?;

    assert_eq!(request.tasks.len(), 3);
    assert_eq!(request.tasks[0].requires(), &["build".to_string()]);
    assert!(request.tasks[1].requires().is_empty());
    assert!(request.tasks[2].requires.is_none());
    Ok(())
}

#[test]
fn toml_task_file_is_loaded_in_order() -> TestResult {
    let mut file = Builder::new().suffix(".toml").tempfile()?;
    write!(
        file,
        r#"
[[tasks]]
name = "deploy"
command = "./deploy.sh"
requires = ["build"]

[[tasks]]
name = "build"
command = "make"
"#
    )?;

    let request = load_tasks_from_path(file.path())?;
    let names: Vec<&str> = request.tasks.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["deploy", "build"]);
    Ok(())
}

#[test]
fn malformed_json_reports_json_error() -> TestResult {
    let mut file = Builder::new().suffix(".json").tempfile()?;
    write!(file, r#"{{ "tasks": [ {{ "name": "a" }} ] }}"#)?;

    match load_tasks_from_path(file.path()) {
        Err(TasksortError::JsonError(_)) => Ok(()),
        other => panic!("Expected JsonError, got: {:?}", other),
    }
}

#[test]
fn reader_parses_json_requests() -> TestResult {
    let body = br#"{"tasks":[{"name":"a","command":"echo a"}]}"#;
    let request: TasksRequest = load_tasks_from_reader(&body[..])?;
    assert_eq!(request.tasks[0].command, "echo a");
    Ok(())
}

#[test]
fn missing_task_file_reports_io_error() {
    match load_tasks_from_path("/definitely/not/here/tasks.json") {
        Err(TasksortError::IoError(_)) => {}
        other => panic!("Expected IoError, got: {:?}", other),
    }
}
